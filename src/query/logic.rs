//! Comparison, logic and path selection.

use crate::{
    ast::{Expr, Op},
    options::OptionalParameter,
    query::{call, call_with},
    value::{Value, wrap},
};

variadic! {
    /// True when every argument is equal
    equals => Equals;
    lt => LT;
    lte => LTE;
    gt => GT;
    gte => GTE;
    and => And;
    or => Or;
}

unary! {
    not => Not;
}

/// Whether `path` exists in `value`
pub fn contains(path: impl Into<Value>, value: impl Into<Value>) -> Expr {
    call(Op::Contains, vec![wrap(path), wrap(value)])
}

/// Value at `path` inside `value`.
///
/// Optional parameters: [`default`](crate::options::default).
#[track_caller]
pub fn select(
    path: impl Into<Value>,
    value: impl Into<Value>,
    options: impl IntoIterator<Item = OptionalParameter>,
) -> Expr {
    call_with(Op::Select, vec![wrap(path), wrap(value)], options)
}

/// Every value under `path`, flattened
pub fn select_all(path: impl Into<Value>, value: impl Into<Value>) -> Expr {
    call(Op::SelectAll, vec![wrap(path), wrap(value)])
}
