//! Set functions.

use crate::{
    ast::{Expr, Op, OptionalField},
    options::OptionalParameter,
    query::{call, call_with},
    value::{Value, wrap},
};

unary! {
    /// Set holding a single reference
    singleton => Singleton;
    /// Event history of a reference or set
    events => Events;
    distinct => Distinct;
}

/// Every document of an index with no terms
pub fn match_(index: impl Into<Value>) -> Expr {
    call(Op::Match, vec![wrap(index)])
}

/// Documents of an index matching `terms`
pub fn match_term(index: impl Into<Value>, terms: impl Into<Value>) -> Expr {
    call_with(
        Op::Match,
        vec![wrap(index)],
        [OptionalParameter::new(OptionalField::Terms, terms)],
    )
}

variadic! {
    union => Union;
    intersection => Intersection;
    difference => Difference;
}

/// Merge `with` into the object `merge`.
///
/// Optional parameters: [`conflict_resolver`](crate::options::conflict_resolver).
#[track_caller]
pub fn merge(
    merge: impl Into<Value>,
    with: impl Into<Value>,
    options: impl IntoIterator<Item = OptionalParameter>,
) -> Expr {
    call_with(Op::Merge, vec![wrap(merge), wrap(with)], options)
}

/// Fold `collection` with `lambda`, starting from `initial`
pub fn reduce(lambda: impl Into<Value>, initial: impl Into<Value>, collection: impl Into<Value>) -> Expr {
    call(Op::Reduce, vec![wrap(lambda), wrap(initial), wrap(collection)])
}

/// Join `source` with an index or lambda
pub fn join(source: impl Into<Value>, target: impl Into<Value>) -> Expr {
    call(Op::Join, vec![wrap(source), wrap(target)])
}

/// Subset of `set` between `from` and `to`, inclusive
pub fn range(set: impl Into<Value>, from: impl Into<Value>, to: impl Into<Value>) -> Expr {
    call(Op::Range, vec![wrap(set), wrap(from), wrap(to)])
}
