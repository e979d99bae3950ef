//! Basic forms and collection functions.

use crate::{
    ast::{Expr, Let, Op},
    query::{call, varargs},
    value::{Value, wrap},
};

/// Abort the query with an error message
pub fn abort(msg: impl Into<Value>) -> Expr {
    call(Op::Abort, vec![wrap(msg)])
}

/// Evaluate expressions in order and return the last one.
///
/// Unlike the arithmetic variadics, a single expression is still sent as
/// an array.
pub fn do_<T: Into<Value>>(exprs: impl IntoIterator<Item = T>) -> Expr {
    call(Op::Do, vec![Expr::Array(exprs.into_iter().map(wrap).collect())])
}

/// Evaluate `then` or `elze` depending on `cond`
pub fn if_(cond: impl Into<Value>, then: impl Into<Value>, elze: impl Into<Value>) -> Expr {
    call(Op::If, vec![wrap(cond), wrap(then), wrap(elze)])
}

/// Anonymous function.
///
/// `params` is a variable name or an array of names.
pub fn lambda(params: impl Into<Value>, body: impl Into<Value>) -> Expr {
    call(Op::Lambda, vec![wrap(params), wrap(body)])
}

/// Evaluate `expr` at a snapshot `timestamp`
pub fn at(timestamp: impl Into<Value>, expr: impl Into<Value>) -> Expr {
    call(Op::At, vec![wrap(timestamp), wrap(expr)])
}

/// Start a `Let` expression.
///
/// ```
/// use fql_expr::query::{add, let_, var};
///
/// let expr = let_().bind("x", 1).bind("y", 2).in_(add([var("x"), var("y")]));
/// assert_eq!(
///     expr.to_string(),
///     r#"Let().Bind("x", 1).Bind("y", 2).In(Add(Var("x"), Var("y")))"#
/// );
/// ```
pub fn let_() -> LetBuilder {
    LetBuilder::default()
}

/// Accumulates `Let` bindings until [`in_`](LetBuilder::in_) supplies the body.
#[derive(Debug, Clone, Default)]
pub struct LetBuilder {
    bindings: Vec<(String, Expr)>,
}

impl LetBuilder {
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.bindings.push((name.into(), wrap(value)));
        self
    }

    pub fn in_(self, body: impl Into<Value>) -> Expr {
        Expr::Let(Let {
            bindings: self.bindings,
            body: Box::new(wrap(body)),
        })
    }
}

/// Value of a variable bound by `Let` or a lambda
pub fn var(name: impl Into<String>) -> Expr {
    call(Op::Var, vec![Expr::String(name.into())])
}

/// Invoke a user-defined function
pub fn call_fn<T: Into<Value>>(function: impl Into<Value>, args: impl IntoIterator<Item = T>) -> Expr {
    call(Op::Call, vec![wrap(function), varargs(args)])
}

/// Wrap a lambda into a stored `@query`
pub fn query(lambda: impl Into<Value>) -> Expr {
    call(Op::Query, vec![wrap(lambda)])
}

// Collections

/// Apply `lambda` to each element, returning the results
pub fn map(collection: impl Into<Value>, lambda: impl Into<Value>) -> Expr {
    call(Op::Map, vec![wrap(collection), wrap(lambda)])
}

/// Apply `lambda` to each element, returning the original collection
pub fn foreach(collection: impl Into<Value>, lambda: impl Into<Value>) -> Expr {
    call(Op::Foreach, vec![wrap(collection), wrap(lambda)])
}

/// Keep the elements for which `lambda` returns true
pub fn filter(collection: impl Into<Value>, lambda: impl Into<Value>) -> Expr {
    call(Op::Filter, vec![wrap(collection), wrap(lambda)])
}

pub fn take(num: impl Into<Value>, collection: impl Into<Value>) -> Expr {
    call(Op::Take, vec![wrap(num), wrap(collection)])
}

pub fn drop(num: impl Into<Value>, collection: impl Into<Value>) -> Expr {
    call(Op::Drop, vec![wrap(num), wrap(collection)])
}

pub fn prepend(elems: impl Into<Value>, collection: impl Into<Value>) -> Expr {
    call(Op::Prepend, vec![wrap(elems), wrap(collection)])
}

pub fn append(elems: impl Into<Value>, collection: impl Into<Value>) -> Expr {
    call(Op::Append, vec![wrap(elems), wrap(collection)])
}

unary! {
    is_empty => IsEmpty;
    is_nonempty => IsNonEmpty;
}
