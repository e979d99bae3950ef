//! Time and date functions.

use crate::{
    ast::{Expr, Op},
    query::call,
    value::{Value, wrap},
};

unary! {
    /// Timestamp from an ISO-8601 string, or `"now"`
    time => Time;
    /// Date from an ISO-8601 date string
    date => Date;
}

/// Timestamp `num` units after the Unix epoch, see [`crate::query::time_unit`]
pub fn epoch(num: impl Into<Value>, unit: impl Into<Value>) -> Expr {
    call(Op::Epoch, vec![wrap(num), wrap(unit)])
}

pub fn time_add(base: impl Into<Value>, offset: impl Into<Value>, unit: impl Into<Value>) -> Expr {
    call(Op::TimeAdd, vec![wrap(base), wrap(offset), wrap(unit)])
}

pub fn time_subtract(base: impl Into<Value>, offset: impl Into<Value>, unit: impl Into<Value>) -> Expr {
    call(Op::TimeSubtract, vec![wrap(base), wrap(offset), wrap(unit)])
}

/// Difference between `start` and `finish` in `unit`s
pub fn time_diff(start: impl Into<Value>, finish: impl Into<Value>, unit: impl Into<Value>) -> Expr {
    call(Op::TimeDiff, vec![wrap(start), wrap(finish), wrap(unit)])
}

/// Snapshot time of the current transaction
pub fn now() -> Expr {
    call(Op::Now, vec![Expr::Null])
}
