//! Query language combinators.
//!
//! One constructor per combinator. Arguments accept anything convertible to
//! a [`Value`], including other expressions, so constructors nest directly:
//!
//! ```
//! use fql_expr::query::{collection, create, lambda, map, paginate, documents, get, var};
//! use fql_expr::{Value, to_wire};
//! use std::collections::HashMap;
//!
//! let mut data = HashMap::new();
//! data.insert("name", Value::from("Alice"));
//! let mut params = HashMap::new();
//! params.insert("data", Value::from(data));
//!
//! let insert = create(collection("users"), params);
//! assert_eq!(
//!     to_wire(&insert).unwrap(),
//!     r#"{"create":{"collection":"users"},"params":{"object":{"data":{"object":{"name":"Alice"}}}}}"#
//! );
//!
//! let all = map(paginate(documents(collection("users")), []), lambda("r", get(var("r"), [])));
//! assert_eq!(
//!     all.to_string(),
//!     r#"Map(Paginate(Documents(Collection("users"))), Lambda("r", Get(Var("r"))))"#
//! );
//! ```
//!
//! Constructors that take optional parameters panic when given a modifier
//! the combinator does not declare; that is a programming error, not a
//! runtime condition. [`call_by_name`] is the fallible path for input that
//! is not known at compile time.

use crate::{
    ast::{Call, Expr, Op},
    options::{CallBuilder, OptionalParameter},
    value::{Value, wrap},
};

/// Constructors whose only argument is wrapped into the single field.
macro_rules! unary {
    ($($(#[$meta:meta])* $name:ident => $op:ident;)+) => {
        $(
            $(#[$meta])*
            pub fn $name(value: impl Into<crate::value::Value>) -> crate::ast::Expr {
                crate::query::call(crate::ast::Op::$op, vec![crate::value::wrap(value)])
            }
        )+
    };
}

/// Constructors taking any number of arguments in their last field.
macro_rules! variadic {
    ($($(#[$meta:meta])* $name:ident => $op:ident;)+) => {
        $(
            $(#[$meta])*
            pub fn $name<T: Into<crate::value::Value>>(
                args: impl IntoIterator<Item = T>,
            ) -> crate::ast::Expr {
                crate::query::call(crate::ast::Op::$op, vec![crate::query::varargs(args)])
            }
        )+
    };
}

mod basic;
mod conversion;
mod dispatch;
mod logic;
mod math;
mod read_write;
mod schema;
mod sets;
mod strings;
mod time;

pub use basic::*;
pub use conversion::*;
pub use dispatch::call_by_name;
pub use logic::*;
pub use math::*;
pub use read_write::*;
pub use schema::*;
pub use sets::*;
pub use strings::*;
pub use time::*;

/// Event action names, used with Insert and Remove.
pub mod action {
    pub const CREATE: &str = "create";
    pub const UPDATE: &str = "update";
    pub const DELETE: &str = "delete";
    pub const ADD: &str = "add";
    pub const REMOVE: &str = "remove";
}

/// Time units, used with Epoch, TimeAdd, TimeSubtract and TimeDiff.
pub mod time_unit {
    pub const DAY: &str = "day";
    pub const HALF_DAY: &str = "half day";
    pub const HOUR: &str = "hour";
    pub const MINUTE: &str = "minute";
    pub const SECOND: &str = "second";
    pub const MILLISECOND: &str = "millisecond";
    pub const MICROSECOND: &str = "microsecond";
    pub const NANOSECOND: &str = "nanosecond";
}

/// Unicode normalizers, used with Casefold.
pub mod normalizer {
    pub const NFKC_CASE_FOLD: &str = "NFKCCaseFold";
    pub const NFC: &str = "NFC";
    pub const NFD: &str = "NFD";
    pub const NFKC: &str = "NFKC";
    pub const NFKD: &str = "NFKD";
}

pub(crate) fn call(op: Op, args: Vec<Expr>) -> Expr {
    Expr::Call(Call::new(op, args))
}

#[track_caller]
pub(crate) fn call_with(
    op: Op,
    args: Vec<Expr>,
    options: impl IntoIterator<Item = OptionalParameter>,
) -> Expr {
    match CallBuilder::new(op, args).apply_all(options) {
        Ok(builder) => Expr::Call(builder.build()),
        Err(e) => panic!("{}", e),
    }
}

/// A single argument stands for itself, anything else becomes an array
pub(crate) fn varargs<T: Into<Value>>(args: impl IntoIterator<Item = T>) -> Expr {
    collapse(args.into_iter().map(wrap).collect())
}

pub(crate) fn collapse(mut items: Vec<Expr>) -> Expr {
    if items.len() == 1 {
        items.remove(0)
    } else {
        Expr::Array(items)
    }
}
