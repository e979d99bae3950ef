//! # Query Expression AST
//!
//! This module defines the Abstract Syntax Tree for query expressions sent to
//! the document database. Every expression is an immutable tree of [`Expr`]
//! nodes that can be projected two ways:
//!
//! - the **wire format** ([`crate::output`]), a tagged JSON document the
//!   service consumes
//! - the **debug format** ([`crate::printer`]), a string that reads like the
//!   constructor calls that built the tree
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens of the debug syntax
//! - **[expressions]** - The node model: literals, containers, calls, `Let`
//! - **[ops]** - Per-combinator metadata table ([`Op`])
//! - **[fields]** - Optional fields a combinator may declare
//! - **[tags]** - Reserved wire keys
//!
//! ## Quick Start
//!
//! ```
//! use fql_expr::query::{collection, get, ref_collection};
//! use fql_expr::options::ts;
//!
//! let expr = get(ref_collection(collection("users"), "42"), [ts(1000)]);
//! assert_eq!(
//!     expr.to_string(),
//!     r#"Get(RefCollection(Collection("users"), "42"), TS(1000))"#
//! );
//! ```
//!
//! ## Escaping
//!
//! Combinators and user data are both JSON objects on the wire. A mapping of
//! user data is therefore always wrapped in the `object` sigil:
//!
//! ```text
//! {"object": {"get": "not a combinator"}}
//! ```
//!
//! ## Optional Fields
//!
//! A combinator has a fixed list of required fields plus a sparse set of
//! optional ones. Unset optional fields are left out of the wire document
//! entirely; they are never sent as `null`.
pub mod tokens;
pub mod expressions;
pub mod ops;
pub mod fields;
pub mod tags;

pub use tokens::Token;
pub use expressions::{Call, Expr, Let, RefValue};
pub use ops::{Op, Style};
pub use fields::OptionalField;
