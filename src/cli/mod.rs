//! CLI support for fql-expr
//!
//! Provides programmatic access to the `fql` subcommands so they can be
//! embedded in other tools and tested without spawning a process.

mod ops;
mod render;
mod wrap;

pub use ops::list_ops;
pub use render::{render_debug, render_wire};
pub use wrap::wrap_json;

use std::io;

use thiserror::Error;

use crate::error::{ExprError, ParseError};

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid expression: {0}")]
    Expr(#[from] ExprError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,
}
