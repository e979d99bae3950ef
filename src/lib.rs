pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod lexer;
pub mod options;
pub mod output;
pub mod parser;
pub mod printer;
pub mod query;
pub mod value;

pub use ast::{Call, Expr, Op, OptionalField, Token};
pub use error::{ExprError, ParseError};
pub use lexer::Lexer;
pub use output::{to_wire, to_wire_pretty, to_wire_value};
pub use parser::Parser;
pub use value::{Value, wrap};
