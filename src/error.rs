use thiserror::Error;

/// Errors raised while building or serializing an expression.
///
/// Wrap failures and serialization failures are carried inside
/// [`Expr::Invalid`](crate::Expr::Invalid) until the wire serializer reaches
/// them, so a bad leaf never aborts construction of the surrounding tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// A host value has no representation in the query language
    #[error("cannot wrap value: {reason}")]
    Wrap { reason: String },

    /// A modifier targeted an optional field the combinator does not declare
    #[error("{op} does not accept the optional parameter `{field}`")]
    OptionalFieldMismatch { op: &'static str, field: &'static str },

    /// A combinator was built with the wrong number of arguments
    #[error("{op} expects {expected} argument(s), got {got}")]
    Arity {
        op: &'static str,
        expected: String,
        got: usize,
    },

    /// No combinator with this name exists
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// A call node lacks one of its required fields
    #[error("{op} is missing its required field `{field}`")]
    MissingField { op: &'static str, field: &'static str },

    /// Wire document could not be rendered as text
    #[error("JSON encoding failed: {0}")]
    Json(String),
}

impl ExprError {
    pub(crate) fn wrap(reason: impl Into<String>) -> Self {
        ExprError::Wrap {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ExprError {
    fn from(e: serde_json::Error) -> Self {
        ExprError::Json(e.to_string())
    }
}

/// Errors raised while reading the debug syntax back into an expression.
///
/// Positions are character offsets into the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("unterminated string starting at position {position}")]
    UnterminatedString { position: usize },

    #[error("invalid escape sequence \\{escape} at position {position}")]
    InvalidEscape { escape: String, position: usize },

    #[error("invalid number '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    #[error("expected {expected}, found {found} at position {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
    },

    /// A `TimeV`, `DateV`, `BytesV` or `RefV` payload that does not decode
    #[error("invalid {kind} literal at position {position}: {reason}")]
    InvalidLiteral {
        kind: &'static str,
        reason: String,
        position: usize,
    },

    /// The call was well-formed text but not a valid combinator application
    #[error("{source} at position {position}")]
    Build { source: ExprError, position: usize },
}
