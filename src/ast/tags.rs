//! Reserved keys of the wire protocol.
//!
//! These strings are a compatibility contract with the database service and
//! must never change.

/// Wraps a mapping of user data so its keys are never read as combinators.
pub const OBJECT: &str = "object";

/// Timestamp literal.
pub const TS: &str = "@ts";

/// Calendar date literal.
pub const DATE: &str = "@date";

/// Byte blob literal (URL-safe base64).
pub const BYTES: &str = "@bytes";

/// Reference literal.
pub const REF: &str = "@ref";

/// Set reference literal.
pub const SET: &str = "@set";

/// Query (stored lambda) literal.
pub const QUERY: &str = "@query";

/// Single-key mappings carrying one of these keys are pre-built constructs,
/// not user data.
pub const RESERVED: &[&str] = &[TS, DATE, BYTES, REF, SET, QUERY];

/// Let bindings and the body they scope over.
pub const LET: &str = "let";
pub const IN: &str = "in";
