//! Wrap JSON host data into a query expression

use super::CliError;
use crate::{output::WirePrinter, value::Value, wrap};

/// Wrap a JSON document as host data and render the result as wire JSON.
///
/// Plain objects come out escaped under the `object` sigil; `@ts`, `@ref`
/// and the other reserved tags are decoded into the literals they denote.
pub fn wrap_json(input: &str, pretty: bool) -> Result<String, CliError> {
    let json: serde_json::Value = serde_json::from_str(input)?;
    let expr = wrap(Value::from(json));
    Ok(WirePrinter::new(pretty).print(&expr)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objects_are_escaped() {
        let out = wrap_json(r#"{"name": "Alice", "age": 30}"#, false).unwrap();
        assert_eq!(out, r#"{"object":{"age":30,"name":"Alice"}}"#);
    }

    #[test]
    fn escaped_input_is_not_escaped_twice() {
        let out = wrap_json(r#"{"object": {"a": 1}}"#, false).unwrap();
        assert_eq!(out, r#"{"object":{"a":1}}"#);
    }

    #[test]
    fn malformed_tag_payload_fails() {
        let err = wrap_json(r#"{"@date": "yesterday"}"#, false).unwrap_err();
        assert!(matches!(err, CliError::Expr(_)));
    }
}
