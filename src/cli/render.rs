//! Render debug-syntax expressions

use super::CliError;
use crate::{output::WirePrinter, parser, printer};

/// Parse `source` and render its wire JSON
pub fn render_wire(source: &str, pretty: bool) -> Result<String, CliError> {
    let expr = parser::parse(source)?;
    tracing::debug!(expr = %expr, "parsed expression");
    Ok(WirePrinter::new(pretty).print(&expr)?)
}

/// Parse `source` and print it back in canonical debug form
pub fn render_debug(source: &str) -> Result<String, CliError> {
    let expr = parser::parse(source)?;
    Ok(printer::print(&expr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_from_debug_syntax() {
        let wire = render_wire(r#"Add(1, Var("x"))"#, false).unwrap();
        assert_eq!(wire, r#"{"add":[1,{"var":"x"}]}"#);
    }

    #[test]
    fn debug_is_normalized() {
        let debug = render_debug("MatchTerm( Index( \"a\" ),1 )").unwrap();
        assert_eq!(debug, r#"MatchTerms(Index("a"), 1)"#);
    }

    #[test]
    fn unknown_function_is_reported() {
        let err = render_wire("Nope(1)", false).unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
        assert!(err.to_string().contains("unknown function: Nope"));
    }
}
