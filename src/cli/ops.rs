//! Listing of every combinator

use crate::ast::{Op, Style};

/// One line per combinator: debug name, wire fields and accepted modifiers
pub fn list_ops() -> String {
    let width = Op::ALL.iter().map(|op| op.name().len()).max().unwrap_or(0);
    let mut out = String::new();

    for op in Op::ALL {
        let mut line = format!("{:width$}  {}", op.name(), op.fields().join(", "));
        if matches!(op.style(), Style::Variadic | Style::Sequence) {
            line.push_str("...");
        }

        let modifiers: Vec<&str> = op
            .optional_fields()
            .iter()
            .filter_map(|f| f.modifier_name())
            .collect();
        if !modifiers.is_empty() {
            line.push_str(&format!("  [{}]", modifiers.join(", ")));
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_fields_and_modifiers() {
        let listing = list_ops();
        assert_eq!(listing.lines().count(), Op::ALL.len());

        let paginate = listing
            .lines()
            .find(|l| l.starts_with("Paginate "))
            .unwrap();
        assert!(paginate.ends_with("paginate  [After, Before, EventsOpt, Size, Sources, TS]"));

        let add = listing.lines().find(|l| l.starts_with("Add ")).unwrap();
        assert!(add.ends_with("add..."));
    }
}
