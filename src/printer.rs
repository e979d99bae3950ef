//! Debug rendering of query expressions.
//!
//! Output reads like the constructor calls that built the tree, for example
//! `Paginate(Match(Index("all_users")), Size(10))`. It is meant for logs and
//! test fixtures, and [`crate::parser`] reads it back.

use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE};

use crate::{
    ast::{Call, Expr, Let, OptionalField, RefValue, Style},
    output::format_timestamp,
};

/// Placeholder printed for [`Expr::Invalid`]
pub const INVALID: &str = "invalidExpr";

pub fn print(expr: &Expr) -> String {
    match expr {
        Expr::Null => "null".to_string(),
        Expr::Boolean(b) => b.to_string(),
        Expr::Integer(n) => n.to_string(),
        // Debug keeps the ".0" that tells a float from an integer
        Expr::Float(n) => format!("{:?}", n),
        Expr::String(s) => quote(s),

        Expr::Bytes(b) => format!("BytesV({})", quote(&URL_SAFE.encode(b))),
        Expr::Time(t) => format!("TimeV({})", quote(&format_timestamp(t))),
        Expr::Date(d) => format!("DateV({})", quote(&d.format("%Y-%m-%d").to_string())),
        Expr::Ref(r) => print_ref(r),
        Expr::SetRef(params) => format!("SetRefV{}", print_fields(params)),
        Expr::QueryValue(lambda) => format!("QueryV({})", print(lambda)),

        Expr::Object(fields) => format!("Obj{}", print_fields(fields)),
        Expr::Array(items) => format!("Arr{{{}}}", join(items.iter().map(print))),

        Expr::Call(call) => print_call(call),
        Expr::Let(l) => print_let(l),
        Expr::Invalid(_) => INVALID.to_string(),
    }
}

fn print_call(call: &Call) -> String {
    let op = call.op;
    let mut name = op.name().to_string();
    let mut args: Vec<String> = Vec::new();

    match op.style() {
        Style::Plain => args.extend(call.args.iter().map(print)),

        Style::NoArgs => {
            if !matches!(call.args.as_slice(), [Expr::Null]) {
                args.extend(call.args.iter().map(print));
            }
        }

        Style::Variadic => {
            if let Some((last, fixed)) = call.args.split_last() {
                args.extend(fixed.iter().map(print));
                match last {
                    Expr::Array(items) if items.len() != 1 => args.extend(items.iter().map(print)),
                    other => args.push(print(other)),
                }
            }
        }

        Style::Sequence => {
            if let Some((last, fixed)) = call.args.split_last() {
                args.extend(fixed.iter().map(print));
                match last {
                    Expr::Array(items) => args.extend(items.iter().map(print)),
                    other => args.push(print(other)),
                }
            }
        }

        Style::Scoped => {
            args.extend(call.args.iter().map(print));
            if let Some(scope) = call.option(OptionalField::Scope) {
                name = format!("Scoped{}", name);
                args.push(print(scope));
            }
        }

        // Only the exact null literal selects the unscoped form
        Style::KeyScoped => match call.args.as_slice() {
            [Expr::Null] => {}
            scope => {
                name = format!("Scoped{}", name);
                args.extend(scope.iter().map(print));
            }
        },

        Style::Terms => {
            args.extend(call.args.iter().map(print));
            if let Some(terms) = call.option(OptionalField::Terms) {
                name = format!("{}Terms", name);
                args.push(print(terms));
            }
        }
    }

    args.extend(print_modifiers(call));
    format!("{}({})", name, args.join(", "))
}

/// Modifier tokens for the populated optional fields, declared fields first
fn print_modifiers(call: &Call) -> Vec<String> {
    let declared = call.op.optional_fields();
    let undeclared = call.options.keys().copied().filter(|f| !declared.contains(f));

    declared
        .iter()
        .copied()
        .chain(undeclared)
        .filter_map(|field| {
            let modifier = field.modifier_name()?;
            let value = call.option(field)?;
            Some(match field {
                OptionalField::First => format!("{}()", modifier),
                _ => format!("{}({})", modifier, print(value)),
            })
        })
        .collect()
}

fn print_let(l: &Let) -> String {
    let mut s = String::from("Let()");
    for (name, value) in &l.bindings {
        s.push_str(&format!(".Bind({}, {})", quote(name), print(value)));
    }
    s.push_str(&format!(".In({})", print(&l.body)));
    s
}

fn print_ref(r: &RefValue) -> String {
    let mut args = vec![quote(&r.id)];
    match (&r.collection, &r.database) {
        (None, None) => {}
        (Some(c), None) => args.push(print_ref(c)),
        (c, Some(d)) => {
            args.push(c.as_deref().map_or("null".to_string(), print_ref));
            args.push(print_ref(d));
        }
    }
    format!("RefV({})", args.join(", "))
}

fn print_fields<'a>(fields: impl IntoIterator<Item = (&'a String, &'a Expr)>) -> String {
    let entries = fields
        .into_iter()
        .map(|(key, value)| format!("{}: {}", quote(key), print(value)));
    format!("{{{}}}", join(entries))
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

/// Double-quoted string with JSON-style escapes
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print(self))
    }
}
