//! Wire serialization of query expressions.
//!
//! The wire format is the JSON request body the database service accepts.
//! Every node kind has a fixed shape:
//!
//! - **Literals** map to bare JSON scalars, except timestamps, dates, bytes,
//!   references, set references and stored queries, which use a single-key
//!   object under a reserved `@` tag
//! - **Objects** are escaped one level inside the `object` sigil
//! - **Calls** are one key per required field plus one per populated
//!   optional field; unset optionals are omitted, never `null`
//!
//! Output is deterministic (object keys are sorted).
//!
//! # Examples
//!
//! ```
//! use fql_expr::output::{to_wire, to_wire_pretty};
//! use fql_expr::query::{add, var};
//! use fql_expr::wrap;
//!
//! let expr = add([var("x"), wrap(1)]);
//! assert_eq!(to_wire(&expr).unwrap(), r#"{"add":[{"var":"x"},1]}"#);
//!
//! assert_eq!(
//!     to_wire_pretty(&var("x")).unwrap(),
//!     "{\n  \"var\": \"x\"\n}"
//! );
//! ```
//!
//! A tree holding an [`Expr::Invalid`] anywhere fails as a whole with the
//! error captured when that node was built.

use base64::{Engine, engine::general_purpose::URL_SAFE};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value as Json};

use crate::{
    ast::{Call, Expr, Let, RefValue, tags},
    error::ExprError,
};

pub struct WirePrinter {
    pretty: bool,
}

impl WirePrinter {
    pub fn new(pretty: bool) -> Self {
        WirePrinter { pretty }
    }

    pub fn print(&self, expr: &Expr) -> Result<String, ExprError> {
        let document = to_wire_value(expr)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(text)
    }
}

/// Converts an expression into its wire document.
pub fn to_wire_value(expr: &Expr) -> Result<Json, ExprError> {
    match expr {
        Expr::Null => Ok(Json::Null),
        Expr::Boolean(b) => Ok(Json::Bool(*b)),
        Expr::Integer(n) => Ok(Json::from(*n)),
        Expr::Float(n) => Number::from_f64(*n)
            .map(Json::Number)
            .ok_or_else(|| ExprError::wrap(format!("{} has no wire representation", n))),
        Expr::String(s) => Ok(Json::String(s.clone())),

        Expr::Bytes(b) => Ok(tagged(tags::BYTES, Json::String(URL_SAFE.encode(b)))),
        Expr::Time(t) => Ok(tagged(tags::TS, Json::String(format_timestamp(t)))),
        Expr::Date(d) => Ok(tagged(
            tags::DATE,
            Json::String(d.format("%Y-%m-%d").to_string()),
        )),
        Expr::Ref(r) => Ok(wire_ref(r)),
        Expr::SetRef(params) => Ok(tagged(tags::SET, wire_map(params)?)),
        Expr::QueryValue(lambda) => Ok(tagged(tags::QUERY, to_wire_value(lambda)?)),

        Expr::Object(fields) => Ok(tagged(tags::OBJECT, wire_map(fields)?)),
        Expr::Array(items) => items
            .iter()
            .map(to_wire_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Json::Array),

        Expr::Call(call) => wire_call(call),
        Expr::Let(l) => wire_let(l),

        Expr::Invalid(e) => {
            tracing::debug!(error = %e, "serializing an invalid expression");
            Err(e.clone())
        }
    }
}

fn tagged(tag: &str, payload: Json) -> Json {
    let mut map = Map::new();
    map.insert(tag.to_string(), payload);
    Json::Object(map)
}

fn wire_map<'a>(
    fields: impl IntoIterator<Item = (&'a String, &'a Expr)>,
) -> Result<Json, ExprError> {
    let mut map = Map::new();
    for (key, value) in fields {
        map.insert(key.clone(), to_wire_value(value)?);
    }
    Ok(Json::Object(map))
}

fn wire_call(call: &Call) -> Result<Json, ExprError> {
    let op = call.op;
    let fields = op.fields();

    if call.args.len() > fields.len() {
        return Err(ExprError::Arity {
            op: op.name(),
            expected: fields.len().to_string(),
            got: call.args.len(),
        });
    }

    let mut map = Map::new();
    for (i, &field) in fields.iter().enumerate() {
        let arg = call.args.get(i).ok_or(ExprError::MissingField {
            op: op.name(),
            field,
        })?;
        map.insert(field.to_string(), to_wire_value(arg)?);
    }

    for (field, value) in &call.options {
        map.insert(field.wire_name().to_string(), to_wire_value(value)?);
    }

    Ok(Json::Object(map))
}

fn wire_let(l: &Let) -> Result<Json, ExprError> {
    // Bindings are plain single-key objects, not escaped user data
    let bindings = l
        .bindings
        .iter()
        .map(|(name, value)| Ok(tagged(name, to_wire_value(value)?)))
        .collect::<Result<Vec<_>, ExprError>>()?;

    let mut map = Map::new();
    map.insert(tags::LET.to_string(), Json::Array(bindings));
    map.insert(tags::IN.to_string(), to_wire_value(&l.body)?);
    Ok(Json::Object(map))
}

fn wire_ref(r: &RefValue) -> Json {
    let mut fields = Map::new();
    fields.insert("id".to_string(), Json::String(r.id.clone()));
    if let Some(collection) = &r.collection {
        fields.insert("collection".to_string(), wire_ref(collection));
    }
    if let Some(database) = &r.database {
        fields.insert("database".to_string(), wire_ref(database));
    }
    tagged(tags::REF, Json::Object(fields))
}

/// `2019-06-01T10:00:00.5Z`: UTC, fraction trimmed and omitted when zero
///
/// Years outside 0-9999 never reach here, [`crate::wrap`] rejects them.
pub(crate) fn format_timestamp(t: &DateTime<Utc>) -> String {
    let mut s = t.format("%Y-%m-%dT%H:%M:%S").to_string();
    let nanos = t.timestamp_subsec_nanos();
    if nanos > 0 {
        let fraction = format!("{:09}", nanos);
        s.push('.');
        s.push_str(fraction.trim_end_matches('0'));
    }
    s.push('Z');
    s
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_wire_value(self)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

// Convenience functions

/// Converts an expression to compact wire JSON.
///
/// ```
/// use fql_expr::{to_wire, wrap};
///
/// assert_eq!(to_wire(&wrap(true)).unwrap(), "true");
/// ```
pub fn to_wire(expr: &Expr) -> Result<String, ExprError> {
    WirePrinter::new(false).print(expr)
}

/// Converts an expression to wire JSON indented by two spaces per level.
pub fn to_wire_pretty(expr: &Expr) -> Result<String, ExprError> {
    WirePrinter::new(true).print(expr)
}
