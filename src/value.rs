use std::collections::{BTreeMap, HashMap};

use base64::{Engine, engine::general_purpose::URL_SAFE};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::{
    ast::{Call, Expr, Op, RefValue, tags},
    error::ExprError,
};

/// A host value handed to a query constructor.
///
/// Every combinator argument goes through [`wrap`], which turns a `Value`
/// into an [`Expr`]. Already-built expressions ride along unchanged in the
/// [`Value::Expr`] variant.
///
/// # Examples
///
/// ```
/// use fql_expr::{Value, wrap, Expr};
/// use std::collections::HashMap;
///
/// // Scalar values
/// assert_eq!(wrap(true), Expr::Boolean(true));
/// assert_eq!(wrap(42), Expr::Integer(42));
/// assert_eq!(wrap("hello"), Expr::String("hello".to_string()));
///
/// // Collections
/// let array = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
/// assert_eq!(wrap(array), Expr::Array(vec![Expr::Integer(1), Expr::Integer(2)]));
///
/// let mut obj = HashMap::new();
/// obj.insert("key".to_string(), Value::String("value".to_string()));
/// assert!(matches!(wrap(Value::Object(obj)), Expr::Object(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,

    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Raw bytes
    Bytes(Vec<u8>),

    Time(DateTime<Utc>),

    Date(NaiveDate),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// Key-value mapping of user data
    Object(HashMap<String, Value>),

    /// An expression that is already built
    Expr(Expr),
}

/// Convert a host value into an expression.
///
/// - scalars become the matching literal node
/// - an [`Expr`] is returned as is
/// - sequences become [`Expr::Array`], each element wrapped in turn
/// - mappings become [`Expr::Object`], each value wrapped in turn, except:
///   - a single-entry mapping keyed by the `object` sigil is transparent,
///     its value is wrapped in place of the mapping
///   - a single-entry mapping keyed by another reserved tag (`@ts`, `@ref`,
///     ...) is decoded into the literal it denotes
///
/// Wrapping never fails outright. A value with no wire representation
/// becomes an [`Expr::Invalid`] that reports the problem when serialized.
pub fn wrap(value: impl Into<Value>) -> Expr {
    value.into().into_expr()
}

impl Value {
    /// Wrap this value, see [`wrap`].
    pub fn into_expr(self) -> Expr {
        match self {
            Value::Null => Expr::Null,
            Value::Boolean(b) => Expr::Boolean(b),
            Value::Integer(n) => Expr::Integer(n),
            Value::Float(n) if n.is_finite() => Expr::Float(n),
            Value::Float(n) => invalid(format!("{} has no wire representation", n)),
            Value::String(s) => Expr::String(s),
            Value::Bytes(b) => Expr::Bytes(b),
            Value::Time(t) if WIRE_YEARS.contains(&t.year()) => Expr::Time(t),
            Value::Time(t) => invalid(format!("timestamp {} is outside years 0-9999", t)),
            Value::Date(d) if WIRE_YEARS.contains(&d.year()) => Expr::Date(d),
            Value::Date(d) => invalid(format!("date {} is outside years 0-9999", d)),
            Value::Array(items) => Expr::Array(items.into_iter().map(Value::into_expr).collect()),
            Value::Object(map) => wrap_object(map),
            Value::Expr(expr) => expr,
        }
    }

    /// Convert any serializable host type through its serde representation.
    ///
    /// Serialization failures (for example a map with non-string keys)
    /// become an [`Expr::Invalid`] carried inside the returned value.
    ///
    /// Expressions nested inside `value` are serialized to their wire form
    /// and then read back as plain data, so build mixed documents with
    /// [`Value::Object`] instead.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Value {
        match serde_json::to_value(value) {
            Ok(json) => Value::from(json),
            Err(e) => Value::Expr(invalid(e.to_string())),
        }
    }

    /// Byte blob value
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Value {
        Value::Bytes(bytes.into())
    }
}

/// Years with a four-digit RFC 3339 spelling
const WIRE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

fn invalid(reason: String) -> Expr {
    tracing::debug!(%reason, "value cannot be wrapped");
    Expr::Invalid(ExprError::wrap(reason))
}

fn wrap_object(mut map: HashMap<String, Value>) -> Expr {
    if map.len() == 1 {
        if let Some(inner) = map.remove(tags::OBJECT) {
            return inner.into_expr();
        }

        if let Some(tag) = tags::RESERVED.iter().copied().find(|tag| map.contains_key(*tag))
            && let Some(payload) = map.remove(tag)
        {
            return decode_tagged(tag, payload);
        }
    }

    Expr::Object(
        map.into_iter()
            .map(|(key, value)| (key, value.into_expr()))
            .collect(),
    )
}

/// Decode the payload of a reserved tag into the literal it denotes
fn decode_tagged(tag: &str, payload: Value) -> Expr {
    match (tag, payload) {
        (tags::TS, Value::Time(t)) => Value::Time(t).into_expr(),
        (tags::TS, Value::String(s)) => match DateTime::parse_from_rfc3339(&s) {
            Ok(t) => Expr::Time(t.with_timezone(&Utc)),
            Err(e) => invalid(format!("invalid {} payload {:?}: {}", tag, s, e)),
        },

        (tags::DATE, Value::Date(d)) => Value::Date(d).into_expr(),
        (tags::DATE, Value::String(s)) => match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            Ok(d) => Expr::Date(d),
            Err(e) => invalid(format!("invalid {} payload {:?}: {}", tag, s, e)),
        },

        (tags::BYTES, Value::Bytes(b)) => Expr::Bytes(b),
        (tags::BYTES, Value::String(s)) => match URL_SAFE.decode(s.as_bytes()) {
            Ok(b) => Expr::Bytes(b),
            Err(e) => invalid(format!("invalid {} payload {:?}: {}", tag, s, e)),
        },

        // A bare string under `@ref` is the legacy path-style reference
        (tags::REF, Value::String(path)) => {
            Expr::Call(Call::new(Op::Ref, vec![Expr::String(path)]))
        }
        (tags::REF, Value::Object(fields)) => match decode_ref(fields) {
            Ok(r) => Expr::Ref(r),
            Err(reason) => invalid(reason),
        },

        (tags::SET, Value::Object(params)) => Expr::SetRef(
            params
                .into_iter()
                .map(|(key, value)| (key, value.into_expr()))
                .collect(),
        ),

        (tags::QUERY, lambda) => Expr::QueryValue(Box::new(lambda.into_expr())),

        (tag, other) => invalid(format!("unexpected {} payload: {:?}", tag, other)),
    }
}

fn decode_ref(mut fields: HashMap<String, Value>) -> Result<RefValue, String> {
    let id = match fields.remove("id") {
        Some(Value::String(id)) => id,
        Some(other) => return Err(format!("reference id must be a string, got {:?}", other)),
        None => return Err("reference is missing its id".to_string()),
    };

    let mut r = RefValue::new(id);
    if let Some(collection) = fields.remove("collection") {
        r = r.with_collection(nested_ref("collection", collection)?);
    }
    if let Some(database) = fields.remove("database") {
        r = r.with_database(nested_ref("database", database)?);
    }

    match fields.keys().next() {
        Some(extra) => Err(format!("unexpected reference field {:?}", extra)),
        None => Ok(r),
    }
}

fn nested_ref(field: &str, value: Value) -> Result<RefValue, String> {
    match value.into_expr() {
        Expr::Ref(r) => Ok(r),
        Expr::Invalid(e) => Err(e.to_string()),
        other => Err(format!("reference {} must be a reference, got {:?}", field, other)),
    }
}

// Conversions

impl From<Expr> for Value {
    fn from(expr: Expr) -> Self {
        Value::Expr(expr)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Integer(i64::from(n))
            }
        })*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! from_wide_integer {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                match i64::try_from(n) {
                    Ok(n) => Value::Integer(n),
                    Err(_) => Value::Expr(invalid(format!("integer {} does not fit in 64 bits", n))),
                }
            }
        })*
    };
}

from_wide_integer!(u64, usize, isize);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Time(t)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, T: Into<Value>> From<HashMap<K, T>> for Value {
    fn from(map: HashMap<K, T>) -> Self {
        Value::Object(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, T: Into<Value>> From<BTreeMap<K, T>> for Value {
    fn from(map: BTreeMap<K, T>) -> Self {
        Value::Object(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if n.is_u64() {
                    Value::Expr(invalid(format!("integer {} does not fit in 64 bits", n)))
                } else {
                    match n.as_f64() {
                        Some(f) => Value::Float(f),
                        None => {
                            Value::Expr(invalid(format!("number {} has no wire representation", n)))
                        }
                    }
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
