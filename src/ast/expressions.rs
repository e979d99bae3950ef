use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    ast::{Op, OptionalField},
    error::ExprError,
};

/// Abstract Syntax Tree node of a query expression.
///
/// A node is built once (by [`wrap`](crate::wrap) or a constructor in
/// [`crate::query`]) and never mutated afterwards, so it can be shared freely
/// between the wire serializer and the debug printer.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Literals
    /// Null literal
    Null,

    /// Boolean literal
    Boolean(bool),

    /// 64-bit integer literal
    Integer(i64),

    /// Double precision literal
    ///
    /// Must be finite; the wire format has no encoding for NaN or infinity.
    Float(f64),

    /// String literal
    String(String),

    /// Byte blob literal
    ///
    /// # Wire
    /// ```text
    /// {"@bytes": "AQID"}
    /// ```
    Bytes(Vec<u8>),

    /// Timestamp literal
    ///
    /// # Wire
    /// ```text
    /// {"@ts": "2019-06-01T10:00:00.5Z"}
    /// ```
    Time(DateTime<Utc>),

    /// Calendar date literal
    ///
    /// # Wire
    /// ```text
    /// {"@date": "2019-06-01"}
    /// ```
    Date(NaiveDate),

    /// Reference literal, as decoded from a service response
    Ref(RefValue),

    /// Set reference literal, as decoded from a service response.
    /// The inner mapping is not escaped.
    SetRef(BTreeMap<String, Expr>),

    /// Stored query literal wrapping a lambda
    QueryValue(Box<Expr>),

    // Containers
    /// Mapping of user data.
    ///
    /// Wrapped inside the `object` sigil on the wire so that a user key
    /// named like a combinator is never read as one.
    Object(BTreeMap<String, Expr>),

    /// Ordered sequence of expressions
    Array(Vec<Expr>),

    // Combinators
    /// Application of a query language combinator
    Call(Call),

    /// Variable bindings scoped over a body expression
    Let(Let),

    /// Construction-time failure, surfaced when the tree is serialized
    Invalid(ExprError),
}

/// A combinator applied to its arguments.
///
/// `args` line up with [`Op::fields`]; `options` holds only the optional
/// fields that were actually populated.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub op: Op,
    pub args: Vec<Expr>,
    pub options: BTreeMap<OptionalField, Expr>,
}

impl Call {
    /// A call with no optional fields populated
    pub fn new(op: Op, args: Vec<Expr>) -> Self {
        Call {
            op,
            args,
            options: BTreeMap::new(),
        }
    }

    pub fn option(&self, field: OptionalField) -> Option<&Expr> {
        self.options.get(&field)
    }
}

/// `Let` bindings, in binding order.
#[derive(Debug, Clone, PartialEq)]
pub struct Let {
    pub bindings: Vec<(String, Expr)>,
    pub body: Box<Expr>,
}

/// Reference to a document or schema entity.
///
/// Native schema collections (such as `collections` or `indexes`) are
/// references with only an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefValue {
    pub id: String,
    pub collection: Option<Box<RefValue>>,
    pub database: Option<Box<RefValue>>,
}

impl RefValue {
    pub fn new(id: impl Into<String>) -> Self {
        RefValue {
            id: id.into(),
            collection: None,
            database: None,
        }
    }

    pub fn with_collection(mut self, collection: RefValue) -> Self {
        self.collection = Some(Box::new(collection));
        self
    }

    pub fn with_database(mut self, database: RefValue) -> Self {
        self.database = Some(Box::new(database));
        self
    }
}

impl Expr {
    pub fn is_null(&self) -> bool {
        matches!(self, Expr::Null)
    }

    /// True when this node, or any node below it, is an [`Expr::Invalid`].
    pub fn is_valid(&self) -> bool {
        match self {
            Expr::Invalid(_) => false,
            Expr::Object(map) | Expr::SetRef(map) => map.values().all(Expr::is_valid),
            Expr::Array(items) => items.iter().all(Expr::is_valid),
            Expr::QueryValue(inner) => inner.is_valid(),
            Expr::Call(call) => {
                call.args.iter().all(Expr::is_valid) && call.options.values().all(Expr::is_valid)
            }
            Expr::Let(l) => l.bindings.iter().all(|(_, v)| v.is_valid()) && l.body.is_valid(),
            _ => true,
        }
    }
}
