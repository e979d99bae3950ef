//! Optional parameters of query combinators.
//!
//! A combinator that takes optional parameters accepts a list of
//! [`OptionalParameter`]s built by the modifier functions in this module:
//!
//! ```
//! use fql_expr::query::{index, match_, paginate};
//! use fql_expr::options::{size, ts};
//!
//! let page = paginate(match_(index("all_users")), [size(10), ts(1000)]);
//! assert_eq!(
//!     page.to_string(),
//!     r#"Paginate(Match(Index("all_users")), Size(10), TS(1000))"#
//! );
//! ```
//!
//! Construction goes declare, fill, freeze. [`OptionalSlots::declare`] lists
//! the fields the combinator accepts, the modifiers fill slots in call order
//! (a later modifier for the same field wins), and
//! [`CallBuilder::build`] moves the filled slots into an immutable
//! [`Call`]. A modifier for a field the combinator does not declare is a
//! [`ExprError::OptionalFieldMismatch`].

use std::collections::BTreeMap;

use crate::{
    ast::{Call, Expr, Op, OptionalField},
    error::ExprError,
    value::Value,
};

/// A request to fill one optional field.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalParameter {
    field: OptionalField,
    value: Value,
}

impl OptionalParameter {
    pub(crate) fn new(field: OptionalField, value: impl Into<Value>) -> Self {
        OptionalParameter {
            field,
            value: value.into(),
        }
    }

    pub fn field(&self) -> OptionalField {
        self.field
    }
}

/// The optional fields of one call under construction.
///
/// Declared fresh for every call and consumed by [`freeze`](Self::freeze),
/// so two calls never share slots.
#[derive(Debug)]
pub struct OptionalSlots {
    op: Op,
    slots: Vec<(OptionalField, Option<Expr>)>,
}

impl OptionalSlots {
    pub fn declare(op: Op) -> Self {
        OptionalSlots {
            op,
            slots: op.optional_fields().iter().map(|f| (*f, None)).collect(),
        }
    }

    /// Wrap the parameter's value and store it in its slot.
    pub fn set(&mut self, param: OptionalParameter) -> Result<(), ExprError> {
        let OptionalParameter { field, value } = param;
        match self.slots.iter_mut().find(|(f, _)| *f == field) {
            Some((_, slot)) => {
                *slot = Some(value.into_expr());
                Ok(())
            }
            None => Err(ExprError::OptionalFieldMismatch {
                op: self.op.name(),
                field: field.wire_name(),
            }),
        }
    }

    pub fn freeze(self) -> BTreeMap<OptionalField, Expr> {
        self.slots
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .collect()
    }
}

/// Builder state of a [`Call`]: required arguments are fixed, optional
/// slots are still open.
#[derive(Debug)]
pub struct CallBuilder {
    op: Op,
    args: Vec<Expr>,
    slots: OptionalSlots,
}

impl CallBuilder {
    pub fn new(op: Op, args: Vec<Expr>) -> Self {
        CallBuilder {
            op,
            args,
            slots: OptionalSlots::declare(op),
        }
    }

    pub fn apply(mut self, param: OptionalParameter) -> Result<Self, ExprError> {
        self.slots.set(param)?;
        Ok(self)
    }

    /// Apply parameters in order, stopping at the first mismatch
    pub fn apply_all(
        self,
        params: impl IntoIterator<Item = OptionalParameter>,
    ) -> Result<Self, ExprError> {
        params.into_iter().try_fold(self, CallBuilder::apply)
    }

    pub fn build(self) -> Call {
        Call {
            op: self.op,
            args: self.args,
            options: self.slots.freeze(),
        }
    }
}

// Modifiers

/// Snapshot time to evaluate at.
///
/// Accepted by: Get, Exists, Paginate.
pub fn ts(timestamp: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::Ts, timestamp)
}

/// Cursor for the next page, inclusive. Accepted by: Paginate.
pub fn after(cursor: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::After, cursor)
}

/// Cursor for the previous page, exclusive. Accepted by: Paginate.
pub fn before(cursor: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::Before, cursor)
}

/// Whether a page should hold historical events. Accepted by: Paginate.
pub fn events_opt(events: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::Events, events)
}

/// Page size. Accepted by: Paginate.
pub fn size(size: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::Size, size)
}

/// Include the source sets along with each element. Accepted by: Paginate.
pub fn sources(sources: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::Sources, sources)
}

/// Offset to start searching at. Accepted by: FindStr, FindStrRegex.
pub fn start(start: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::Start, start)
}

/// Number of characters to copy. Accepted by: SubString.
pub fn str_length(length: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::Length, length)
}

/// Replace only the first match. Accepted by: ReplaceStrRegex.
pub fn only_first() -> OptionalParameter {
    OptionalParameter::new(OptionalField::First, true)
}

/// Value returned when the path is absent. Accepted by: Select.
pub fn default(value: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::Default, value)
}

/// Separator placed between joined strings. Accepted by: Concat.
pub fn separator(sep: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::Separator, sep)
}

/// Number of decimal places. Accepted by: Round, Trunc.
pub fn precision(precision: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::Precision, precision)
}

/// Lambda resolving key conflicts. Accepted by: Merge.
pub fn conflict_resolver(lambda: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::Lambda, lambda)
}

/// Unicode normalizer to apply, see [`crate::query::normalizer`].
/// Accepted by: Casefold.
pub fn normalizer(norm: impl Into<Value>) -> OptionalParameter {
    OptionalParameter::new(OptionalField::Normalizer, norm)
}

/// Build the modifier written as `name(value)` in debug output.
///
/// Returns `None` for names that are not modifiers. `OnlyFirst` ignores
/// `value`.
pub fn modifier(name: &str, value: impl Into<Value>) -> Option<OptionalParameter> {
    match OptionalField::from_modifier_name(name)? {
        OptionalField::First => Some(only_first()),
        field => Some(OptionalParameter::new(field, value)),
    }
}
