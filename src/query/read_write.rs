//! Read and write functions.

use crate::{
    ast::{Expr, Op},
    options::OptionalParameter,
    query::{call, call_with},
    value::{Value, wrap},
};

/// Fetch the document behind a reference.
///
/// Optional parameters: [`ts`](crate::options::ts).
#[track_caller]
pub fn get(reference: impl Into<Value>, options: impl IntoIterator<Item = OptionalParameter>) -> Expr {
    call_with(Op::Get, vec![wrap(reference)], options)
}

unary! {
    /// Key document for a secret
    key_from_secret => KeyFromSecret;
}

/// Whether a reference exists, or a set is non-empty.
///
/// Optional parameters: [`ts`](crate::options::ts).
#[track_caller]
pub fn exists(reference: impl Into<Value>, options: impl IntoIterator<Item = OptionalParameter>) -> Expr {
    call_with(Op::Exists, vec![wrap(reference)], options)
}

/// One page of a set.
///
/// Optional parameters: [`after`](crate::options::after),
/// [`before`](crate::options::before), [`events_opt`](crate::options::events_opt),
/// [`size`](crate::options::size), [`sources`](crate::options::sources),
/// [`ts`](crate::options::ts).
#[track_caller]
pub fn paginate(set: impl Into<Value>, options: impl IntoIterator<Item = OptionalParameter>) -> Expr {
    call_with(Op::Paginate, vec![wrap(set)], options)
}

// Write

/// Create a document in a collection
pub fn create(collection: impl Into<Value>, params: impl Into<Value>) -> Expr {
    call(Op::Create, vec![wrap(collection), wrap(params)])
}

unary! {
    /// Deprecated alias of [`create_collection`]
    create_class => CreateClass;
    create_collection => CreateCollection;
    create_database => CreateDatabase;
    create_index => CreateIndex;
    create_key => CreateKey;
    create_function => CreateFunction;
    create_role => CreateRole;
    delete => Delete;
}

/// Move a database under another database
pub fn move_database(from: impl Into<Value>, to: impl Into<Value>) -> Expr {
    call(Op::MoveDatabase, vec![wrap(from), wrap(to)])
}

pub fn update(reference: impl Into<Value>, params: impl Into<Value>) -> Expr {
    call(Op::Update, vec![wrap(reference), wrap(params)])
}

pub fn replace(reference: impl Into<Value>, params: impl Into<Value>) -> Expr {
    call(Op::Replace, vec![wrap(reference), wrap(params)])
}

/// Add an event to a document's history, see [`crate::query::action`]
pub fn insert(
    reference: impl Into<Value>,
    ts: impl Into<Value>,
    action: impl Into<Value>,
    params: impl Into<Value>,
) -> Expr {
    call(
        Op::Insert,
        vec![wrap(reference), wrap(ts), wrap(action), wrap(params)],
    )
}

/// Remove an event from a document's history
pub fn remove(reference: impl Into<Value>, ts: impl Into<Value>, action: impl Into<Value>) -> Expr {
    call(Op::Remove, vec![wrap(reference), wrap(ts), wrap(action)])
}
