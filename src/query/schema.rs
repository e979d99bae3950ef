//! References to schema entities, authentication and identifiers.

use crate::{
    ast::{Expr, Op, OptionalField},
    options::OptionalParameter,
    query::{call, call_with},
    value::{Value, wrap},
};

/// Legacy path-style reference such as `"collections/users/1"`
pub fn ref_(path: impl Into<String>) -> Expr {
    call(Op::Ref, vec![Expr::String(path.into())])
}

/// Reference to document `id` of a collection
pub fn ref_collection(collection: impl Into<Value>, id: impl Into<Value>) -> Expr {
    call(Op::RefCollection, vec![wrap(collection), wrap(id)])
}

/// Deprecated alias of [`ref_collection`]
pub fn ref_class(class: impl Into<Value>, id: impl Into<Value>) -> Expr {
    ref_collection(class, id)
}

fn scoped(op: Op, name: impl Into<Value>, scope: impl Into<Value>) -> Expr {
    call_with(
        op,
        vec![wrap(name)],
        [OptionalParameter::new(OptionalField::Scope, scope)],
    )
}

pub fn database(name: impl Into<Value>) -> Expr {
    call(Op::Database, vec![wrap(name)])
}

/// Database `name` inside the database `scope`
pub fn scoped_database(name: impl Into<Value>, scope: impl Into<Value>) -> Expr {
    scoped(Op::Database, name, scope)
}

pub fn index(name: impl Into<Value>) -> Expr {
    call(Op::Index, vec![wrap(name)])
}

pub fn scoped_index(name: impl Into<Value>, scope: impl Into<Value>) -> Expr {
    scoped(Op::Index, name, scope)
}

/// Deprecated alias of [`collection`]
pub fn class(name: impl Into<Value>) -> Expr {
    call(Op::Class, vec![wrap(name)])
}

pub fn scoped_class(name: impl Into<Value>, scope: impl Into<Value>) -> Expr {
    scoped(Op::Class, name, scope)
}

pub fn collection(name: impl Into<Value>) -> Expr {
    call(Op::Collection, vec![wrap(name)])
}

pub fn scoped_collection(name: impl Into<Value>, scope: impl Into<Value>) -> Expr {
    scoped(Op::Collection, name, scope)
}

pub fn function(name: impl Into<Value>) -> Expr {
    call(Op::Function, vec![wrap(name)])
}

pub fn scoped_function(name: impl Into<Value>, scope: impl Into<Value>) -> Expr {
    scoped(Op::Function, name, scope)
}

pub fn role(name: impl Into<Value>) -> Expr {
    call(Op::Role, vec![wrap(name)])
}

pub fn scoped_role(name: impl Into<Value>, scope: impl Into<Value>) -> Expr {
    scoped(Op::Role, name, scope)
}

unary! {
    /// Set of every document in a collection
    documents => Documents;
}

/// Native schema collections. The unscoped form carries `null` where the
/// scoped form carries the database reference.
macro_rules! native {
    ($($name:ident, $scoped:ident => $op:ident;)+) => {
        $(
            pub fn $name() -> Expr {
                call(Op::$op, vec![Expr::Null])
            }

            pub fn $scoped(scope: impl Into<Value>) -> Expr {
                call(Op::$op, vec![wrap(scope)])
            }
        )+
    };
}

native! {
    classes, scoped_classes => Classes;
    collections, scoped_collections => Collections;
    indexes, scoped_indexes => Indexes;
    databases, scoped_databases => Databases;
    functions, scoped_functions => Functions;
    roles, scoped_roles => Roles;
    keys, scoped_keys => Keys;
    tokens, scoped_tokens => Tokens;
    credentials, scoped_credentials => Credentials;
}

/// Fresh unique document id
pub fn new_id() -> Expr {
    call(Op::NewId, vec![Expr::Null])
}

/// Deprecated alias of [`new_id`]
pub fn next_id() -> Expr {
    call(Op::NextId, vec![Expr::Null])
}

// Authentication

/// Log in as the document `reference`
pub fn login(reference: impl Into<Value>, params: impl Into<Value>) -> Expr {
    call(Op::Login, vec![wrap(reference), wrap(params)])
}

unary! {
    /// End the current session, or every session when `true`
    logout => Logout;
}

/// Check `password` against the credentials of `reference`
pub fn identify(reference: impl Into<Value>, password: impl Into<Value>) -> Expr {
    call(Op::Identify, vec![wrap(reference), wrap(password)])
}

/// Document the current key or token belongs to
pub fn identity() -> Expr {
    call(Op::Identity, vec![Expr::Null])
}

pub fn has_identity() -> Expr {
    call(Op::HasIdentity, vec![Expr::Null])
}
