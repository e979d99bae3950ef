// tests/printer_tests.rs

use chrono::{DateTime, NaiveDate, Utc};
use fql_expr::options::{after, conflict_resolver, normalizer, only_first, size, str_length, ts};
use fql_expr::printer::print;
use fql_expr::query::{
    add, call_fn, casefold, collection, collections, database, do_, equals, format, function,
    get, index, lambda, let_, match_, match_term, merge, next_id, now, paginate, query, ref_,
    ref_collection, replace_str_regex, scoped_collection, scoped_collections, sub_string, var,
};
use fql_expr::{Value, wrap};
use serde_json::json;
use std::collections::HashMap;

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_scalars() {
    let test_cases = vec![
        (wrap(Value::Null), "null"),
        (wrap(true), "true"),
        (wrap(-12), "-12"),
        (wrap(1.0), "1.0"),
        (wrap(2.5), "2.5"),
        (wrap("users"), r#""users""#),
        (wrap("a\"b\\c\n\u{1}"), r#""a\"b\\c\n\u0001""#),
    ];

    for (expr, expected) in test_cases {
        assert_eq!(print(&expr), expected);
    }
}

#[test]
fn test_tagged_literals() {
    let time: DateTime<Utc> = "2019-06-01T10:00:00.5Z".parse().unwrap();
    assert_eq!(wrap(time).to_string(), r#"TimeV("2019-06-01T10:00:00.5Z")"#);

    let date = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
    assert_eq!(wrap(date).to_string(), r#"DateV("2019-06-01")"#);

    assert_eq!(wrap(Value::bytes(vec![1, 2, 3])).to_string(), r#"BytesV("AQID")"#);
}

#[test]
fn test_reference_literals() {
    let users = wrap(json!({
        "@ref": {"id": "users", "collection": {"@ref": {"id": "collections"}}}
    }));
    assert_eq!(users.to_string(), r#"RefV("users", RefV("collections"))"#);

    let in_db = wrap(json!({"@ref": {"id": "1", "database": {"@ref": {"id": "db"}}}}));
    assert_eq!(in_db.to_string(), r#"RefV("1", null, RefV("db"))"#);

    let set = wrap(json!({"@set": {"match": "idx", "terms": 1}}));
    assert_eq!(set.to_string(), r#"SetRefV{"match": "idx", "terms": 1}"#);

    assert_eq!(ref_("collections/users").to_string(), r#"Ref("collections/users")"#);
}

#[test]
fn test_containers() {
    let mut map = HashMap::new();
    map.insert("b", Value::from(1));
    map.insert("a", Value::from(vec![true, false]));

    assert_eq!(wrap(map).to_string(), r#"Obj{"a": Arr{true, false}, "b": 1}"#);
    assert_eq!(wrap(HashMap::<String, i32>::new()).to_string(), "Obj{}");
    assert_eq!(wrap(Vec::<i32>::new()).to_string(), "Arr{}");
}

#[test]
fn test_invalid_prints_placeholder() {
    assert_eq!(wrap(f64::NAN).to_string(), "invalidExpr");
    assert_eq!(add([wrap(1), wrap(u64::MAX)]).to_string(), "Add(1, invalidExpr)");
}

// ============================================================================
// Calls
// ============================================================================

#[test]
fn test_plain_calls() {
    let expr = get(ref_collection(collection("users"), "42"), []);
    assert_eq!(expr.to_string(), r#"Get(RefCollection(Collection("users"), "42"))"#);

    let expr = lambda("x", var("x"));
    assert_eq!(expr.to_string(), r#"Lambda("x", Var("x"))"#);
}

#[test]
fn test_variadic_calls_flatten_their_arguments() {
    assert_eq!(add([1, 2, 3]).to_string(), "Add(1, 2, 3)");
    assert_eq!(add([1]).to_string(), "Add(1)");
    assert_eq!(add(Vec::<i32>::new()).to_string(), "Add()");
    assert_eq!(equals([var("a"), var("b")]).to_string(), r#"Equals(Var("a"), Var("b"))"#);
    assert_eq!(do_([now()]).to_string(), "Do(Now())");
    assert_eq!(do_([vec![1]]).to_string(), "Do(Arr{1})");

    // A single array argument stays visible as an array
    assert_eq!(add([vec![1]]).to_string(), "Add(Arr{1})");
    assert_eq!(add([vec![1, 2]]).to_string(), "Add(1, 2)");
}

#[test]
fn test_variadic_tail_after_fixed_arguments() {
    assert_eq!(
        call_fn(function("greet"), ["a", "b"]).to_string(),
        r#"Call(Function("greet"), "a", "b")"#
    );
    assert_eq!(
        format("%s", ["x"]).to_string(),
        r#"Format("%s", "x")"#
    );
}

#[test]
fn test_no_argument_calls() {
    assert_eq!(now().to_string(), "Now()");
    assert_eq!(next_id().to_string(), "NextID()");
}

#[test]
fn test_scoped_names() {
    assert_eq!(collection("users").to_string(), r#"Collection("users")"#);
    assert_eq!(
        scoped_collection("users", database("db")).to_string(),
        r#"ScopedCollection("users", Database("db"))"#
    );

    assert_eq!(collections().to_string(), "Collections()");
    assert_eq!(
        scoped_collections(database("db")).to_string(),
        r#"ScopedCollections(Database("db"))"#
    );
    // An explicit null scope is the unscoped form
    assert_eq!(scoped_collections(Value::Null).to_string(), "Collections()");
    // Anything else, even an empty string, is a scope
    assert_eq!(scoped_collections("").to_string(), r#"ScopedCollections("")"#);
}

#[test]
fn test_match_with_and_without_terms() {
    assert_eq!(
        match_term(index("by_name"), "Alice").to_string(),
        r#"MatchTerms(Index("by_name"), "Alice")"#
    );
    assert_eq!(match_(index("by_name")).to_string(), r#"Match(Index("by_name"))"#);
}

#[test]
fn test_modifiers_follow_declaration_order() {
    let expr = paginate(collections(), [ts(1), size(2), after(3)]);
    assert_eq!(expr.to_string(), "Paginate(Collections(), After(3), Size(2), TS(1))");
}

#[test]
fn test_modifier_names() {
    assert_eq!(
        replace_str_regex("a", "b", "c", [only_first()]).to_string(),
        r#"ReplaceStrRegex("a", "b", "c", OnlyFirst())"#
    );
    assert_eq!(
        sub_string("abc", 1, [str_length(1)]).to_string(),
        r#"SubString("abc", 1, StrLength(1))"#
    );
    assert_eq!(
        casefold("A", [normalizer("NFC")]).to_string(),
        r#"Casefold("A", Normalizer("NFC"))"#
    );
    assert_eq!(
        merge(json!({"a": 1}), json!({"b": 2}), [conflict_resolver(lambda(
            json!(["k", "l", "r"]),
            var("r")
        ))])
        .to_string(),
        r#"Merge(Obj{"a": 1}, Obj{"b": 2}, ConflictResolver(Lambda(Arr{"k", "l", "r"}, Var("r"))))"#
    );
}

#[test]
fn test_let() {
    let expr = let_().bind("x", 1).bind("y", "two").in_(var("x"));
    assert_eq!(
        expr.to_string(),
        r#"Let().Bind("x", 1).Bind("y", "two").In(Var("x"))"#
    );
    assert_eq!(let_().in_(1).to_string(), "Let().In(1)");
}

#[test]
fn test_stored_query() {
    let stored = wrap(json!({"@query": "x"}));
    assert_eq!(stored.to_string(), r#"QueryV("x")"#);
    assert_eq!(query(lambda("x", var("x"))).to_string(), r#"Query(Lambda("x", Var("x")))"#);
}
