// tests/wire_tests.rs

use chrono::{DateTime, NaiveDate, Utc};
use fql_expr::options::{after, size, sources, ts};
use fql_expr::query::{
    add, call_fn, collection, collections, create, database, do_, documents, format, function,
    get, index, lambda, let_, match_, match_term, now, paginate, query, ref_collection,
    scoped_collection, scoped_collections, select, var,
};
use fql_expr::{
    Call, Expr, ExprError, Op, Value, to_wire, to_wire_pretty, to_wire_value, wrap,
};
use serde::Serialize;
use serde_json::json;
use std::collections::{BTreeSet, HashMap};

fn wire(expr: &Expr) -> serde_json::Value {
    to_wire_value(expr).unwrap()
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_scalars() {
    assert_eq!(to_wire(&wrap(true)).unwrap(), "true");
    assert_eq!(to_wire(&wrap(Value::Null)).unwrap(), "null");
    assert_eq!(to_wire(&wrap(42)).unwrap(), "42");
    assert_eq!(to_wire(&wrap(1.0)).unwrap(), "1.0");
    assert_eq!(to_wire(&wrap("a\"b")).unwrap(), r#""a\"b""#);
}

#[test]
fn test_tagged_literals() {
    let time: DateTime<Utc> = "2019-06-01T10:00:00.5Z".parse().unwrap();
    assert_eq!(wire(&wrap(time)), json!({"@ts": "2019-06-01T10:00:00.5Z"}));

    let whole: DateTime<Utc> = "2019-06-01T10:00:00Z".parse().unwrap();
    assert_eq!(wire(&wrap(whole)), json!({"@ts": "2019-06-01T10:00:00Z"}));

    let nanos: DateTime<Utc> = "2019-06-01T10:00:00.000000123Z".parse().unwrap();
    assert_eq!(wire(&wrap(nanos)), json!({"@ts": "2019-06-01T10:00:00.000000123Z"}));

    let date = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
    assert_eq!(wire(&wrap(date)), json!({"@date": "2019-06-01"}));

    assert_eq!(wire(&wrap(Value::bytes(vec![1, 2, 3]))), json!({"@bytes": "AQID"}));
    assert_eq!(wire(&wrap(Value::bytes(vec![0xfb, 0xff]))), json!({"@bytes": "-_8="}));
}

#[test]
fn test_decoded_literals_serialize_back_unchanged() {
    let documents = [
        json!({"@ref": {"id": "users", "collection": {"@ref": {"id": "collections"}}}}),
        json!({"@ref": {"id": "1", "collection": {"@ref": {"id": "c"}}, "database": {"@ref": {"id": "db"}}}}),
        json!({"@set": {"match": {"@ref": {"id": "idx"}}, "terms": "x"}}),
        json!({"@ts": "2019-06-01T10:00:00Z"}),
    ];
    for document in documents {
        assert_eq!(wire(&wrap(document.clone())), document);
    }
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn test_objects_are_escaped() {
    let mut map = HashMap::new();
    map.insert("get", "not a combinator");
    map.insert("n", "1");

    assert_eq!(
        wire(&wrap(map)),
        json!({"object": {"get": "not a combinator", "n": "1"}})
    );
}

#[test]
fn test_nested_objects_are_escaped_at_every_level() {
    let doc = wrap(json!({"data": {"name": "Alice", "tags": [{"k": 1}]}}));
    assert_eq!(
        wire(&doc),
        json!({"object": {"data": {"object": {
            "name": "Alice",
            "tags": [{"object": {"k": 1}}]
        }}}})
    );
}

#[test]
fn test_escaped_input_is_not_escaped_twice() {
    let mut inner = HashMap::new();
    inner.insert("a", 1);
    let mut escaped = HashMap::new();
    escaped.insert("object", Value::from(inner.clone()));

    assert_eq!(wire(&wrap(escaped)), wire(&wrap(inner)));
    assert_eq!(wire(&wrap(json!({"object": {"a": 1}}))), json!({"object": {"a": 1}}));
}

#[test]
fn test_arrays() {
    assert_eq!(wire(&wrap(vec![vec![1, 2], vec![]])), json!([[1, 2], []]));
}

// ============================================================================
// Calls
// ============================================================================

#[test]
fn test_get_without_optionals() {
    let expr = get(ref_collection(collection("users"), "1"), []);
    assert_eq!(
        wire(&expr),
        json!({"get": {"ref": {"collection": "users"}, "id": "1"}})
    );
}

#[test]
fn test_get_with_timestamp_adds_one_key() {
    let plain = wire(&get(ref_collection(collection("users"), "1"), []));
    let at = wire(&get(ref_collection(collection("users"), "1"), [ts(5)]));

    let mut expected = plain.as_object().unwrap().clone();
    expected.insert("ts".to_string(), json!(5));
    assert_eq!(at, serde_json::Value::Object(expected));
}

#[test]
fn test_paginate_emits_only_populated_optionals() {
    let expr = paginate(match_(index("all_users")), [size(10), after(json!(["x"])), sources(true)]);
    assert_eq!(
        wire(&expr),
        json!({
            "paginate": {"match": {"index": "all_users"}},
            "size": 10,
            "after": ["x"],
            "sources": true
        })
    );
}

#[test]
fn test_zero_argument_calls_carry_null() {
    assert_eq!(wire(&now()), json!({"now": null}));
    assert_eq!(wire(&collections()), json!({"collections": null}));
    assert_eq!(
        wire(&scoped_collections(database("db"))),
        json!({"collections": {"database": "db"}})
    );
}

#[test]
fn test_variadic_collapse() {
    assert_eq!(wire(&add([1])), json!({"add": 1}));
    assert_eq!(wire(&add([1, 2])), json!({"add": [1, 2]}));
    assert_eq!(wire(&add(Vec::<i32>::new())), json!({"add": []}));
    assert_eq!(
        wire(&do_([var("a"), var("b")])),
        json!({"do": [{"var": "a"}, {"var": "b"}]})
    );
    assert_eq!(
        wire(&call_fn(function("f"), [1])),
        json!({"call": {"function": "f"}, "arguments": 1})
    );
    assert_eq!(
        wire(&format("%s-%s", ["a", "b"])),
        json!({"format": "%s-%s", "values": ["a", "b"]})
    );
}

#[test]
fn test_do_always_sends_an_array() {
    assert_eq!(wire(&do_([var("x")])), json!({"do": [{"var": "x"}]}));
    assert_eq!(wire(&do_(Vec::<i32>::new())), json!({"do": []}));
    assert_eq!(
        wire(&fql_expr::query::call_by_name("Do", vec![var("x")], vec![]).unwrap()),
        json!({"do": [{"var": "x"}]})
    );
}

#[test]
fn test_internal_slots() {
    assert_eq!(
        wire(&match_term(index("by_name"), "Alice")),
        json!({"match": {"index": "by_name"}, "terms": "Alice"})
    );
    assert_eq!(
        wire(&scoped_collection("users", database("db"))),
        json!({"collection": "users", "scope": {"database": "db"}})
    );
}

fn wire_keys(call: &Call) -> BTreeSet<String> {
    match wire(&Expr::Call(call.clone())) {
        serde_json::Value::Object(map) => map.keys().cloned().collect(),
        other => panic!("{} did not serialize to an object: {}", call.op.name(), other),
    }
}

#[test]
fn test_every_call_emits_exactly_its_populated_fields() {
    for &op in Op::ALL {
        let args: Vec<Expr> = op
            .fields()
            .iter()
            .map(|field| Expr::String(format!("arg-{}", field)))
            .collect();
        let call = Call::new(op, args);

        let required: BTreeSet<String> = op.fields().iter().map(|f| f.to_string()).collect();
        assert_eq!(wire_keys(&call), required, "{}", op.name());

        let document = wire(&Expr::Call(call.clone()));
        for field in op.fields() {
            assert_eq!(document[*field], json!(format!("arg-{}", field)), "{}", op.name());
        }

        for &field in op.optional_fields() {
            let mut with_option = call.clone();
            with_option
                .options
                .insert(field, Expr::String(format!("opt-{}", field.wire_name())));

            let mut expected = required.clone();
            expected.insert(field.wire_name().to_string());
            assert_eq!(
                wire_keys(&with_option),
                expected,
                "{} with {}",
                op.name(),
                field.wire_name()
            );

            let document = wire(&Expr::Call(with_option));
            assert_eq!(
                document[field.wire_name()],
                json!(format!("opt-{}", field.wire_name()))
            );
        }
    }
}

#[test]
fn test_every_declared_optional_has_a_distinct_wire_key() {
    for &op in Op::ALL {
        for &field in op.optional_fields() {
            assert!(
                !op.fields().contains(&field.wire_name()),
                "{} optional {} collides with a required field",
                op.name(),
                field.wire_name()
            );
        }
    }
}

#[test]
fn test_create_with_escaped_params() {
    let expr = create(collection("users"), json!({"data": {"name": "Alice"}}));
    assert_eq!(
        wire(&expr),
        json!({
            "create": {"collection": "users"},
            "params": {"object": {"data": {"object": {"name": "Alice"}}}}
        })
    );
}

#[test]
fn test_let_and_lambda() {
    let expr = let_().bind("x", 1).bind("y", var("x")).in_(var("y"));
    assert_eq!(
        wire(&expr),
        json!({"let": [{"x": 1}, {"y": {"var": "x"}}], "in": {"var": "y"}})
    );

    let stored = query(lambda(json!(["a", "b"]), add([var("a"), var("b")])));
    assert_eq!(
        wire(&stored),
        json!({"query": {"lambda": ["a", "b"], "expr": {"add": [{"var": "a"}, {"var": "b"}]}}})
    );
}

#[test]
fn test_select_default() {
    let expr = select(json!(["data", "name"]), get(documents(collection("users")), []), [
        fql_expr::options::default("unknown"),
    ]);
    assert_eq!(wire(&expr)["default"], json!("unknown"));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_invalid_leaf_fails_the_whole_tree() {
    let expr = create(collection("users"), vec![Value::from(1), Value::from(f64::NAN)]);
    assert!(matches!(to_wire(&expr), Err(ExprError::Wrap { .. })));
    assert!(matches!(to_wire_pretty(&expr), Err(ExprError::Wrap { .. })));
    assert!(!expr.is_valid());
}

#[test]
fn test_captured_error_is_returned_as_is() {
    let invalid = wrap(json!({"@date": "nope"}));
    let captured = match &invalid {
        Expr::Invalid(e) => e.clone(),
        other => panic!("Expected invalid expression, got {:?}", other),
    };
    assert_eq!(to_wire(&add([invalid])), Err(captured));
}

#[test]
fn test_missing_and_extra_fields() {
    let missing = Expr::Call(Call::new(Op::Get, vec![]));
    assert_eq!(
        to_wire(&missing),
        Err(ExprError::MissingField {
            op: "Get",
            field: "get"
        })
    );

    let extra = Expr::Call(Call::new(Op::Now, vec![Expr::Null, Expr::Null]));
    assert!(matches!(to_wire(&extra), Err(ExprError::Arity { op: "Now", got: 2, .. })));
}

#[test]
fn test_non_finite_float_node() {
    assert!(matches!(to_wire(&Expr::Float(f64::NAN)), Err(ExprError::Wrap { .. })));
}

// ============================================================================
// Output formatting
// ============================================================================

#[test]
fn test_keys_are_sorted() {
    let expr = paginate(collections(), [ts(1), size(2)]);
    assert_eq!(
        to_wire(&expr).unwrap(),
        r#"{"paginate":{"collections":null},"size":2,"ts":1}"#
    );
}

#[test]
fn test_pretty_output() {
    let expr = get(collection("users"), []);
    assert_eq!(
        to_wire_pretty(&expr).unwrap(),
        "{\n  \"get\": {\n    \"collection\": \"users\"\n  }\n}"
    );
}

#[derive(Serialize)]
struct Request {
    query: Expr,
}

#[test]
fn test_expressions_embed_in_serde_documents() {
    let body = Request {
        query: get(collection("users"), []),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"query": {"get": {"collection": "users"}}})
    );

    let broken = Request {
        query: wrap(f64::NAN),
    };
    assert!(serde_json::to_string(&broken).is_err());
}
