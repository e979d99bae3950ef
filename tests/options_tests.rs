// tests/options_tests.rs

use fql_expr::options::{
    self, CallBuilder, OptionalSlots, after, before, default, only_first, precision, size, ts,
};
use fql_expr::query::{
    call_by_name, collection, collections, get, index, match_, paginate, round, select,
};
use fql_expr::{Expr, ExprError, Op, OptionalField, Value, to_wire_value};
use serde_json::json;

fn call(expr: &Expr) -> &fql_expr::Call {
    match expr {
        Expr::Call(call) => call,
        other => panic!("Expected call, got {:?}", other),
    }
}

// ============================================================================
// Declaration
// ============================================================================

#[test]
fn test_declared_fields_start_empty() {
    let slots = OptionalSlots::declare(Op::Paginate);
    assert!(slots.freeze().is_empty());

    let page = paginate(collections(), []);
    assert!(call(&page).options.is_empty());
}

#[test]
fn test_fill_then_freeze() {
    let mut slots = OptionalSlots::declare(Op::Paginate);
    slots.set(size(10)).unwrap();
    slots.set(before("cursor")).unwrap();

    let frozen = slots.freeze();
    assert_eq!(frozen.len(), 2);
    assert_eq!(frozen[&OptionalField::Size], Expr::Integer(10));
    assert_eq!(frozen[&OptionalField::Before], Expr::String("cursor".into()));
}

#[test]
fn test_every_modifier_field_is_declared_somewhere() {
    for field in OptionalField::ALL {
        assert!(
            Op::ALL.iter().any(|op| op.accepts(*field)),
            "{:?} is not accepted by any combinator",
            field
        );
    }
}

// ============================================================================
// Filling
// ============================================================================

#[test]
fn test_modifiers_wrap_their_values() {
    let expr = select(json!(["a"]), json!({"a": 1}), [default(json!({"x": 1}))]);
    assert!(matches!(
        call(&expr).option(OptionalField::Default),
        Some(Expr::Object(_))
    ));
}

#[test]
fn test_last_write_wins() {
    let expr = get(collection("users"), [ts(1), ts(2)]);
    assert_eq!(call(&expr).option(OptionalField::Ts), Some(&Expr::Integer(2)));
    assert_eq!(call(&expr).options.len(), 1);
}

#[test]
fn test_order_of_disjoint_modifiers_is_irrelevant() {
    let a = paginate(collections(), [size(1), after(2), ts(3)]);
    let b = paginate(collections(), [ts(3), size(1), after(2)]);
    assert_eq!(a, b);
}

#[test]
fn test_calls_do_not_share_slots() {
    let first = paginate(match_(index("a")), [size(5)]);
    let second = paginate(match_(index("a")), [after(7)]);

    assert_eq!(
        to_wire_value(&first).unwrap(),
        json!({"paginate": {"match": {"index": "a"}}, "size": 5})
    );
    assert_eq!(
        to_wire_value(&second).unwrap(),
        json!({"paginate": {"match": {"index": "a"}}, "after": 7})
    );
}

#[test]
fn test_only_first_is_always_true() {
    let param = options::modifier("OnlyFirst", Value::Null).unwrap();
    assert_eq!(param.field(), OptionalField::First);
    assert_eq!(param, only_first());
}

#[test]
fn test_modifier_lookup() {
    assert_eq!(options::modifier("TS", 1), Some(ts(1)));
    assert_eq!(options::modifier("Precision", 2), Some(precision(2)));
    assert_eq!(options::modifier("Bogus", 1), None);
    // Constructor-only fields have no modifier
    assert_eq!(options::modifier("Terms", 1), None);
    assert_eq!(options::modifier("Scope", 1), None);
}

// ============================================================================
// Mismatches
// ============================================================================

#[test]
fn test_every_undeclared_modifier_fails() {
    for &op in Op::ALL {
        for &field in OptionalField::ALL {
            let Some(name) = field.modifier_name() else {
                continue;
            };
            let param = options::modifier(name, 1).unwrap();
            let result = CallBuilder::new(op, vec![]).apply(param);

            if op.accepts(field) {
                assert!(result.is_ok(), "{} should accept {}", op.name(), name);
            } else {
                match result {
                    Err(ExprError::OptionalFieldMismatch { op: o, field: f }) => {
                        assert_eq!(o, op.name());
                        assert_eq!(f, field.wire_name());
                    }
                    _ => panic!("{} should reject {}", op.name(), name),
                }
            }
        }
    }
}

#[test]
fn test_apply_all_stops_at_first_mismatch() {
    let result = CallBuilder::new(Op::Get, vec![collection("users")])
        .apply_all([ts(1), size(2), after(3)]);
    assert_eq!(
        result.err(),
        Some(ExprError::OptionalFieldMismatch {
            op: "Get",
            field: "size"
        })
    );
}

#[test]
#[should_panic(expected = "Get does not accept the optional parameter `size`")]
fn test_typed_constructor_panics_on_mismatch() {
    get(collection("users"), [size(10)]);
}

#[test]
#[should_panic(expected = "Round does not accept the optional parameter `ts`")]
fn test_typed_constructor_panics_after_valid_modifiers() {
    round(1.5, [precision(1), ts(2)]);
}

#[test]
fn test_name_dispatch_reports_mismatch() {
    let result = call_by_name("Get", vec![collection("users")], vec![size(1)]);
    assert_eq!(
        result,
        Err(ExprError::OptionalFieldMismatch {
            op: "Get",
            field: "size"
        })
    );
}
