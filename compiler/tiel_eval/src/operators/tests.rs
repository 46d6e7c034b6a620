#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::errors::EvalErrorKind;
use proptest::prelude::*;

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn test_arithmetic() {
    assert_eq!(evaluate_binary(BinaryOp::Add, &num(1.0), &num(2.0)).unwrap(), num(3.0));
    assert_eq!(evaluate_binary(BinaryOp::Sub, &num(1.0), &num(2.0)).unwrap(), num(-1.0));
    assert_eq!(evaluate_binary(BinaryOp::Mul, &num(1.5), &num(2.0)).unwrap(), num(3.0));
    assert_eq!(evaluate_binary(BinaryOp::Div, &num(7.0), &num(2.0)).unwrap(), num(3.5));
}

#[test]
fn test_comparison() {
    let cases = [
        (BinaryOp::Lt, false),
        (BinaryOp::LtEq, true),
        (BinaryOp::Gt, false),
        (BinaryOp::GtEq, true),
    ];
    for (op, expected) in cases {
        assert_eq!(
            evaluate_binary(op, &num(2.0), &num(2.0)).unwrap(),
            Value::Bool(expected),
            "{op}"
        );
    }
}

#[test]
fn test_division_by_zero() {
    let err = evaluate_binary(BinaryOp::Div, &num(1.0), &num(0.0)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    let err = evaluate_binary(BinaryOp::Div, &num(1.0), &num(-0.0)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
}

#[test]
fn test_numeric_operators_reject_other_kinds() {
    let err = evaluate_binary(BinaryOp::Add, &num(1.0), &Value::string("A")).unwrap_err();
    assert_eq!(err.to_string(), "Operands to '+' must be numbers.");
    assert_eq!(
        err.kind,
        EvalErrorKind::OperandsMustBeNumbers {
            op: "+",
            left: "number",
            right: "string"
        }
    );
    let err = evaluate_binary(BinaryOp::Lt, &Value::Nil, &Value::Nil).unwrap_err();
    assert_eq!(err.to_string(), "Operands to '<' must be numbers.");
}

#[test]
fn test_equality_across_kinds() {
    assert_eq!(
        evaluate_binary(BinaryOp::Eq, &num(1.0), &Value::string("1")).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::NotEq, &Value::Nil, &Value::Bool(false)).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Eq, &Value::Nil, &Value::Nil).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Eq, &Value::string("a"), &Value::string("a")).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn test_unary() {
    assert_eq!(evaluate_unary(UnaryOp::Neg, &num(3.0)).unwrap(), num(-3.0));
    assert_eq!(evaluate_unary(UnaryOp::Not, &Value::Nil).unwrap(), Value::Bool(true));
    assert_eq!(evaluate_unary(UnaryOp::Not, &num(0.0)).unwrap(), Value::Bool(false));
    let err = evaluate_unary(UnaryOp::Neg, &Value::string("x")).unwrap_err();
    assert_eq!(err.to_string(), "Operand to '-' must be a number.");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn addition_commutes(a in -1e9f64..1e9, b in -1e9f64..1e9) {
        let ab = evaluate_binary(BinaryOp::Add, &num(a), &num(b)).unwrap();
        let ba = evaluate_binary(BinaryOp::Add, &num(b), &num(a)).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn equality_is_reflexive_for_finite_numbers(a in -1e9f64..1e9) {
        prop_assert_eq!(
            evaluate_binary(BinaryOp::Eq, &num(a), &num(a)).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn exactly_one_ordering_holds(a in -1e3f64..1e3, b in -1e3f64..1e3) {
        let holds = |op| evaluate_binary(op, &num(a), &num(b)).unwrap() == Value::Bool(true);
        let count = [holds(BinaryOp::Lt), holds(BinaryOp::Gt), holds(BinaryOp::Eq)]
            .iter()
            .filter(|h| **h)
            .count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn division_by_nonzero_succeeds(a in -1e6f64..1e6, b in 1e-3f64..1e6) {
        prop_assert!(evaluate_binary(BinaryOp::Div, &num(a), &num(b)).is_ok());
        prop_assert!(evaluate_binary(BinaryOp::Div, &num(a), &num(-b)).is_ok());
    }
}
