use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_messages() {
    let cases = [
        (undefined_variable("x"), "Undefined variable 'x'."),
        (
            operands_must_be_numbers("+", &Value::string("a"), &Value::Number(1.0)),
            "Operands to '+' must be numbers.",
        ),
        (
            operand_must_be_number("-", &Value::Bool(true)),
            "Operand to '-' must be a number.",
        ),
        (condition_not_boolean(&Value::Number(1.0)), "Condition must be a boolean."),
        (not_callable(&Value::Nil), "Can only call functions."),
        (division_by_zero(), "Division by zero."),
        (wrong_arg_count(2, 1), "Expected 2 arguments but got 1."),
        (call_depth_exceeded(1000), "Maximum call depth of 1000 exceeded."),
        (step_budget_exhausted(50), "Step budget of 50 exhausted."),
    ];
    for (err, message) in cases {
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn test_error_kinds() {
    assert_eq!(undefined_variable("x").error_kind(), ErrorKind::UndefinedName);
    assert_eq!(not_callable(&Value::Nil).error_kind(), ErrorKind::Type);
    assert_eq!(
        condition_not_boolean(&Value::Nil).error_kind(),
        ErrorKind::Type
    );
    assert_eq!(division_by_zero().error_kind(), ErrorKind::Arithmetic);
    assert_eq!(wrong_arg_count(0, 1).error_kind(), ErrorKind::Arity);
    assert_eq!(call_depth_exceeded(1).error_kind(), ErrorKind::ResourceLimit);
    assert_eq!(step_budget_exhausted(1).error_kind(), ErrorKind::ResourceLimit);
}

#[test]
fn test_diagnostic_carries_span_and_label() {
    let err = operands_must_be_numbers("*", &Value::string("a"), &Value::Nil).at(Span::new(4, 5));
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E2002);
    assert_eq!(diag.message, "Operands to '*' must be numbers.");
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
    assert_eq!(diag.labels[0].message, "found string and nil");
}

#[test]
fn test_diagnostic_with_backtrace() {
    let backtrace = EvalBacktrace::new(vec![
        BacktraceFrame {
            name: "inner".into(),
            call_span: Span::new(20, 27),
        },
        BacktraceFrame {
            name: "outer".into(),
            call_span: Span::new(40, 47),
        },
    ]);
    let err = division_by_zero()
        .at(Span::new(10, 15))
        .with_backtrace(backtrace);
    let diag = err.to_diagnostic();
    assert_eq!(diag.labels.len(), 2);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.labels[1].message, "in this call to `inner`");
    assert_eq!(diag.notes, vec!["2 calls deep".to_string()]);
    assert_eq!(
        err.backtrace.to_string(),
        "stack backtrace:\n  0: inner at 20..27\n  1: outer at 40..47\n"
    );
}

#[test]
fn test_nil_condition_has_hint() {
    assert_eq!(condition_not_boolean(&Value::Nil).notes.len(), 1);
    assert!(condition_not_boolean(&Value::Bool(true)).notes.is_empty());
}

#[test]
fn test_arity_label_pluralizes() {
    let one = wrong_arg_count(1, 0).at(Span::new(0, 3)).to_diagnostic();
    assert_eq!(one.labels[0].message, "expected 1 argument");
    let two = wrong_arg_count(2, 0).at(Span::new(0, 3)).to_diagnostic();
    assert_eq!(two.labels[0].message, "expected 2 arguments");
}
