use super::*;
use crate::errors::EvalErrorKind;

fn frame(name: &str, start: u32) -> CallFrame {
    CallFrame {
        name: Rc::from(name),
        call_span: Span::new(start, start + 1),
    }
}

#[test]
fn push_pop_tracks_depth() {
    let mut stack = CallStack::new(4);
    assert!(stack.is_empty());
    assert!(stack.push(frame("a", 0)).is_ok());
    assert!(stack.push(frame("b", 1)).is_ok());
    assert_eq!(stack.depth(), 2);
    stack.pop();
    assert_eq!(stack.depth(), 1);
}

#[test]
fn push_past_limit_fails_without_pushing() {
    let mut stack = CallStack::new(1);
    assert!(stack.push(frame("a", 0)).is_ok());
    let err = stack.push(frame("b", 7)).err();
    assert_eq!(
        err.as_ref().map(|e| &e.kind),
        Some(&EvalErrorKind::CallDepthExceeded { limit: 1 })
    );
    assert_eq!(err.map(|e| e.span), Some(Span::new(7, 8)));
    assert_eq!(stack.depth(), 1);
}

#[test]
fn capture_is_most_recent_first() {
    let mut stack = CallStack::new(8);
    assert!(stack.push(frame("outer", 0)).is_ok());
    assert!(stack.push(frame("inner", 5)).is_ok());
    let names: Vec<_> = stack
        .capture()
        .frames()
        .iter()
        .map(|f| f.name.clone())
        .collect();
    assert_eq!(names, vec!["inner".to_string(), "outer".to_string()]);
}

#[test]
fn attach_keeps_existing_backtrace() {
    let mut stack = CallStack::new(8);
    assert!(stack.push(frame("f", 0)).is_ok());
    let err = stack.attach_backtrace(crate::errors::division_by_zero());
    assert_eq!(err.backtrace.len(), 1);
    assert!(stack.push(frame("g", 2)).is_ok());
    let err = stack.attach_backtrace(err);
    assert_eq!(err.backtrace.len(), 1);
}
