use super::*;

#[test]
fn buffer_captures_lines() {
    let handler = buffer_handler();
    handler.println("hello");
    handler.println("world");
    assert_eq!(handler.get_output(), "hello\nworld\n");
}

#[test]
fn buffer_clear() {
    let handler = buffer_handler();
    handler.println("gone");
    handler.clear();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn silent_and_stdout_capture_nothing() {
    let silent = silent_handler();
    silent.println("nothing");
    assert_eq!(silent.get_output(), "");
    assert_eq!(stdout_handler().get_output(), "");
}
