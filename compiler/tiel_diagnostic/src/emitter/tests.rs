use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use tiel_ir::Span;

fn render(diag: &Diagnostic, source: &str, colors: ColorMode, tty: bool) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, colors, tty);
        emitter.emit(diag, source);
        emitter.flush();
    }
    String::from_utf8_lossy(&output).into_owned()
}

fn type_error() -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message("Operands to '+' must be numbers.")
        .with_label(Span::new(13, 14), "")
}

#[test]
fn test_headline_without_tty() {
    let source = "var a = 1;\na + \"x\";";
    let text = render(&type_error(), source, ColorMode::Auto, false);
    assert_eq!(
        text,
        "TypeError at line 2, column 3: Operands to '+' must be numbers.\n"
    );
}

#[test]
fn test_snippet_with_tty() {
    let source = "var a = 1;\na + \"x\";";
    let text = render(&type_error(), source, ColorMode::Never, true);
    assert_eq!(
        text,
        "TypeError at line 2, column 3: Operands to '+' must be numbers.\n\
         \x20 --> [E2002]\n\
         \x20|\n\
         2 | a + \"x\";\n\
         \x20|   ^\n"
    );
}

#[test]
fn test_color_codes() {
    let text = render(&type_error(), "var a = 1;\na + \"x\";", ColorMode::Always, false);
    assert!(text.contains("\x1b[1;31mTypeError\x1b[0m"));
}

#[test]
fn test_notes_and_label_message() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("Undefined variable 'count'.")
        .with_label(Span::new(6, 11), "not found in this scope")
        .with_note("declare it with `var count = ...;`");
    let text = render(&diag, "print(count);", ColorMode::Never, true);
    assert!(text.starts_with("UndefinedNameError at line 1, column 7: "));
    assert!(text.contains("      ^^^^^ not found in this scope\n"));
    assert!(text.ends_with("  = note: declare it with `var count = ...;`\n"));
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("sometimes"), None);
    assert!(!ColorMode::Auto.should_use_colors(false));
}
