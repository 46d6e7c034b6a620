#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

//! Whole-program tests: source in, printed output or first error out.

use pretty_assertions::assert_eq;
use tiel_diagnostic::{ColorMode, ErrorKind, TerminalEmitter};
use tiel_eval::buffer_handler;
use tielc::{InterpreterConfig, Session, TielError};

fn output(source: &str) -> String {
    let handler = buffer_handler();
    let mut session = Session::with_print_handler(InterpreterConfig::default(), handler.clone());
    if let Err(err) = session.run(source) {
        panic!("program failed: {err}\n{source}");
    }
    handler.get_output()
}

fn failure(source: &str) -> TielError {
    let mut session = Session::with_print_handler(InterpreterConfig::default(), buffer_handler());
    session.run(source).unwrap_err()
}

/// The one-line report a non-terminal stderr would get.
fn report(source: &str) -> String {
    let err = failure(source);
    let mut buf = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut buf, ColorMode::Never, false);
    emitter.emit(&err.to_diagnostic(), source);
    drop(emitter);
    String::from_utf8(buf).unwrap()
}

#[test]
fn fibonacci() {
    let source = r#"
fun fib(n) {
    if n == 0 then {
        return 0;
    } else if n == 1 then {
        return 1;
    } else {
        return fib(n - 1) + fib(n - 2);
    }
}

print(fib(12));
"#;
    assert_eq!(output(source), "144\n");
}

#[test]
fn plus_two() {
    let source = r#"
fun plustwo(n) {
    if n == 0 then {
        return 0;
    } else if n == 1 then {
        return 2;
    } else {
        return plustwo(n - 1)+2;
    }
}

print(plustwo(4));
"#;
    assert_eq!(output(source), "8\n");
}

#[test]
fn logical_operators_produce_boolean() {
    let source = r#"
print(1 and 2);                 // true
print(nil and 2);               // false
print(true and false);          // false
print(false or true);           // true
print(nil or 3);                // true
print(1 and 2 and 3);           // true
print(true and true and true);  // true
print(true and false and true); // false
print(nil and 2 and 3);         // false
print(false or nil or 3);       // true
print(0 or 1 or 2);             // true
print(true or false or nil);    // true
print(1 or 0 and 2);            // true
print((1 or 0) and 2);          // true
print(nil or false and true);   // false
print(true and nil or 1);       // true
print(false or true and false); // false
print(nil and nil and nil);     // false
print(false or false or false); // false
print(true and true and nil);   // false
print(true or true or nil);     // true
"#;
    let expected = [
        "true", "false", "false", "true", "true", "true", "true", "false", "false", "true",
        "true", "true", "true", "true", "false", "true", "false", "false", "false", "false",
        "true",
    ];
    let lines: Vec<_> = output(source).lines().map(str::to_string).collect();
    assert_eq!(lines, expected);
}

#[test]
fn empty_parameter_list() {
    let source = "fun myFunction() {\n    return \"ok!\";\n}\nprint(myFunction());";
    assert_eq!(output(source), "ok!\n");
}

#[test]
fn numbers_are_floats_internally() {
    let source = "var a = 2;\nvar b = 2.0;\nprint(a == b);\nprint(b);";
    assert_eq!(output(source), "true\n2\n");
}

#[test]
fn hello_world() {
    assert_eq!(output("print(\"Hello World!\");"), "Hello World!\n");
}

#[test]
fn strings_with_escapes_and_hex_numbers() {
    assert_eq!(output("print(\"a\\tb\\\\\"); print(0x1F);"), "a\tb\\\n31\n");
}

#[test]
fn large_numbers_print_in_scientific_form() {
    let source = "print(1000000 * 1000000 * 1000000 * 1000); print(10000000); print(1 / 8);";
    assert_eq!(output(source), "1.0E21\n1.0E7\n0.125\n");
}

#[test]
fn closures_capture_environment() {
    let source = r#"
fun make_adder(n) {
    fun add(x) { return x + n; }
    return add;
}
var add5 = make_adder(5);
print(add5(10));
"#;
    assert_eq!(output(source), "15\n");
}

#[test]
fn unterminated_string() {
    let err = failure("var s = \"Hello World!");
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(err.to_string(), "Unterminated string.");
}

#[test]
fn incompatible_types() {
    let err = failure("var x = 1 + \"A\";");
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.to_string(), "Operands to '+' must be numbers.");
}

#[test]
fn missing_semicolon_is_parse_error() {
    let err = failure("print(1)");
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.to_string(), "Expect ';' after expression.");
}

#[test]
fn output_before_error_is_kept() {
    let handler = buffer_handler();
    let mut session = Session::with_print_handler(InterpreterConfig::default(), handler.clone());
    let err = session.run("print(1); print(2 / 0); print(3);").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arithmetic);
    assert_eq!(handler.get_output(), "1\n");
}

#[test]
fn error_reports_have_kind_and_position() {
    assert_eq!(
        report("var x = 1;\nprint(x + nil);"),
        "TypeError at line 2, column 9: Operands to '+' must be numbers.\n"
    );
    assert_eq!(
        report("print(missing);"),
        "UndefinedNameError at line 1, column 7: Undefined variable 'missing'.\n"
    );
    assert_eq!(
        report("var a = 1 / 0;"),
        "ArithmeticError at line 1, column 11: Division by zero.\n"
    );
    assert_eq!(
        report("fun f(a) {}\nf();"),
        "ArityError at line 2, column 1: Expected 1 arguments but got 0.\n"
    );
    assert_eq!(
        report("var s = @;"),
        "LexError at line 1, column 9: Unexpected character '@'.\n"
    );
    assert_eq!(
        report("var = 1;"),
        "ParseError at line 1, column 5: Expect variable name.\n"
    );
}

#[test]
fn resource_limit_report() {
    let config = InterpreterConfig {
        max_call_depth: 10,
        max_steps: None,
    };
    let mut session = Session::with_print_handler(config, buffer_handler());
    let err = session
        .run("fun forever(n) { return forever(n); } forever(1);")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceLimit);
    assert_eq!(err.to_string(), "Maximum call depth of 10 exceeded.");
}

#[test]
fn deeply_nested_programs_run_and_tear_down() {
    let depth = 50_000;

    let blocks = format!("{}print(\"bottom\");{}", "{".repeat(depth), "}".repeat(depth));
    assert_eq!(output(&blocks), "bottom\n");

    let negations = format!("print({}1);", "-".repeat(depth * 2));
    assert_eq!(output(&negations), "1\n");

    let sum = format!("print({}1);", "1 + ".repeat(depth * 2));
    assert_eq!(output(&sum), format!("{}\n", depth * 2 + 1));
}

#[test]
fn deeply_nested_program_prints_as_tree() {
    let depth = 50_000;
    let session = Session::with_print_handler(InterpreterConfig::default(), buffer_handler());
    let source = format!("{}{}", "{".repeat(depth), "}".repeat(depth));
    let program = session.parse(&source).unwrap();
    let printed = session.print_ast(&program);
    assert_eq!(printed.matches("(block").count(), depth);
}
