//! `tiel --explain CODE`.

use std::process::ExitCode;

use tiel_diagnostic::ErrorCode;

/// Text shown for `code`, or `None` if it is not a known error code.
pub fn explanation(code: &str) -> Option<String> {
    let code: ErrorCode = code.parse().ok()?;
    Some(format!("{code} ({}): {}", code.kind(), code.description()))
}

pub fn explain_error(code: &str) -> ExitCode {
    if let Some(text) = explanation(code) {
        println!("{text}");
        ExitCode::SUCCESS
    } else {
        eprintln!("Unknown error code: {code}");
        eprintln!();
        eprintln!("Codes look like E0001 (lexer), E1001 (parser) or E2001 (runtime).");
        ExitCode::FAILURE
    }
}
