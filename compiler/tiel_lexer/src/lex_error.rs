//! Lexer error types.

use tiel_diagnostic::{Diagnostic, ErrorCode};
use tiel_ir::{Position, Span};

/// A lexer error. Lexing stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("Unexpected character '{0}'.")]
    UnexpectedChar(char),
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Invalid escape sequence '\\{0}'.")]
    InvalidEscape(char),
    #[error("Invalid number literal.")]
    InvalidNumber,
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnexpectedChar(_) => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::InvalidEscape(_) => ErrorCode::E0003,
            LexErrorKind::InvalidNumber => ErrorCode::E0004,
        }
    }
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::UnexpectedChar(_) => "not valid here",
            LexErrorKind::UnterminatedString => "string starts here",
            LexErrorKind::InvalidEscape(_) => "unknown escape",
            LexErrorKind::InvalidNumber => "malformed number",
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);
        match self.kind {
            LexErrorKind::InvalidEscape(_) => {
                diag.with_note("valid escapes are \\n \\t \\r \\\\ \\\" and \\0")
            }
            LexErrorKind::InvalidNumber => {
                diag.with_note("hexadecimal literals are `0x` followed by the digits 0-9 and a-f")
            }
            _ => diag,
        }
    }
}
