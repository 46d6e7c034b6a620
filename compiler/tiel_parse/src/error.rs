//! Parse error types.

use tiel_diagnostic::{Diagnostic, ErrorCode};
use tiel_ir::{Position, Span, Token, TokenKind};
use tiel_lexer::LexError;

/// A parse error. Parsing stops at the first one.
///
/// `expected` lists the token kinds that would have been accepted at this
/// point; it is empty when any of several constructs could follow (for
/// example "Expect expression.").
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub span: Span,
    pub position: Position,
    pub expected: Vec<TokenKind>,
    pub found: TokenKind,
    pub message: String,
}

impl ParseError {
    /// Error located at `token`.
    #[cold]
    pub fn at(code: ErrorCode, token: &Token, message: impl Into<String>) -> Self {
        ParseError {
            code,
            span: token.span,
            position: token.position,
            expected: Vec::new(),
            found: token.kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_expected(mut self, expected: Vec<TokenKind>) -> Self {
        self.expected = expected;
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.expected.as_slice() {
            [] => format!("found {}", self.found),
            [only] => format!("expected {only}, found {}", self.found),
            many => {
                let names: Vec<String> = many.iter().map(ToString::to_string).collect();
                format!("expected one of {}, found {}", names.join(", "), self.found)
            }
        };
        Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, label)
    }
}

/// Any error raised while turning source text into a [`tiel_ir::Program`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lex(e) => e.span,
            SyntaxError::Parse(e) => e.span,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            SyntaxError::Lex(e) => e.position,
            SyntaxError::Parse(e) => e.position,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxError::Lex(e) => e.code(),
            SyntaxError::Parse(e) => e.code,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SyntaxError::Lex(e) => e.to_diagnostic(),
            SyntaxError::Parse(e) => e.to_diagnostic(),
        }
    }
}
