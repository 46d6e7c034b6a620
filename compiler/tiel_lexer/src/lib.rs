//! Lexer for TiEL.
//!
//! [`tokenize`] returns a lazy iterator of tokens. Whitespace and `//`
//! comments are skipped; the stream ends with a single [`TokenKind::Eof`]
//! token. Lexing stops at the first error, after which the iterator yields
//! nothing more.
//!
//! Every token satisfies `&source[token.span.as_range()] == token.lexeme`
//! and `token.position` is the 1-based line/column of `token.span.start`.

mod cook_escape;
mod lex_error;
mod raw_token;

use std::iter::FusedIterator;

use logos::Logos;
use tiel_ir::{Literal, Position, Span, Token, TokenKind};

pub use lex_error::{LexError, LexErrorKind};
use raw_token::{RawError, RawToken};

/// Lex `source` lazily.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Lex all of `source`, including the trailing `Eof` token.
pub fn tokenize_all(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize(source).collect()
}

/// Tracks line and column while the lexer moves forward through the source.
#[derive(Clone, Debug)]
struct LineTracker {
    offset: usize,
    position: Position,
}

impl LineTracker {
    fn new() -> Self {
        LineTracker {
            offset: 0,
            position: Position::START,
        }
    }

    /// Position of `offset`. Offsets must not decrease between calls.
    fn advance_to(&mut self, source: &str, offset: usize) -> Position {
        if offset > self.offset {
            for c in source[self.offset..offset].chars() {
                if c == '\n' {
                    self.position.line += 1;
                    self.position.column = 1;
                } else {
                    self.position.column += 1;
                }
            }
            self.offset = offset;
        }
        self.position
    }
}

/// Iterator over the tokens of a source string.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    lines: LineTracker,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            lines: LineTracker::new(),
            finished: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    fn eof(&mut self) -> Token {
        let end = self.source.len();
        let position = self.lines.advance_to(self.source, end);
        Token::new(TokenKind::Eof, "", Span::from_range(end..end), position)
    }

    fn error(&mut self, raw: RawError, range: std::ops::Range<usize>) -> LexError {
        let slice = &self.source[range.clone()];
        let (kind, range) = match raw {
            RawError::Unrecognized => {
                let c = slice.chars().next().unwrap_or('\0');
                (
                    LexErrorKind::UnexpectedChar(c),
                    range.start..range.start + c.len_utf8(),
                )
            }
            RawError::UnterminatedString => (LexErrorKind::UnterminatedString, range),
            RawError::InvalidEscape { escape, offset } => {
                let start = range.start + offset;
                (LexErrorKind::InvalidEscape(escape), start..range.end)
            }
            RawError::InvalidNumber => (LexErrorKind::InvalidNumber, range),
        };
        let position = self.lines.advance_to(self.source, range.start);
        LexError {
            kind,
            span: Span::from_range(range),
            position,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(result) = self.raw.next() else {
            self.finished = true;
            return Some(Ok(self.eof()));
        };

        let range = self.raw.span();
        match result {
            Ok(raw) => {
                let position = self.lines.advance_to(self.source, range.start);
                let lexeme = self.raw.slice();
                let token = Token::new(raw.kind(), lexeme, Span::from_range(range), position);
                Some(Ok(match raw {
                    RawToken::Number(n) => token.with_literal(Literal::Number(n)),
                    RawToken::String(s) => token.with_literal(Literal::Str(s)),
                    _ => token,
                }))
            }
            Err(raw) => {
                self.finished = true;
                Some(Err(self.error(raw, range)))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}
