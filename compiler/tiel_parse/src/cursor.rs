//! Token cursor with one token of lookahead.
//!
//! The cursor pulls tokens from any iterator of `Result<Token, E>`, so the
//! parser can run directly on the lazy lexer (lex errors surface as `E`) or
//! on an already collected token list.

use tiel_ir::{Position, Span, Token, TokenKind};
use tracing::trace;

pub struct Cursor<I> {
    tokens: I,
    current: Token,
    previous_span: Span,
}

impl<I, E> Cursor<I>
where
    I: Iterator<Item = Result<Token, E>>,
{
    /// Create a cursor positioned on the first token.
    pub fn new(mut tokens: I) -> Result<Self, E> {
        let current = match tokens.next() {
            Some(token) => token?,
            None => synthetic_eof(Span::DUMMY, Position::START),
        };
        Ok(Cursor {
            tokens,
            current,
            previous_span: Span::DUMMY,
        })
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current.span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.previous_span
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token and return it.
    ///
    /// At `Eof` the cursor stays put and keeps returning `Eof`. A stream that
    /// ends without `Eof` gets one synthesized after its last token.
    pub fn advance(&mut self) -> Result<Token, E> {
        if self.is_at_end() {
            return Ok(self.current.clone());
        }
        let next = match self.tokens.next() {
            Some(token) => token?,
            None => synthetic_eof(Span::point(self.current.span.end), self.current.position),
        };
        let token = std::mem::replace(&mut self.current, next);
        trace!(
            kind = ?token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        self.previous_span = token.span;
        Ok(token)
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Result<bool, E> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

fn synthetic_eof(span: Span, position: Position) -> Token {
    Token::new(TokenKind::Eof, "", span, position)
}

#[cfg(test)]
mod tests;
