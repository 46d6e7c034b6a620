//! Grammar productions.
//!
//! - `stmt.rs`: program, declarations, statements, blocks
//! - `expr.rs`: the precedence chain down to primary expressions

mod expr;
mod stmt;

use tiel_diagnostic::ErrorCode;
use tiel_ir::{Name, Token, TokenKind};

use crate::{ParseError, Parser};

impl<I, E> Parser<'_, I>
where
    I: Iterator<Item = Result<Token, E>>,
    E: From<ParseError>,
{
    /// Consume a token of `kind` or fail with `message`.
    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, E> {
        if self.cursor.check(kind) {
            self.cursor.advance()
        } else {
            Err(self.expect_error(kind, message).into())
        }
    }

    #[cold]
    #[inline(never)]
    fn expect_error(&self, kind: TokenKind, message: &str) -> ParseError {
        ParseError::at(ErrorCode::E1001, self.cursor.current(), message).with_expected(vec![kind])
    }

    /// Consume an identifier and intern it.
    fn expect_ident(&mut self, message: &str) -> Result<Name, E> {
        let token = self.expect(TokenKind::Identifier, message)?;
        Ok(self.interner.intern(&token.lexeme))
    }

    #[cold]
    fn error_at_current(&self, code: ErrorCode, message: &str) -> E {
        ParseError::at(code, self.cursor.current(), message).into()
    }
}
