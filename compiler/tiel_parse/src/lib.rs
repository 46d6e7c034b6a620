//! Recursive descent parser for TiEL.
//!
//! ```text
//! program     → declaration* EOF
//! declaration → "fun" IDENT "(" params? ")" block
//!             | "var" IDENT "=" expression ";"
//!             | statement
//! statement   → "if" expression "then" statement ( "else" statement )?
//!             | "while" expression "do" statement
//!             | "return" expression? ";"
//!             | block
//!             | expression ";"
//! block       → "{" declaration* "}"
//! ```
//!
//! Expression precedence, lowest first: assignment (right-associative),
//! `or`, `and`, `== !=`, `< <= > >=`, `+ -`, `* /`, unary `not -`, call,
//! primary. Parsing stops at the first error.

mod cursor;
mod error;
mod grammar;

use tiel_ir::{Program, StringInterner, Token};

pub use cursor::Cursor;
pub use error::{ParseError, SyntaxError};

/// Most parameters a function may declare, and most arguments a call may pass.
pub const MAX_PARAMS: usize = 255;

/// Parser state.
pub struct Parser<'a, I> {
    cursor: Cursor<I>,
    interner: &'a StringInterner,
    /// Nesting depth of function bodies; `return` is only valid above zero.
    function_depth: u32,
    /// Accept a final expression statement without its `;`.
    repl: bool,
}

impl<'a, I, E> Parser<'a, I>
where
    I: Iterator<Item = Result<Token, E>>,
    E: From<ParseError>,
{
    pub fn new(tokens: I, interner: &'a StringInterner) -> Result<Self, E> {
        Ok(Parser {
            cursor: Cursor::new(tokens)?,
            interner,
            function_depth: 0,
            repl: false,
        })
    }

    #[must_use]
    pub fn repl_mode(mut self, repl: bool) -> Self {
        self.repl = repl;
        self
    }
}

/// Parse an already lexed token sequence.
///
/// A missing trailing `Eof` token is tolerated.
pub fn parse(
    tokens: impl IntoIterator<Item = Token>,
    interner: &StringInterner,
) -> Result<Program, ParseError> {
    let stream = tokens.into_iter().map(Ok::<Token, ParseError>);
    Parser::new(stream, interner)?.parse_program()
}

/// Lex and parse `source` in one pass.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_source(source: &str, interner: &StringInterner) -> Result<Program, SyntaxError> {
    let stream = tiel_lexer::tokenize(source).map(|t| t.map_err(SyntaxError::from));
    Parser::new(stream, interner)?.parse_program()
}

/// Like [`parse_source`], but the last statement may be an expression
/// without a trailing `;` (one REPL line).
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_repl(source: &str, interner: &StringInterner) -> Result<Program, SyntaxError> {
    let stream = tiel_lexer::tokenize(source).map(|t| t.map_err(SyntaxError::from));
    Parser::new(stream, interner)?
        .repl_mode(true)
        .parse_program()
}
