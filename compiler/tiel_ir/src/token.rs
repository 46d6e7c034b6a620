//! Token types produced by the lexer.

use super::{Position, Span};
use std::fmt;

/// A token with its source text and location.
///
/// `lexeme` is the exact slice `source[span]`; `position` is the line and
/// column of `span.start`.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub span: Span,
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span, position: Position) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            span,
            position,
        }
    }

    #[must_use]
    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }

    /// Create a dummy token for testing/generated code.
    pub fn dummy(kind: TokenKind) -> Self {
        Token::new(kind, kind.display_name(), Span::DUMMY, Position::START)
    }

    #[inline]
    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {:?}", self.kind, self.lexeme, self.span)
    }
}

/// One line of `--tokens` output: `line:col Kind 'lexeme' literal`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {:?} '{}'",
            self.position.line, self.position.column, self.kind, self.lexeme
        )?;
        if let Some(literal) = &self.literal {
            write!(f, " {literal}")?;
        }
        Ok(())
    }
}

/// Decoded value of a literal token.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n:?}"),
            Literal::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// Token kinds for TiEL.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Delimiters
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Semicolon,

    // Operators
    Minus,
    Plus,
    Star,
    Slash,
    Equal,
    EqualEqual,
    BangEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    Identifier,
    String,
    Number,

    // Keywords
    And,
    Do,
    Else,
    False,
    Fun,
    If,
    Nil,
    Not,
    Or,
    Return,
    Then,
    True,
    Var,
    While,

    Eof,
}

/// Coarse grouping of token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Delimiter,
    EndOfInput,
}

impl TokenKind {
    pub fn category(self) -> TokenCategory {
        match self {
            TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::Comma
            | TokenKind::Semicolon => TokenCategory::Delimiter,
            TokenKind::Minus
            | TokenKind::Plus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Equal
            | TokenKind::EqualEqual
            | TokenKind::BangEqual
            | TokenKind::Less
            | TokenKind::LessEqual
            | TokenKind::Greater
            | TokenKind::GreaterEqual => TokenCategory::Operator,
            TokenKind::Identifier => TokenCategory::Identifier,
            TokenKind::String | TokenKind::Number => TokenCategory::Literal,
            TokenKind::And
            | TokenKind::Do
            | TokenKind::Else
            | TokenKind::False
            | TokenKind::Fun
            | TokenKind::If
            | TokenKind::Nil
            | TokenKind::Not
            | TokenKind::Or
            | TokenKind::Return
            | TokenKind::Then
            | TokenKind::True
            | TokenKind::Var
            | TokenKind::While => TokenCategory::Keyword,
            TokenKind::Eof => TokenCategory::EndOfInput,
        }
    }

    /// Get a display name for the token kind, used in parse errors.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::BangEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::And => "and",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::Fun => "fun",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Not => "not",
            TokenKind::Or => "or",
            TokenKind::Return => "return",
            TokenKind::Then => "then",
            TokenKind::True => "true",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::Eof => "end of input",
        }
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self.category() == TokenCategory::Keyword
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category() {
            TokenCategory::Identifier | TokenCategory::Literal | TokenCategory::EndOfInput => {
                f.write_str(self.display_name())
            }
            _ => write!(f, "'{}'", self.display_name()),
        }
    }
}
