//! Logos token definitions.
//!
//! `RawToken` recognizes the lexical grammar; [`crate::Lexer`] attaches
//! lexemes, spans and positions and maps it onto [`TokenKind`].

use logos::Logos;
use tiel_ir::TokenKind;

use crate::cook_escape::{scan_string, StringScan};

/// Failure reported by a logos callback.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum RawError {
    /// No rule matched.
    #[default]
    Unrecognized,
    UnterminatedString,
    /// `offset` is the byte offset of the backslash from the opening quote.
    InvalidEscape { escape: char, offset: usize },
    InvalidNumber,
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    // === Delimiters ===
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // === Operators ===
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,

    // === Keywords ===
    #[token("and")]
    And,
    #[token("do")]
    Do,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("fun")]
    Fun,
    #[token("if")]
    If,
    #[token("nil")]
    Nil,
    #[token("not")]
    Not,
    #[token("or")]
    Or,
    #[token("return")]
    Return,
    #[token("then")]
    Then,
    #[token("true")]
    True,
    #[token("var")]
    Var,
    #[token("while")]
    While,

    // === Literals ===
    #[regex(r"[0-9]+(\.[0-9]+)?", lex_decimal)]
    #[regex(r"0x[0-9A-Za-z_]*", lex_hex)]
    Number(f64),

    #[token("\"", lex_string)]
    String(String),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
}

impl RawToken {
    pub(crate) fn kind(&self) -> TokenKind {
        match self {
            RawToken::LeftParen => TokenKind::LeftParen,
            RawToken::RightParen => TokenKind::RightParen,
            RawToken::LeftBrace => TokenKind::LeftBrace,
            RawToken::RightBrace => TokenKind::RightBrace,
            RawToken::LeftBracket => TokenKind::LeftBracket,
            RawToken::RightBracket => TokenKind::RightBracket,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Equal => TokenKind::Equal,
            RawToken::EqualEqual => TokenKind::EqualEqual,
            RawToken::BangEqual => TokenKind::BangEqual,
            RawToken::Less => TokenKind::Less,
            RawToken::LessEqual => TokenKind::LessEqual,
            RawToken::Greater => TokenKind::Greater,
            RawToken::GreaterEqual => TokenKind::GreaterEqual,
            RawToken::And => TokenKind::And,
            RawToken::Do => TokenKind::Do,
            RawToken::Else => TokenKind::Else,
            RawToken::False => TokenKind::False,
            RawToken::Fun => TokenKind::Fun,
            RawToken::If => TokenKind::If,
            RawToken::Nil => TokenKind::Nil,
            RawToken::Not => TokenKind::Not,
            RawToken::Or => TokenKind::Or,
            RawToken::Return => TokenKind::Return,
            RawToken::Then => TokenKind::Then,
            RawToken::True => TokenKind::True,
            RawToken::Var => TokenKind::Var,
            RawToken::While => TokenKind::While,
            RawToken::Number(_) => TokenKind::Number,
            RawToken::String(_) => TokenKind::String,
            RawToken::Identifier => TokenKind::Identifier,
        }
    }
}

fn lex_decimal(lex: &mut logos::Lexer<'_, RawToken>) -> Result<f64, RawError> {
    lex.slice()
        .parse::<f64>()
        .map_err(|_| RawError::InvalidNumber)
}

/// `0x` followed by at least one hex digit. Digits accumulate in `f64`, so
/// long literals lose precision instead of overflowing.
fn lex_hex(lex: &mut logos::Lexer<'_, RawToken>) -> Result<f64, RawError> {
    let digits = &lex.slice()[2..];
    if digits.is_empty() {
        return Err(RawError::InvalidNumber);
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(16)
            .map(|d| acc * 16.0 + f64::from(d))
            .ok_or(RawError::InvalidNumber)
    })
}

fn lex_string(lex: &mut logos::Lexer<'_, RawToken>) -> Result<String, RawError> {
    match scan_string(lex.remainder()) {
        StringScan::Closed { cooked, consumed } => {
            lex.bump(consumed);
            Ok(cooked)
        }
        StringScan::Unterminated { consumed } => {
            lex.bump(consumed);
            Err(RawError::UnterminatedString)
        }
        StringScan::InvalidEscape {
            escape,
            offset,
            consumed,
        } => {
            lex.bump(consumed);
            Err(RawError::InvalidEscape {
                escape,
                offset: offset + 1,
            })
        }
    }
}
