#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use tiel_ir::Position;

fn tok(kind: TokenKind, start: u32, end: u32) -> Result<Token, ()> {
    Ok(Token::new(
        kind,
        kind.display_name(),
        Span::new(start, end),
        Position::new(1, start + 1),
    ))
}

#[test]
fn test_advance_and_previous_span() {
    let tokens = vec![
        tok(TokenKind::Identifier, 0, 1),
        tok(TokenKind::Semicolon, 1, 2),
        tok(TokenKind::Eof, 2, 2),
    ];
    let mut cursor = Cursor::new(tokens.into_iter()).unwrap();
    assert!(cursor.check(TokenKind::Identifier));
    assert_eq!(cursor.advance().unwrap().kind, TokenKind::Identifier);
    assert_eq!(cursor.previous_span(), Span::new(0, 1));
    assert!(cursor.eat(TokenKind::Semicolon).unwrap());
    assert!(!cursor.eat(TokenKind::Semicolon).unwrap());
    assert!(cursor.is_at_end());
}

#[test]
fn test_stays_on_eof() {
    let mut cursor = Cursor::new(vec![tok(TokenKind::Eof, 0, 0)].into_iter()).unwrap();
    assert_eq!(cursor.advance().unwrap().kind, TokenKind::Eof);
    assert_eq!(cursor.advance().unwrap().kind, TokenKind::Eof);
    assert!(cursor.is_at_end());
}

#[test]
fn test_synthesizes_missing_eof() {
    let mut cursor = Cursor::new(vec![tok(TokenKind::Nil, 0, 3)].into_iter()).unwrap();
    cursor.advance().unwrap();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current_span(), Span::new(3, 3));

    let empty: Vec<Result<Token, ()>> = Vec::new();
    let cursor = Cursor::new(empty.into_iter()).unwrap();
    assert!(cursor.is_at_end());
}

#[test]
fn test_propagates_stream_errors() {
    let tokens = vec![tok(TokenKind::Var, 0, 3), Err(())];
    let mut cursor = Cursor::new(tokens.into_iter()).unwrap();
    assert!(cursor.advance().is_err());
}
