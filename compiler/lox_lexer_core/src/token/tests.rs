use super::*;
use pretty_assertions::assert_eq;

#[test]
fn renders_kind_lexeme_and_null() {
    let tok = Token::new(TokenKind::LeftParen, "(", 1);
    assert_eq!(tok.to_string(), "LEFT_PAREN ( null");
}

#[test]
fn renders_two_char_operator() {
    let tok = Token::new(TokenKind::GreaterEqual, ">=", 3);
    assert_eq!(tok.to_string(), "GREATER_EQUAL >= null");
}

#[test]
fn eof_renders_with_empty_lexeme() {
    let tok = Token::eof(4);
    assert!(tok.is_eof());
    assert_eq!(tok.line, 4);
    assert_eq!(tok.lexeme, "");
    assert_eq!(tok.to_string(), "EOF  null");
}

#[test]
fn new_token_has_no_literal() {
    let tok = Token::new(TokenKind::Plus, "+", 1);
    assert_eq!(tok.literal, None);
    assert!(!tok.is_eof());
}

#[test]
fn literal_rendering() {
    assert_eq!(Literal::Number(42.0).to_string(), "42.0");
    assert_eq!(Literal::Number(1.25).to_string(), "1.25");
    assert_eq!(Literal::Str("hi there".into()).to_string(), "hi there");
}

#[test]
fn renders_present_literal_in_place_of_null() {
    let tok = Token {
        kind: TokenKind::Plus,
        lexeme: "+".into(),
        literal: Some(Literal::Number(7.0)),
        line: 1,
    };
    assert_eq!(tok.to_string(), "PLUS + 7.0");
}
