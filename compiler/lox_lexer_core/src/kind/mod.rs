//! Token kinds produced by the scanner.

use std::fmt;

/// Classification of a scanned lexeme.
///
/// The set is closed: the scanner recognizes punctuation and operators only.
/// Discriminants are grouped by category so a kind fits in one byte:
///
/// - Delimiters: 0-15
/// - Single-character operators: 16-31
/// - Comparison operators (one or two characters): 32-47
/// - Control: 255
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Delimiters ===
    /// `(`
    LeftParen = 0,
    /// `)`
    RightParen = 1,
    /// `{`
    LeftBrace = 2,
    /// `}`
    RightBrace = 3,
    /// `,`
    Comma = 4,
    /// `.`
    Dot = 5,
    /// `;`
    Semicolon = 6,

    // === Arithmetic ===
    /// `+`
    Plus = 16,
    /// `-`
    Minus = 17,
    /// `*`
    Star = 18,
    /// `/`
    Slash = 19,

    // === Comparison & Assignment ===
    /// `=`
    Equal = 32,
    /// `==`
    EqualEqual = 33,
    /// `!`
    Bang = 34,
    /// `!=`
    BangEqual = 35,
    /// `<`
    Less = 36,
    /// `<=`
    LessEqual = 37,
    /// `>`
    Greater = 38,
    /// `>=`
    GreaterEqual = 39,

    // === Control ===
    /// Synthetic end-of-input marker. Always the last token, zero length.
    Eof = 255,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 20] = [
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Semicolon,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Equal,
        TokenKind::EqualEqual,
        TokenKind::Bang,
        TokenKind::BangEqual,
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::Eof,
    ];

    /// Upper snake-case name used in textual token output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Eof => "EOF",
        }
    }

    /// The fixed source text of this kind, or `None` for [`TokenKind::Eof`].
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::Comma => Some(","),
            TokenKind::Dot => Some("."),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Equal => Some("="),
            TokenKind::EqualEqual => Some("=="),
            TokenKind::Bang => Some("!"),
            TokenKind::BangEqual => Some("!="),
            TokenKind::Less => Some("<"),
            TokenKind::LessEqual => Some("<="),
            TokenKind::Greater => Some(">"),
            TokenKind::GreaterEqual => Some(">="),
            TokenKind::Eof => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
