//! Scanned tokens and their textual rendering.

use std::fmt;

use crate::TokenKind;

/// Decoded value carried by a literal-bearing token.
///
/// The scanner recognizes no literal kinds yet, so every token it produces
/// has `literal: None`. The rendering below is what downstream stages print
/// once number and string tokens exist.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Numeric value. Rendered with at least one fractional digit (`42.0`).
    Number(f64),
    /// String contents without the surrounding quotes.
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{n:.1}"),
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Str(s) => f.write_str(s),
        }
    }
}

/// A classified lexeme.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token. Empty only for [`TokenKind::Eof`].
    pub lexeme: String,
    pub literal: Option<Literal>,
    /// 1-based line of the token's first character.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    /// The synthetic end-of-input token.
    pub fn eof(line: u32) -> Self {
        Token::new(TokenKind::Eof, String::new(), line)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Renders as `{kind} {lexeme} {literal}`, with `null` for an absent literal.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{literal}"),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests;
