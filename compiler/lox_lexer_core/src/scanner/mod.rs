//! Hand-written single-pass scanner.
//!
//! The scanner walks a sentinel-terminated cursor left to right and
//! classifies one lexeme per step. Lookahead is at most one byte. Unknown
//! characters become [`Diagnostic`]s and scanning resumes at the next
//! character, so a scan always runs to the end of its input.
//!
//! # Design
//!
//! Main dispatch matches on the current byte. Each arm calls a focused
//! method that advances the cursor and records a token, a diagnostic, or
//! nothing (comments, newlines). Non-ASCII bytes and interior nulls fall
//! through to the unexpected-character arm.

use crate::cursor::Cursor;
use crate::diagnostic::Diagnostic;
use crate::kind::TokenKind;
use crate::source_buffer::SourceBuffer;
use crate::token::Token;

/// Scan `text` into tokens and diagnostics.
///
/// Never fails: every anomaly is reported as a diagnostic. The returned
/// token list always ends with exactly one [`TokenKind::Eof`] token.
pub fn scan(text: &str) -> ScanResult {
    let buf = SourceBuffer::new(text);
    Scanner::new(&buf).scan_tokens()
}

/// Whether a scan completed without diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStatus {
    Success,
    Failure,
}

/// Everything one scan produced.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult {
    /// Tokens in source order, terminated by one EOF token.
    pub tokens: Vec<Token>,
    /// Diagnostics in the order their characters were encountered.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanResult {
    /// `Failure` if and only if at least one diagnostic was recorded.
    pub fn status(&self) -> ScanStatus {
        if self.diagnostics.is_empty() {
            ScanStatus::Success
        } else {
            ScanStatus::Failure
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// The terminating end-of-input token.
    pub fn eof(&self) -> Option<&Token> {
        self.tokens.last().filter(|tok| tok.is_eof())
    }
}

/// Scanning context for one input.
///
/// Owns the cursor, the line counter and the output buffers. Created per
/// input and consumed by [`scan_tokens`](Self::scan_tokens).
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Byte offset where the lexeme being recognized begins.
    start: u32,
    /// 1-based line of the cursor.
    line: u32,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a SourceBuffer) -> Self {
        Self {
            cursor: buf.cursor(),
            start: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Run the scan loop to the end of input.
    ///
    /// Each iteration consumes at least one byte, so the loop terminates.
    pub fn scan_tokens(mut self) -> ScanResult {
        while !self.is_at_end() {
            self.start = self.cursor.pos();
            self.scan_token();
        }
        self.tokens.push(Token::eof(self.line));
        ScanResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_eof()
    }

    fn scan_token(&mut self) {
        match self.cursor.current() {
            b'(' => self.single(TokenKind::LeftParen),
            b')' => self.single(TokenKind::RightParen),
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b'*' => self.single(TokenKind::Star),
            b'.' => self.single(TokenKind::Dot),
            b',' => self.single(TokenKind::Comma),
            b'+' => self.single(TokenKind::Plus),
            b';' => self.single(TokenKind::Semicolon),
            b'-' => self.single(TokenKind::Minus),
            b'=' => self.with_equal(TokenKind::Equal, TokenKind::EqualEqual),
            b'!' => self.with_equal(TokenKind::Bang, TokenKind::BangEqual),
            b'<' => self.with_equal(TokenKind::Less, TokenKind::LessEqual),
            b'>' => self.with_equal(TokenKind::Greater, TokenKind::GreaterEqual),
            b'/' => self.slash_or_comment(),
            b'\n' => self.newline(),
            // Spaces, tabs, carriage returns, control bytes, interior nulls
            // and every non-ASCII character.
            _ => self.unexpected_character(),
        }
    }

    // ─── Lookahead ──────────────────────────────────────────────

    /// The next unread byte, or `0x00` at end of input.
    #[inline]
    fn peek(&self) -> u8 {
        self.cursor.current()
    }

    /// Consume the next byte only if it equals `expected`.
    ///
    /// `expected` is never `0x00`, so the sentinel cannot match.
    #[inline]
    fn match_next(&mut self, expected: u8) -> bool {
        if self.peek() == expected {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    // ─── Operators ──────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit `kind`.
    fn single(&mut self, kind: TokenKind) {
        self.cursor.advance();
        self.add_token(kind);
    }

    /// `=`, `!`, `<` or `>`, optionally followed by `=`.
    fn with_equal(&mut self, short: TokenKind, long: TokenKind) {
        self.cursor.advance();
        let kind = if self.match_next(b'=') { long } else { short };
        self.add_token(kind);
    }

    // ─── Comments & Newlines ────────────────────────────────────

    fn slash_or_comment(&mut self) {
        self.cursor.advance(); // consume first '/'
        if self.match_next(b'/') {
            // Stops on the newline; the main loop counts it.
            self.cursor.eat_until_newline_or_eof();
        } else {
            self.add_token(TokenKind::Slash);
        }
    }

    fn newline(&mut self) {
        self.cursor.advance();
        self.line = self.line.saturating_add(1);
    }

    // ─── Errors ─────────────────────────────────────────────────

    /// Record the character at the cursor as unexpected and skip all of its bytes.
    fn unexpected_character(&mut self) {
        self.cursor.advance_char();
        let character = self.cursor.slice_from(self.start).chars().next();
        debug_assert!(
            character.is_some(),
            "no character at byte {} on line {}",
            self.start,
            self.line
        );
        let character = character.unwrap_or(char::REPLACEMENT_CHARACTER);
        self.diagnostics
            .push(Diagnostic::unexpected_character(self.line, character));
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.cursor.slice_from(self.start);
        self.tokens.push(Token::new(kind, lexeme, self.line));
    }
}
