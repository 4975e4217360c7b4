//! Lexical scanner for Lox source text.
//!
//! Turns raw text into a flat sequence of classified [`Token`]s plus a list
//! of [`Diagnostic`]s, in one left-to-right pass with one byte of lookahead.
//! Only punctuation, operators, line comments and newlines are recognized;
//! everything else is reported as an unexpected character and skipped.
//!
//! ```
//! use lox_lexer_core::{scan, ScanStatus, TokenKind};
//!
//! let result = scan("(!=)");
//! let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::LeftParen, TokenKind::BangEqual, TokenKind::RightParen, TokenKind::Eof]
//! );
//! assert_eq!(result.status(), ScanStatus::Success);
//! ```
//!
//! This crate has no dependencies on the rest of the workspace.

mod cursor;
mod diagnostic;
mod kind;
mod scanner;
mod source_buffer;
mod token;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use kind::TokenKind;
pub use scanner::{scan, ScanResult, ScanStatus, Scanner};
pub use source_buffer::{SourceBuffer, MAX_SOURCE_LEN};
pub use token::{Literal, Token};
