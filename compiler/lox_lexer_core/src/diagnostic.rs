//! Scan diagnostics.
//!
//! Diagnostics are data, not errors: the scanner records one and keeps
//! going, and the caller decides what a non-empty list means for the
//! overall outcome.

use std::fmt;

/// What went wrong at a diagnostic's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A character no dispatch arm recognizes. The scanner skips it.
    UnexpectedCharacter(char),
}

/// One recoverable scan error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// Line counter value when the character was encountered.
    pub line: u32,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn unexpected_character(line: u32, character: char) -> Self {
        Diagnostic {
            line,
            kind: DiagnosticKind::UnexpectedCharacter(character),
        }
    }

    /// The offending character.
    pub fn character(&self) -> char {
        match self.kind {
            DiagnosticKind::UnexpectedCharacter(c) => c,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnexpectedCharacter(c) => {
                write!(f, "[line {}] Error: Unexpected character: {c}", self.line)
            }
        }
    }
}
