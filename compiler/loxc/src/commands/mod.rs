//! Command handlers for the Lox CLI.
//!
//! Each submodule implements one CLI command. Shared pieces like
//! [`read_file`] and the process [`ExitStatus`] live here in the module root.

use std::io;
use std::process::ExitCode;

use lox_lexer_core::MAX_SOURCE_LEN;

mod tokenize;

pub use tokenize::{tokenize_file, tokenize_source};

/// Process exit status chosen by a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    /// Usage errors, unreadable input files, failed output writes.
    Failure = 1,
    /// The input was read but contained scan errors.
    DataError = 65,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Why a source file could not be read.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("'{path}' is too large to tokenize ({len} bytes, limit {limit})", limit = MAX_SOURCE_LEN)]
    TooLarge { path: String, len: u64 },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Read a whole source file as UTF-8 text.
///
/// Files over [`MAX_SOURCE_LEN`] bytes are rejected up front rather than
/// handed to the scanner.
pub fn read_file(path: &str) -> Result<String, ReadError> {
    if let Ok(meta) = std::fs::metadata(path) {
        check_len(path, meta.len())?;
    }
    let source = std::fs::read_to_string(path).map_err(|e| {
        let path = path.to_string();
        match e.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound { path },
            io::ErrorKind::PermissionDenied => ReadError::PermissionDenied { path },
            io::ErrorKind::InvalidData => ReadError::InvalidUtf8 { path },
            _ => ReadError::Io { path, source: e },
        }
    })?;
    // The file may have grown since the metadata call.
    check_len(path, u64::try_from(source.len()).unwrap_or(u64::MAX))?;
    Ok(source)
}

fn check_len(path: &str, len: u64) -> Result<(), ReadError> {
    if len > u64::from(MAX_SOURCE_LEN) {
        return Err(ReadError::TooLarge {
            path: path.to_string(),
            len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
