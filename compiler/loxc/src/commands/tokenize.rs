//! `tokenize`: scan a file and print its diagnostics and tokens.

use std::io::{self, BufWriter, Write};

use lox_lexer_core::{scan, ScanStatus};
use tracing::{debug, trace};

use super::{read_file, ExitStatus};

/// Scan `source`, writing diagnostics to `err` and then tokens to `out`.
///
/// One line per diagnostic and per token, in scan order. Returns
/// [`ExitStatus::DataError`] if any diagnostic was written.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn tokenize_source<O: Write, E: Write>(
    source: &str,
    out: &mut O,
    err: &mut E,
) -> io::Result<ExitStatus> {
    let result = scan(source);
    debug!(
        tokens = result.tokens.len(),
        diagnostics = result.diagnostics.len(),
        "scan finished"
    );

    for diagnostic in &result.diagnostics {
        writeln!(err, "{diagnostic}")?;
    }
    err.flush()?;

    for token in &result.tokens {
        trace!(kind = %token.kind, line = token.line, "token");
        writeln!(out, "{token}")?;
    }
    out.flush()?;

    Ok(match result.status() {
        ScanStatus::Success => ExitStatus::Success,
        ScanStatus::Failure => ExitStatus::DataError,
    })
}

/// Read `path` and tokenize it to the process's stdout and stderr.
pub fn tokenize_file(path: &str) -> ExitStatus {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(e) => {
            debug!(error = ?e, "read failed");
            eprintln!("{e}");
            return ExitStatus::Failure;
        }
    };
    debug!(path, bytes = source.len(), "read source file");

    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();
    match tokenize_source(&source, &mut out, &mut err) {
        Ok(status) => status,
        Err(e) => {
            drop(err);
            eprintln!("error writing output: {e}");
            ExitStatus::Failure
        }
    }
}
