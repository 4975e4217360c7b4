use super::*;
use pretty_assertions::assert_eq;
use std::io::Write;

/// Helper: run `tokenize_source` into buffers and return `(status, stdout, stderr)`.
fn tokenize(source: &str) -> (ExitStatus, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = tokenize_source(source, &mut out, &mut err).expect("writing to Vec never fails");
    (
        status,
        String::from_utf8(out).expect("token output is UTF-8"),
        String::from_utf8(err).expect("diagnostic output is UTF-8"),
    )
}

// === Exit Status ===

#[test]
fn exit_status_codes() {
    assert_eq!(ExitStatus::Success.code(), 0);
    assert_eq!(ExitStatus::Failure.code(), 1);
    assert_eq!(ExitStatus::DataError.code(), 65);
}

// === tokenize_source ===

#[test]
fn tokenize_empty_source() {
    let (status, out, err) = tokenize("");
    assert_eq!(status, ExitStatus::Success);
    assert_eq!(out, "EOF  null\n");
    assert_eq!(err, "");
}

#[test]
fn tokenize_operators_and_comment() {
    let (status, out, err) = tokenize("({*.,+;})\n// skip me\n!= == <= >= /");
    assert_eq!(status, ExitStatus::DataError);
    assert_eq!(
        out,
        "LEFT_PAREN ( null\n\
         LEFT_BRACE { null\n\
         STAR * null\n\
         DOT . null\n\
         COMMA , null\n\
         PLUS + null\n\
         SEMICOLON ; null\n\
         RIGHT_BRACE } null\n\
         RIGHT_PAREN ) null\n\
         BANG_EQUAL != null\n\
         EQUAL_EQUAL == null\n\
         LESS_EQUAL <= null\n\
         GREATER_EQUAL >= null\n\
         SLASH / null\n\
         EOF  null\n"
    );
    // The four spaces on line 3 are unexpected characters.
    assert_eq!(err.lines().count(), 4);
    assert!(err
        .lines()
        .all(|l| l == "[line 3] Error: Unexpected character:  "));
}

#[test]
fn tokenize_clean_source_succeeds() {
    let (status, out, err) = tokenize("(\n)");
    assert_eq!(status, ExitStatus::Success);
    assert_eq!(out, "LEFT_PAREN ( null\nRIGHT_PAREN ) null\nEOF  null\n");
    assert_eq!(err, "");
}

#[test]
fn tokenize_reports_errors_and_keeps_tokens() {
    let (status, out, err) = tokenize(",.$(#");
    assert_eq!(status, ExitStatus::DataError);
    assert_eq!(
        err,
        "[line 1] Error: Unexpected character: $\n[line 1] Error: Unexpected character: #\n"
    );
    assert_eq!(out, "COMMA , null\nDOT . null\nLEFT_PAREN ( null\nEOF  null\n");
}

// === read_file ===

#[test]
fn read_file_returns_contents() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"(+)\n").expect("write temp file");
    let path = file.path().to_str().expect("temp path is UTF-8");
    assert_eq!(read_file(path).expect("readable"), "(+)\n");
}

#[test]
fn read_file_missing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing.lox");
    let path = path.to_str().expect("temp path is UTF-8");
    let err = read_file(path).expect_err("file does not exist");
    assert!(matches!(err, ReadError::NotFound { .. }));
    assert_eq!(err.to_string(), format!("cannot find file '{path}'"));
}

#[test]
fn read_file_invalid_utf8() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(&[b'(', 0xFF, b')']).expect("write temp file");
    let path = file.path().to_str().expect("temp path is UTF-8");
    let err = read_file(path).expect_err("not UTF-8");
    assert!(matches!(err, ReadError::InvalidUtf8 { .. }));
    assert_eq!(err.to_string(), format!("'{path}' contains invalid UTF-8 data"));
}

#[test]
fn read_file_on_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().to_str().expect("temp path is UTF-8");
    assert!(read_file(path).is_err());
}

#[test]
fn oversized_source_is_rejected() {
    let len = u64::from(MAX_SOURCE_LEN) + 1;
    let err = check_len("huge.lox", len).expect_err("over the limit");
    assert!(matches!(err, ReadError::TooLarge { len: l, .. } if l == len));
    assert_eq!(
        err.to_string(),
        format!("'huge.lox' is too large to tokenize ({len} bytes, limit {MAX_SOURCE_LEN})")
    );
}

#[test]
fn source_at_the_limit_is_accepted() {
    assert!(check_len("big.lox", u64::from(MAX_SOURCE_LEN)).is_ok());
    assert!(check_len("empty.lox", 0).is_ok());
}
