use super::*;
use gql_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

/// Scan a string at the start of `source`; returns the value and the
/// number of bytes consumed.
fn scan(source: &str) -> Result<(String, usize), LexErrorKind> {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    match scan_string(&mut cursor)? {
        TokenKind::String(value) => Ok((value, cursor.pos())),
        other => panic!("expected string, got {other:?}"),
    }
}

// === Single-line ===

#[test]
fn simple_string() {
    assert_eq!(scan(r#""hello" tail"#), Ok(("hello".into(), 7)));
}

#[test]
fn escapes_are_resolved() {
    assert_eq!(scan(r#""hi\nthere""#), Ok(("hi\nthere".into(), 11)));
}

#[test]
fn escaped_quote_does_not_close() {
    assert_eq!(scan(r#""say \"hi\"" x"#), Ok(("say \"hi\"".into(), 12)));
}

#[test]
fn quote_after_escaped_backslash_counts_as_escaped() {
    // The closer search only looks one byte back.
    assert_eq!(scan(r#""a\\""#), Err(LexErrorKind::UnterminatedString));
}

#[test]
fn newline_before_closer() {
    assert_eq!(scan("\"abc\ndef\""), Err(LexErrorKind::UnterminatedString));
}

#[test]
fn eof_before_closer() {
    assert_eq!(scan("\"unterminated"), Err(LexErrorKind::UnterminatedString));
    assert_eq!(scan("\""), Err(LexErrorKind::UnterminatedString));
}

#[test]
fn carriage_return_is_content() {
    assert_eq!(scan("\"a\rb\""), Ok(("a\rb".into(), 5)));
}

#[test]
fn invalid_escape() {
    assert_eq!(scan(r#""bad \q""#), Err(LexErrorKind::InvalidEscape));
}

#[test]
fn non_ascii_content() {
    let source = "\"gr\u{00FC}n\"";
    assert_eq!(scan(source), Ok(("gr\u{00FC}n".into(), source.len())));
}

// === Empty ===

#[test]
fn empty_string() {
    assert_eq!(scan(r#""""#), Ok((String::new(), 2)));
    assert_eq!(scan(r#""" x"#), Ok((String::new(), 2)));
}

// === Block ===

#[test]
fn block_string_is_dedented() {
    let source = "\"\"\"\n  a\n  b\n\"\"\"";
    assert_eq!(scan(source), Ok(("a\nb".into(), source.len())));
}

#[test]
fn empty_block_string() {
    assert_eq!(scan(r#""""""""#), Ok((String::new(), 6)));
}

#[test]
fn block_string_keeps_escapes_raw() {
    let source = r#""""a\nb""""#;
    assert_eq!(scan(source), Ok((r"a\nb".into(), source.len())));
}

#[test]
fn escaped_block_closer_is_skipped() {
    let source = r#""""a \""" b""""#;
    assert_eq!(scan(source), Ok((r#"a \""" b"#.into(), source.len())));
}

#[test]
fn block_string_may_contain_single_quotes_and_newlines() {
    let source = "\"\"\"say \"hi\"\nbye\"\"\" next";
    assert_eq!(scan(source), Ok(("say \"hi\"\nbye".into(), source.len() - 5)));
}

#[test]
fn unterminated_block_string() {
    assert_eq!(scan(r#""""abc"#), Err(LexErrorKind::UnterminatedBlockString));
    assert_eq!(scan(r#"""""#), Err(LexErrorKind::UnterminatedBlockString));
    assert_eq!(scan(r#""""abc\""""#), Err(LexErrorKind::UnterminatedBlockString));
}
