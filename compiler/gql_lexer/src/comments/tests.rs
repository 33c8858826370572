use super::*;
use gql_lexer_core::SourceBuffer;

fn end_of_comment(source: &str, mode: CommentScan) -> usize {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    skip_comment(&mut cursor, mode);
    cursor.pos()
}

#[test]
fn line_comment_stops_past_newline() {
    assert_eq!(end_of_comment("# hi\nname", CommentScan::LineEnd), 5);
}

#[test]
fn line_comment_at_eof() {
    assert_eq!(end_of_comment("# trailing", CommentScan::LineEnd), 10);
}

#[test]
fn empty_comment() {
    assert_eq!(end_of_comment("#", CommentScan::LineEnd), 1);
    assert_eq!(end_of_comment("#\n", CommentScan::LineEnd), 2);
}

#[test]
fn carriage_return_does_not_end_comment() {
    assert_eq!(end_of_comment("# a\rb\nc", CommentScan::LineEnd), 6);
}

#[test]
fn rest_of_input_ignores_newlines() {
    let source = "# hi\nname\n";
    assert_eq!(end_of_comment(source, CommentScan::RestOfInput), source.len());
}
