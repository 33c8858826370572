use super::*;
use pretty_assertions::assert_eq;

// === Construction ===

#[test]
fn empty_source_starts_at_sentinel() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.source_len(), 0);
}

#[test]
fn padding_covers_two_byte_lookahead() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(cursor.is_eof());
    assert_eq!((cursor.current(), cursor.peek(), cursor.peek2()), (0, 0, 0));
}

#[test]
fn cursor_sees_the_source() {
    let buf = SourceBuffer::new("query { a }");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'q');
    assert_eq!(cursor.slice_from(0), "query { a }");
}

// === Offsets ===

#[test]
fn ascii_offsets_are_identity() {
    let source = "type Query";
    let buf = SourceBuffer::new(source);
    for pos in 0..=source.len() {
        assert_eq!(buf.char_offset(pos), pos);
    }
}

#[test]
fn two_byte_char_shifts_following_offsets() {
    // 'é' is 2 bytes, 1 UTF-16 unit
    let buf = SourceBuffer::new("\"é\" a");
    assert_eq!(buf.char_offset(0), 0);
    assert_eq!(buf.char_offset(1), 1);
    // closing quote: byte 3, unit 2
    assert_eq!(buf.char_offset(3), 2);
    // 'a': byte 5, unit 4
    assert_eq!(buf.char_offset(5), 4);
}

#[test]
fn astral_char_counts_as_two_units() {
    // 4 bytes, a surrogate pair in UTF-16
    let buf = SourceBuffer::new("\"\u{1F600}\" a");
    // closing quote: byte 5, unit 3
    assert_eq!(buf.char_offset(5), 3);
    // 'a': byte 7, unit 5
    assert_eq!(buf.char_offset(7), 5);
}

#[test]
fn several_wide_chars_accumulate() {
    // emoji (4 bytes, 2 units) then CJK (3 bytes, 1 unit)
    let source = "#\u{1F600}\u{4E2D}\nx";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.char_offset(source.len() - 1), 5);
}

#[test]
fn end_offset_is_utf16_length() {
    let source = "\"\u{00FC}ber \u{1F600}\"";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.char_offset(source.len()), source.encode_utf16().count());
}

mod proptest_offsets {
    use super::super::SourceBuffer;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn char_offset_matches_utf16_length(source in "\\PC{0,64}") {
            let buf = SourceBuffer::new(&source);
            for (byte_pos, _) in source.char_indices() {
                let expected = source[..byte_pos].encode_utf16().count();
                prop_assert_eq!(buf.char_offset(byte_pos), expected);
            }
            prop_assert_eq!(buf.char_offset(source.len()), source.encode_utf16().count());
        }
    }
}
