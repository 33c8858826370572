//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the cursor can look at the current byte and up to two bytes ahead
//! without bounds checks in the scanners. Interior null bytes are told
//! apart from the sentinel by position (see [`Cursor::is_eof`]).
//!
//! # Offsets
//!
//! The scanner works on bytes, but token positions are reported in UTF-16
//! code units, the unit a JavaScript host indexes strings by. For ASCII
//! sources the two coincide. Otherwise the buffer records every multi-byte
//! character once at construction and answers [`SourceBuffer::char_offset`]
//! with a binary search.

use crate::Cursor;

/// Number of zero bytes appended after the source (sentinel + peek padding).
const PADDING: usize = 4;

/// A multi-byte UTF-8 character seen in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WideChar {
    /// Byte offset just past the character.
    end: usize,
    /// Total bytes in excess of UTF-16 units (`len_utf8 - len_utf16`) of
    /// all wide chars up to and including this one.
    extra: usize,
}

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00, 0x00, 0x00]
///  ^                ^
///  0                source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer<'src> {
    source: &'src str,
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Multi-byte characters in source order. Empty for ASCII input.
    wide_chars: Vec<WideChar>,
}

impl<'src> SourceBuffer<'src> {
    /// Create a sentinel-terminated buffer from source text.
    pub fn new(source: &'src str) -> Self {
        let bytes = source.as_bytes();
        let mut buf = Vec::with_capacity(bytes.len() + PADDING);
        buf.extend_from_slice(bytes);
        buf.resize(bytes.len() + PADDING, 0);

        let wide_chars = if source.is_ascii() {
            Vec::new()
        } else {
            collect_wide_chars(source)
        };

        Self {
            source,
            buf,
            wide_chars,
        }
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source)
    }

    /// Convert a byte offset into a UTF-16 code unit offset.
    ///
    /// `byte_pos` must lie on a character boundary (every position the
    /// scanner stops at does, since it only stops on ASCII bytes or EOF).
    pub fn char_offset(&self, byte_pos: usize) -> usize {
        let seen = self.wide_chars.partition_point(|w| w.end <= byte_pos);
        match seen.checked_sub(1) {
            Some(last) => byte_pos - self.wide_chars[last].extra,
            None => byte_pos,
        }
    }
}

fn collect_wide_chars(source: &str) -> Vec<WideChar> {
    let mut wide = Vec::new();
    let mut extra = 0;
    for (pos, c) in source.char_indices() {
        let width = c.len_utf8();
        if width > 1 {
            extra += width - c.len_utf16();
            wide.push(WideChar {
                end: pos + width,
                extra,
            });
        }
    }
    wide
}

#[cfg(test)]
mod tests;
