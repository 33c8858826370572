//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached the source length.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is part of the source (the dispatcher
//! rejects it as an unrecognized character); a null at
//! `pos >= source_len` is the sentinel.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a scanner can snapshot it before trying a
/// longer match.
///
/// # Invariant
///
/// `buf[source.len()..]` is all `0x00` and at least three bytes long,
/// which [`SourceBuffer`](crate::SourceBuffer) guarantees.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// The same source as `&str`, for slicing.
    source: &'a str,
    /// Current read position (byte index into `buf`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(buf: &'a [u8], source: &'a str) -> Self {
        debug_assert!(
            buf.len() > source.len() + 2,
            "sentinel padding must cover two bytes of lookahead"
        );
        Self { buf, source, pos: 0 }
    }

    /// Returns the byte at `pos`, or `0x00` past the end of the buffer.
    #[inline]
    pub fn byte_at(&self, pos: usize) -> u8 {
        self.buf.get(pos).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    ///
    /// Interior null bytes are not EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source content in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Extract a source substring.
    ///
    /// Returns an empty string if `start..end` is out of range or does not
    /// fall on character boundaries. Scanner positions always do.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source.get(start..end).unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.byte_at(self.pos)) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte, or to EOF if there is none.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos.min(self.source.len())..self.source.len()];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance to the next `"` or `\n`, returning the byte found.
    ///
    /// Returns `0` and positions the cursor at EOF if neither occurs.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos.min(self.source.len())..self.source.len()];
        match memchr::memchr2(b'"', b'\n', remaining) {
            Some(offset) => {
                self.pos += offset;
                self.current()
            }
            None => {
                self.pos = self.source.len();
                0
            }
        }
    }

    /// Byte offset of the first occurrence of `needle` at or after `from`.
    pub fn find_from(&self, needle: &[u8], from: usize) -> Option<usize> {
        let haystack = self.buf.get(from..self.source.len())?;
        memchr::memmem::find(haystack, needle).map(|offset| from + offset)
    }

    /// Move the cursor to an absolute byte position.
    ///
    /// Used by scanners that locate their end with [`find_from`](Self::find_from).
    #[inline]
    pub fn jump_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor must not move backwards");
        self.pos = pos;
    }
}
