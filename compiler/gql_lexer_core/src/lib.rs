//! Low-level scanning primitives for the GraphQL-like lexer.
//!
//! This crate owns the byte-level view of a source text:
//!
//! - [`SourceBuffer`]: a sentinel-terminated copy of the source, plus the
//!   byte-to-UTF-16 offset mapping used to report token positions.
//! - [`Cursor`]: a `Copy` position over the buffer with peeking and
//!   `memchr`-accelerated searching.
//! - [`char_class`]: ASCII character classes used by the dispatcher and
//!   the sub-scanners.
//!
//! It knows nothing about tokens or errors; those live in `gql_lexer`.

pub mod char_class;
mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
