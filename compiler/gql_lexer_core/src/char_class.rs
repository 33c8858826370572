//! ASCII character classes.
//!
//! Every predicate returns `false` for `0x00` so it can be handed to
//! [`Cursor::eat_while`](crate::Cursor::eat_while) without running into
//! the sentinel.

/// `[0-9]`
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `[A-Za-z_]`: the first character of a name.
#[inline]
pub fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// `[A-Za-z0-9_]`: any later character of a name.
#[inline]
pub fn is_name_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Insignificant characters skipped between tokens: space, `\n`, `\r`,
/// `\t` and `,`.
#[inline]
pub fn is_ignored(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\r' | b'\t' | b',')
}

/// `[0-9A-Fa-f]`
#[inline]
pub fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}
