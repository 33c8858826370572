//! Escape resolution for single-line string literals.
//!
//! Resolution runs in two passes over the raw content (between the
//! quotes):
//!
//! 1. Two-character escapes: `\\` `\/` `\b` `\f` `\n` `\r` `\t` `\"` `\'`.
//! 2. `\uXXXX` (exactly four hex digits, a UTF-16 code unit), over the
//!    output of the first pass.
//!
//! Any backslash left after both passes is an invalid escape. The backslash
//! produced by `\\` is therefore still live in the second pass: followed by
//! `uXXXX` it forms a unicode escape, followed by anything else it is an
//! error. Block strings never come through here.

use std::borrow::Cow;

use gql_lexer_core::char_class::is_hex_digit;

use crate::LexErrorKind;

/// Resolve the escapes in a string literal's raw content.
///
/// Fast path: content without a backslash is returned borrowed.
pub(crate) fn unescape(raw: &str) -> Result<Cow<'_, str>, LexErrorKind> {
    if !raw.contains('\\') {
        return Ok(Cow::Borrowed(raw));
    }

    let resolved = resolve_unicode_escapes(&resolve_simple_escapes(raw));
    if resolved.contains('\\') {
        return Err(LexErrorKind::InvalidEscape);
    }
    Ok(Cow::Owned(resolved))
}

/// First pass. A backslash that does not start a two-character escape is
/// copied through untouched.
fn resolve_simple_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(resolved) = chars.clone().next().and_then(simple_escape) {
                chars.next();
                out.push(resolved);
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn simple_escape(c: char) -> Option<char> {
    Some(match c {
        '\\' => '\\',
        '/' => '/',
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        '"' => '"',
        '\'' => '\'',
        _ => return None,
    })
}

/// Second pass. A `\u` without four hex digits after it is copied through.
fn resolve_unicode_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find("\\u") {
        out.push_str(&rest[..at]);
        let digits = &rest[at + 2..];
        match decode_unit(digits) {
            Some((c, consumed)) => {
                out.push(c);
                rest = &digits[consumed..];
            }
            None => {
                out.push_str("\\u");
                rest = digits;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode the code unit after `\u`, returning the character and the bytes
/// consumed after the `\u`. A high surrogate directly followed by a `\u`
/// low surrogate decodes as a pair; a lone surrogate becomes U+FFFD.
fn decode_unit(digits: &str) -> Option<(char, usize)> {
    let unit = hex4(digits)?;

    if (0xD800..=0xDBFF).contains(&unit) {
        let low = digits
            .get(4..)
            .and_then(|after| after.strip_prefix("\\u"))
            .and_then(hex4)
            .filter(|low| (0xDC00..=0xDFFF).contains(low));
        if let Some(low) = low {
            let scalar = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            let c = char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER);
            return Some((c, 10));
        }
    }

    let c = char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER);
    Some((c, 4))
}

/// Parse exactly four hex digits at the start of `s`.
fn hex4(s: &str) -> Option<u32> {
    let digits = s.get(..4)?;
    if !digits.bytes().all(is_hex_digit) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
