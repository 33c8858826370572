//! String literals: `"..."`, `""` and `"""..."""`.
//!
//! A closing delimiter directly preceded by a backslash counts as escaped,
//! for both shapes. Single-line content goes through [`unescape`]; block
//! content goes through [`dedent_block`] only.

use gql_lexer_core::Cursor;

use crate::block_string::dedent_block;
use crate::escape::unescape;
use crate::{LexErrorKind, TokenKind};

const BLOCK_QUOTE: &[u8] = b"\"\"\"";

/// Scan a string starting at the cursor (on `"`).
///
/// On success the cursor is left just past the closing delimiter. Errors
/// belong to the opening quote.
pub(crate) fn scan_string(cursor: &mut Cursor<'_>) -> Result<TokenKind, LexErrorKind> {
    debug_assert_eq!(cursor.current(), b'"');

    if cursor.peek() == b'"' {
        if cursor.peek2() == b'"' {
            return scan_block_string(cursor);
        }
        cursor.advance_n(2);
        return Ok(TokenKind::String(String::new()));
    }

    cursor.advance(); // consume opening '"'
    let content_start = cursor.pos();
    loop {
        match cursor.skip_to_string_delim() {
            b'"' if cursor.byte_at(cursor.pos() - 1) == b'\\' => cursor.advance(),
            b'"' => break,
            // Raw newline or EOF
            _ => return Err(LexErrorKind::UnterminatedString),
        }
    }

    let raw = cursor.slice(content_start, cursor.pos());
    cursor.advance(); // consume closing '"'

    let value = unescape(raw)?;
    Ok(TokenKind::String(value.into_owned()))
}

fn scan_block_string(cursor: &mut Cursor<'_>) -> Result<TokenKind, LexErrorKind> {
    let content_start = cursor.pos() + BLOCK_QUOTE.len();

    let mut search_from = content_start;
    let close = loop {
        let candidate = cursor
            .find_from(BLOCK_QUOTE, search_from)
            .ok_or(LexErrorKind::UnterminatedBlockString)?;
        if cursor.byte_at(candidate - 1) == b'\\' {
            search_from = candidate + BLOCK_QUOTE.len();
        } else {
            break candidate;
        }
    };

    let raw = cursor.slice(content_start, close);
    cursor.jump_to(close + BLOCK_QUOTE.len());

    Ok(TokenKind::String(dedent_block(raw)))
}

#[cfg(test)]
mod tests;
