//! Integer and float literals.
//!
//! Grammar (one forward pass):
//!
//! ```text
//! number   = "-"? integer fraction? exponent?
//! integer  = "0" | [1-9] [0-9]*
//! fraction = "." [0-9]+
//! exponent = [eE] [+-]? [0-9]+
//! ```
//!
//! The literal must not be followed by a name character or `.`, which
//! rejects `007`-style, `1.2.3` and `5abc` inputs. Every failure is
//! reported at the literal's first character.

use gql_lexer_core::char_class::{is_digit, is_name_start};
use gql_lexer_core::Cursor;

use crate::{LexErrorKind, TokenKind};

/// Scan a number starting at the cursor (on a digit or `-`).
///
/// On success the cursor is left just past the literal.
pub(crate) fn scan_number(cursor: &mut Cursor<'_>) -> Result<TokenKind, LexErrorKind> {
    let start = cursor.pos();
    let mut is_float = false;

    if cursor.current() == b'-' {
        cursor.advance();
    }

    match cursor.current() {
        b'0' => {
            cursor.advance();
            // A leading zero must stand alone.
            if is_digit(cursor.current()) {
                return Err(LexErrorKind::InvalidNumber);
            }
        }
        b'1'..=b'9' => cursor.eat_while(is_digit),
        _ => return Err(LexErrorKind::InvalidNumber),
    }

    if cursor.current() == b'.' {
        if !is_digit(cursor.peek()) {
            return Err(LexErrorKind::InvalidNumber);
        }
        cursor.advance(); // consume '.'
        cursor.eat_while(is_digit);
        is_float = true;
    }

    if matches!(cursor.current(), b'e' | b'E') {
        cursor.advance();
        if matches!(cursor.current(), b'+' | b'-') {
            cursor.advance();
        }
        if !is_digit(cursor.current()) {
            return Err(LexErrorKind::InvalidNumber);
        }
        cursor.eat_while(is_digit);
        is_float = true;
    }

    let next = cursor.current();
    if is_name_start(next) || next == b'.' {
        return Err(LexErrorKind::InvalidNumber);
    }

    // The lexeme is already validated, so this parse only fails if the
    // grammar above and `f64::from_str` ever disagree.
    let value: f64 = cursor
        .slice_from(start)
        .parse()
        .map_err(|_| LexErrorKind::InvalidNumber)?;

    Ok(if is_float {
        TokenKind::Float(value)
    } else {
        TokenKind::Int(value)
    })
}
