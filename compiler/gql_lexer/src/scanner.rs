//! Dispatch loop.
//!
//! The scanner owns the cursor and routes on the current byte to the
//! sub-scanner for that lexical category. Sub-scanners advance the cursor
//! and return a [`TokenKind`] or a [`LexErrorKind`]; the scanner stamps
//! both with the UTF-16 offset of the lexeme start, so every error is
//! reported where its lexeme begins.
//!
//! Every branch either advances the cursor or returns, so the loop always
//! terminates.

use gql_lexer_core::char_class::{is_ignored, is_name_continue};
use gql_lexer_core::{Cursor, SourceBuffer};
use tracing::trace;

use crate::comments::skip_comment;
use crate::number::scan_number;
use crate::string::scan_string;
use crate::{LexError, LexErrorKind, LexOptions, Punctuator, Token, TokenKind};

pub(crate) struct Scanner<'a> {
    buffer: &'a SourceBuffer<'a>,
    cursor: Cursor<'a>,
    options: LexOptions,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(buffer: &'a SourceBuffer<'a>, options: LexOptions) -> Self {
        Self {
            buffer,
            cursor: buffer.cursor(),
            options,
        }
    }

    /// Scan to EOF, stopping at the first error.
    pub(crate) fn run(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while !self.cursor.is_eof() {
            if let Some(token) = self.next_token()? {
                trace!(%token, "token");
                tokens.push(token);
            }
        }
        Ok(tokens)
    }

    /// Consume one lexeme. Returns `None` for skipped input (whitespace,
    /// commas, comments).
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        let start = self.cursor.pos();
        let current = self.cursor.current();

        let result = if let Some(punct) = Punctuator::from_byte(current) {
            self.cursor.advance();
            Ok(TokenKind::Punct(punct))
        } else {
            match current {
                _ if is_ignored(current) => {
                    self.cursor.advance();
                    return Ok(None);
                }
                b'.' => scan_spread(&mut self.cursor),
                b'"' => scan_string(&mut self.cursor),
                b'#' => {
                    skip_comment(&mut self.cursor, self.options.comment_scan);
                    return Ok(None);
                }
                b'0'..=b'9' | b'-' => scan_number(&mut self.cursor),
                b'A'..=b'Z' | b'a'..=b'z' | b'_' => Ok(scan_name(&mut self.cursor)),
                // Anything else, including interior NUL and non-ASCII
                _ => Err(LexErrorKind::UnrecognizedCharacter),
            }
        };

        let index = self.buffer.char_offset(start);
        result
            .map(|kind| Some(Token::new(index, kind)))
            .map_err(|kind| LexError::new(index, kind))
    }
}

/// `...`; any other `.` is an error.
fn scan_spread(cursor: &mut Cursor<'_>) -> Result<TokenKind, LexErrorKind> {
    if cursor.peek() != b'.' || cursor.peek2() != b'.' {
        return Err(LexErrorKind::InvalidDot);
    }
    cursor.advance_n(Punctuator::Spread.width());
    Ok(TokenKind::Punct(Punctuator::Spread))
}

/// `[A-Za-z_][A-Za-z0-9_]*`; the cursor is on a validated first character.
fn scan_name(cursor: &mut Cursor<'_>) -> TokenKind {
    let start = cursor.pos();
    cursor.advance();
    cursor.eat_while(is_name_continue);
    TokenKind::Name(cursor.slice_from(start).to_owned())
}
