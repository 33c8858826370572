//! Lexer error types.
//!
//! An error is terminal: the scanner stops at the first one and returns
//! it in place of the token list. The taxonomy is closed and every kind
//! renders to a fixed message.

use thiserror::Error;

/// What went wrong.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// The current character matches no scanning rule.
    #[error("Unrecognized source character")]
    UnrecognizedCharacter,
    /// A `.` that does not start `...`.
    #[error("Invalid '.' that's not part of '...' or float")]
    InvalidDot,
    /// A single-line string reached a raw newline or EOF before its
    /// closing quote.
    #[error("Unterminated string")]
    UnterminatedString,
    /// No unescaped closing `"""` before EOF.
    #[error("Unterminated block string")]
    UnterminatedBlockString,
    /// A backslash in a single-line string that starts no valid escape.
    #[error("Invalid escape sequence")]
    InvalidEscape,
    /// Malformed digits, a missing fraction/exponent digit, or a letter,
    /// `_` or `.` right after a number.
    #[error("Invalid number literal")]
    InvalidNumber,
}

impl LexErrorKind {
    /// The fixed message for this kind.
    pub fn message(self) -> String {
        self.to_string()
    }
}

/// A lexer error at a UTF-16 code unit offset.
///
/// For string and number errors `index` is the offset of the literal's
/// first character, not of the malformed part inside it.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[error("{kind} at index {index}")]
pub struct LexError {
    pub index: usize,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(index: usize, kind: LexErrorKind) -> Self {
        Self { index, kind }
    }
}
