//! Token types produced by the scanner.

use std::fmt;

/// Structural marker: one of the fixed single-character punctuators, or
/// the three-character spread `...`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Punctuator {
    /// `!`
    Bang,
    /// `@`
    At,
    /// `$`
    Dollar,
    /// `&`
    Ampersand,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `=`
    Equals,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `|`
    Pipe,
    /// `:`
    Colon,
    /// `...`
    Spread,
}

impl Punctuator {
    /// Map a single source byte to its punctuator.
    ///
    /// Returns `None` for `.`: the spread is three characters long and is
    /// recognized separately.
    pub fn from_byte(b: u8) -> Option<Self> {
        Some(match b {
            b'!' => Self::Bang,
            b'@' => Self::At,
            b'$' => Self::Dollar,
            b'&' => Self::Ampersand,
            b'(' => Self::LeftParen,
            b')' => Self::RightParen,
            b'=' => Self::Equals,
            b'[' => Self::LeftBracket,
            b']' => Self::RightBracket,
            b'{' => Self::LeftBrace,
            b'}' => Self::RightBrace,
            b'|' => Self::Pipe,
            b':' => Self::Colon,
            _ => return None,
        })
    }

    /// Source text of the punctuator, which is also its wire `type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bang => "!",
            Self::At => "@",
            Self::Dollar => "$",
            Self::Ampersand => "&",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Equals => "=",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Pipe => "|",
            Self::Colon => ":",
            Self::Spread => "...",
        }
    }

    /// Number of source characters the punctuator occupies.
    pub fn width(self) -> usize {
        self.as_str().len()
    }
}

impl fmt::Display for Punctuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a token is, with its payload.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Punct(Punctuator),
    /// Identifier text.
    Name(String),
    /// Integer literal. Stored as `f64`, so integers beyond 2^53 lose
    /// precision.
    Int(f64),
    /// Literal with a fraction and/or an exponent.
    Float(f64),
    /// String literal after escape resolution (single-line) or dedent
    /// (block).
    String(String),
}

impl TokenKind {
    /// The wire `type` of the token.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Punct(p) => p.as_str(),
            Self::Name(_) => "name",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }
}

/// A classified lexical unit and the offset where it begins.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Zero-based UTF-16 code unit offset of the token's first character.
    pub index: usize,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(index: usize, kind: TokenKind) -> Self {
        Self { index, kind }
    }

    /// The wire `type` of the token.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Punct(p) => write!(f, "{p}@{}", self.index),
            TokenKind::Name(name) => write!(f, "name({name})@{}", self.index),
            TokenKind::Int(v) => write!(f, "int({v})@{}", self.index),
            TokenKind::Float(v) => write!(f, "float({v})@{}", self.index),
            TokenKind::String(s) => write!(f, "string({s:?})@{}", self.index),
        }
    }
}
