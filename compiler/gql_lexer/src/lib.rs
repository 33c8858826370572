//! Lexical scanner for a GraphQL-like schema/query language.
//!
//! [`lex`] turns source text into a flat list of [`Token`]s, or the first
//! [`LexError`]. The scanner is a pure function: it holds no state between
//! calls and performs no I/O.
//!
//! # Architecture
//!
//! ```text
//! &str ─► SourceBuffer ─► Scanner (dispatch on current byte)
//!                            ├─ punctuation / ignored characters
//!                            ├─ spread `...`
//!                            ├─ comments      (comments.rs)
//!                            ├─ numbers       (number.rs)
//!                            ├─ names
//!                            └─ strings       (string.rs)
//!                                 ├─ escapes       (escape.rs)
//!                                 └─ block dedent  (block_string.rs)
//! ```
//!
//! Token and error positions are UTF-16 code unit offsets into the source.
//!
//! # Example
//!
//! ```
//! use gql_lexer::{lex, Punctuator, Token, TokenKind};
//!
//! let tokens = lex("@name123").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::new(0, TokenKind::Punct(Punctuator::At)),
//!         Token::new(1, TokenKind::Name("name123".into())),
//!     ]
//! );
//! ```

mod block_string;
mod comments;
mod escape;
mod lex_error;
mod number;
mod options;
mod scanner;
#[cfg(feature = "serde")]
mod serialize;
mod string;
mod token;

use gql_lexer_core::SourceBuffer;
use tracing::debug;

pub use lex_error::{LexError, LexErrorKind};
pub use options::{CommentScan, LexOptions};
#[cfg(feature = "serde")]
pub use serialize::LexOutput;
pub use token::{Punctuator, Token, TokenKind};

use scanner::Scanner;

/// Lex `source` with default options.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    lex_with_options(source, &LexOptions::default())
}

/// Lex `source` with explicit options.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_with_options(source: &str, options: &LexOptions) -> Result<Vec<Token>, LexError> {
    let buffer = SourceBuffer::new(source);
    let result = Scanner::new(&buffer, *options).run();
    match &result {
        Ok(tokens) => debug!(count = tokens.len(), "lexed"),
        Err(err) => debug!(index = err.index, kind = ?err.kind, "lex error"),
    }
    result
}
