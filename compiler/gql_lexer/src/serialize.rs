//! JSON-shaped serialization of tokens, errors and lex results.
//!
//! Every token is a flat map with keys in sorted order (`index`, `type`,
//! then `value` for non-punctuation); an error is `{ index, message }`.
//! Numbers are written the way a JavaScript host prints them: integral
//! values without a fractional part, `-0` as `0`.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{LexError, Token, TokenKind};

/// `2^63`: negative integral `f64`s down to `-I64_BOUND` convert to `i64` exactly.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// `2^64`: non-negative integral `f64`s strictly below this convert to `u64` exactly.
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// A numeric token value in its JavaScript rendering.
struct JsNumber(f64);

impl Serialize for JsNumber {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "integral, sign-checked and range-checked, so the casts are exact"
    )]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        let integral = v.is_finite() && v.fract() == 0.0;
        if integral && v >= 0.0 && v < U64_BOUND {
            serializer.serialize_u64(v as u64)
        } else if integral && v < 0.0 && v >= -I64_BOUND {
            serializer.serialize_i64(v as i64)
        } else {
            // Larger integers stay floats: serde_json reads such literals
            // back as `f64` too. Non-finite values become `null`, as in
            // JSON.stringify.
            serializer.serialize_f64(v)
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if matches!(self.kind, TokenKind::Punct(_)) { 2 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("index", &self.index)?;
        map.serialize_entry("type", self.type_name())?;
        match &self.kind {
            TokenKind::Punct(_) => {}
            TokenKind::Name(text) | TokenKind::String(text) => {
                map.serialize_entry("value", text)?;
            }
            TokenKind::Int(v) | TokenKind::Float(v) => {
                map.serialize_entry("value", &JsNumber(*v))?;
            }
        }
        map.end()
    }
}

impl Serialize for LexError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("index", &self.index)?;
        map.serialize_entry("message", &self.kind.message())?;
        map.end()
    }
}

/// Serializable view of a whole lex result: the token array on success,
/// the error object on failure.
#[derive(Clone, Copy, Debug)]
pub struct LexOutput<'a>(pub &'a Result<Vec<Token>, LexError>);

impl Serialize for LexOutput<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Ok(tokens) => tokens.serialize(serializer),
            Err(err) => err.serialize(serializer),
        }
    }
}
