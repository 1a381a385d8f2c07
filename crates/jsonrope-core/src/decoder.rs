//! JSON decoder boundary — parses RFC 7159 text back into a [`Value`] tree.
//!
//! Parsing is delegated to `serde_json` (compiled with `preserve_order`, so
//! object insertion order survives the trip); this module converts the
//! parsed tree into the crate's [`Value`] model. Malformed input surfaces as
//! [`Error::Parse`](crate::Error::Parse).
//!
//! Keys always materialize as owned strings. Callers that want symbolic or
//! otherwise-mapped keys can rewrite the tree after decoding.

use crate::error::Result;
use crate::types::Value;

/// Decode a JSON document into a [`Value`] tree.
///
/// Accepts anything byte-shaped: a `&str`, a `&[u8]`, a `Vec<u8>`, or a
/// flattened fragment list. Numbers become [`Value::Int`] when they fit a
/// native integer and [`Value::Float`] otherwise.
///
/// # Example
/// ```
/// use jsonrope_core::{decode, Value};
///
/// let doc = decode(r#"{"a":1,"b":[true,null]}"#).unwrap();
/// assert!(matches!(doc, Value::Object(ref pairs) if pairs.len() == 2));
/// ```
pub fn decode(input: impl AsRef<[u8]>) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_slice(input.as_ref())?;
    Ok(Value::from(parsed))
}
