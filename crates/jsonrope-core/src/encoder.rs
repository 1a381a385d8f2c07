//! JSON encoder — walks a [`Value`] tree and emits RFC 7159 text.
//!
//! Output accumulates as a [`Fragments`] rope rather than a flat buffer:
//! string content that needs no escaping is emitted as borrowed spans of the
//! input tree, and [`encode`] flattens only at the very end (or never, with
//! [`encode_to_iodata`]). The walker dispatches each value by its variant:
//!
//! - **Literals**: `null`, `true`, `false` as static bytes
//! - **Numbers**: integers through `itoa`, finite floats through `ryu`
//!   (shortest representation that round-trips); NaN and infinities fail
//! - **Strings and keys**: the escape state machine in [`crate::escape`],
//!   with the profile chosen once per call
//! - **Objects**: pairs in source order; [`Maps::Strict`] tracks escaped
//!   key bytes and rejects duplicates
//! - **Extensions**: the value's [`ToFragments`](crate::ext::ToFragments)
//!   hook, spliced verbatim
//!
//! # Example
//! ```
//! use jsonrope_core::{encode, EncodeOptions, Value};
//!
//! let doc = Value::object([
//!     ("name", Value::from("Alice")),
//!     ("scores", Value::from(vec![Value::from(95), Value::from(87)])),
//! ]);
//! let json = encode(&doc, &EncodeOptions::default()).unwrap();
//! assert_eq!(json, r#"{"name":"Alice","scores":[95,87]}"#);
//! ```

use ahash::AHashSet;

use crate::error::{Error, Result};
use crate::escape::{escape_string, Escape};
use crate::fragment::Fragments;
use crate::types::{Key, Value};

/// Nesting depth the recursive walker accepts before failing with
/// [`Error::DepthExceeded`].
pub const MAX_DEPTH: usize = 128;

/// Object emission mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Maps {
    /// Emit pairs in source order, duplicates included. JSON allows this;
    /// most consumers silently keep the last occurrence.
    #[default]
    Naive,
    /// Fail with [`Error::DuplicateKey`] when two keys in one object escape
    /// to the same bytes, surfacing the ambiguity at encode time.
    Strict,
}

/// Immutable per-call encoder configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// String-escape profile.
    pub escape: Escape,
    /// Object emission mode.
    pub maps: Maps,
}

impl EncodeOptions {
    /// Default configuration: [`Escape::Json`], [`Maps::Naive`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the string-escape profile.
    pub fn escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }

    /// Select the object emission mode.
    pub fn maps(mut self, maps: Maps) -> Self {
        self.maps = maps;
        self
    }
}

/// Encode a value tree into a flat JSON string.
pub fn encode(value: &Value, opts: &EncodeOptions) -> Result<String> {
    let fragments = encode_to_iodata(value, opts)?;
    // The escaper only emits validated UTF-8, but extension hooks splice
    // arbitrary bytes; re-check before handing out a `String`.
    String::from_utf8(fragments.concat())
        .map_err(|_| Error::Message("an extension fragment is not valid UTF-8".to_string()))
}

/// Encode a value tree into a fragment list for vectored I/O.
///
/// The fragments borrow string content from `value`; concatenating them
/// yields exactly the bytes [`encode`] returns.
pub fn encode_to_iodata<'a>(value: &'a Value, opts: &EncodeOptions) -> Result<Fragments<'a>> {
    let mut out = Fragments::new();
    encode_value(value, opts, 0, &mut out)?;
    Ok(out)
}

/// Dispatch one value by its variant. `depth` counts nesting levels of the
/// tree, guarded against runaway recursion.
fn encode_value<'a>(
    value: &'a Value,
    opts: &EncodeOptions,
    depth: usize,
    out: &mut Fragments<'a>,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthExceeded(MAX_DEPTH));
    }
    match value {
        Value::Null => out.push_slice(b"null"),
        Value::Bool(true) => out.push_slice(b"true"),
        Value::Bool(false) => out.push_slice(b"false"),
        Value::Int(n) => {
            let mut buf = itoa::Buffer::new();
            out.push_owned(buf.format(*n).as_bytes().to_vec());
        }
        Value::Float(f) => {
            if !f.is_finite() {
                return Err(Error::NonFiniteNumber(*f));
            }
            let mut buf = ryu::Buffer::new();
            out.push_owned(buf.format_finite(*f).as_bytes().to_vec());
        }
        Value::String(s) => escape_string(out, s.as_bytes(), opts.escape, b"")?,
        Value::Array(items) => encode_array(items, opts, depth, out)?,
        Value::Object(pairs) => match opts.maps {
            Maps::Naive => encode_object(pairs, opts, depth, out)?,
            Maps::Strict => encode_object_strict(pairs, opts, depth, out)?,
        },
        Value::Ext(hook) => out.extend(hook.to_fragments(opts)?),
    }
    Ok(())
}

/// Emit `[e1,e2,…]`. An empty array is the two-byte literal `[]`.
fn encode_array<'a>(
    items: &'a [Value],
    opts: &EncodeOptions,
    depth: usize,
    out: &mut Fragments<'a>,
) -> Result<()> {
    if items.is_empty() {
        out.push_slice(b"[]");
        return Ok(());
    }
    out.push_slice(b"[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_slice(b",");
        }
        encode_value(item, opts, depth + 1, out)?;
    }
    out.push_slice(b"]");
    Ok(())
}

/// Emit `{"k1":v1,…}` in source order, duplicates included.
///
/// Keys escape with tail `:`, so one escaper call emits `"key":`.
fn encode_object<'a>(
    pairs: &'a [(Key, Value)],
    opts: &EncodeOptions,
    depth: usize,
    out: &mut Fragments<'a>,
) -> Result<()> {
    if pairs.is_empty() {
        out.push_slice(b"{}");
        return Ok(());
    }
    out.push_slice(b"{");
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push_slice(b",");
        }
        escape_string(out, key.text().as_bytes(), opts.escape, b":")?;
        encode_value(value, opts, depth + 1, out)?;
    }
    out.push_slice(b"}");
    Ok(())
}

/// Strict-mode object emission: like [`encode_object`], but every key's
/// escaped bytes go into a visited set, and a repeat aborts the encode.
///
/// The set token is exactly the byte sequence appended to the output for
/// the key (quotes and separator included), so two different inputs that
/// escape identically (a string `"id"` and a symbolic `id`, say) are
/// duplicates. Each object level owns a fresh set; nested objects may reuse
/// the keys of their parents.
fn encode_object_strict<'a>(
    pairs: &'a [(Key, Value)],
    opts: &EncodeOptions,
    depth: usize,
    out: &mut Fragments<'a>,
) -> Result<()> {
    if pairs.is_empty() {
        out.push_slice(b"{}");
        return Ok(());
    }
    let mut seen: AHashSet<Vec<u8>> = AHashSet::with_capacity(pairs.len());
    out.push_slice(b"{");
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push_slice(b",");
        }
        let mark = out.mark();
        escape_string(out, key.text().as_bytes(), opts.escape, b":")?;
        if !seen.insert(out.bytes_since(mark)) {
            return Err(Error::DuplicateKey(key.text().to_string()));
        }
        encode_value(value, opts, depth + 1, out)?;
    }
    out.push_slice(b"}");
    Ok(())
}
