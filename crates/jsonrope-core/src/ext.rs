//! Extension hooks: user types that render themselves to JSON.
//!
//! A type implementing [`ToFragments`] contributes pre-rendered bytes that
//! the encoder splices into the document verbatim: no re-escaping, no
//! validation. That gives the hook full control over its output, and full
//! responsibility for emitting valid JSON.
//!
//! The date/time and decimal built-ins delegate the actual text to their
//! host formatters (`chrono`, `rust_decimal`) and wrap it in quotes.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use rust_decimal::Decimal;

use crate::encoder::EncodeOptions;
use crate::error::Result;
use crate::fragment::Fragments;

/// Converts a user value into pre-rendered JSON fragments.
///
/// The encoder calls this once per [`Value::Ext`](crate::Value::Ext) node,
/// passing the active configuration so an implementation can honor the
/// escape profile if it produces string content. The returned fragments are
/// spliced into the output unchanged.
pub trait ToFragments: fmt::Debug + Send + Sync {
    fn to_fragments(&self, opts: &EncodeOptions) -> Result<Fragments<'static>>;
}

/// Pre-rendered JSON, spliced into the output byte for byte.
///
/// The payload must already be a valid JSON document fragment; nothing
/// checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawJson(pub String);

impl ToFragments for RawJson {
    fn to_fragments(&self, _opts: &EncodeOptions) -> Result<Fragments<'static>> {
        let mut out = Fragments::new();
        out.push_owned(self.0.clone().into_bytes());
        Ok(out)
    }
}

/// Quote host-formatted text. The built-in formatters only produce ASCII,
/// so no profile-dependent escaping is needed.
fn quoted(text: String) -> Fragments<'static> {
    let mut bytes = Vec::with_capacity(text.len() + 2);
    bytes.push(b'"');
    bytes.extend_from_slice(text.as_bytes());
    bytes.push(b'"');
    let mut out = Fragments::new();
    out.push_owned(bytes);
    out
}

/// Calendar day as `"YYYY-MM-DD"`.
impl ToFragments for NaiveDate {
    fn to_fragments(&self, _opts: &EncodeOptions) -> Result<Fragments<'static>> {
        Ok(quoted(self.to_string()))
    }
}

/// Time of day as `"HH:MM:SS"`, with fractional seconds when present.
impl ToFragments for NaiveTime {
    fn to_fragments(&self, _opts: &EncodeOptions) -> Result<Fragments<'static>> {
        Ok(quoted(self.to_string()))
    }
}

/// Civil date-time as `"YYYY-MM-DDTHH:MM:SS"`. `NaiveDateTime`'s own
/// `Display` separates date and time with a space; ISO-8601 wants `T`.
impl ToFragments for NaiveDateTime {
    fn to_fragments(&self, _opts: &EncodeOptions) -> Result<Fragments<'static>> {
        Ok(quoted(format!("{}T{}", self.date(), self.time())))
    }
}

/// Instant as RFC 3339 with a `Z` suffix.
impl ToFragments for DateTime<Utc> {
    fn to_fragments(&self, _opts: &EncodeOptions) -> Result<Fragments<'static>> {
        Ok(quoted(self.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
    }
}

/// Instant as RFC 3339 with a numeric offset.
impl ToFragments for DateTime<FixedOffset> {
    fn to_fragments(&self, _opts: &EncodeOptions) -> Result<Fragments<'static>> {
        Ok(quoted(self.to_rfc3339_opts(SecondsFormat::AutoSi, false)))
    }
}

/// Decimal as a double-quoted plain (non-scientific) number, scale
/// preserved: `dec!(1.10)` renders `"1.10"`.
impl ToFragments for Decimal {
    fn to_fragments(&self, _opts: &EncodeOptions) -> Result<Fragments<'static>> {
        Ok(quoted(self.to_string()))
    }
}
