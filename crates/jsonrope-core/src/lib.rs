//! # jsonrope-core
//!
//! High-throughput JSON encoder and decoder built around **fragment lists**:
//! instead of growing one contiguous buffer, the encoder emits a rope of
//! byte spans that borrow directly from the value tree, so string content
//! that needs no escaping is never copied. The rope can be flattened into a
//! `String`, or handed to vectored I/O as-is.
//!
//! The encoder offers four string-escape profiles (`json`, `javascript`,
//! `html_safe`, `unicode`), driven by compile-time dispatch tables, and an
//! optional strict object mode that rejects duplicate keys at encode time.
//! User types plug in through the [`ToFragments`] hook, which contributes
//! pre-rendered JSON spliced in verbatim.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonrope_core::{decode, encode, EncodeOptions, Value};
//!
//! let doc = Value::object([
//!     ("name", Value::from("Alice")),
//!     ("scores", Value::from(vec![Value::from(95), Value::from(87)])),
//! ]);
//!
//! let json = encode(&doc, &EncodeOptions::default()).unwrap();
//! assert_eq!(json, r#"{"name":"Alice","scores":[95,87]}"#);
//!
//! // And back again.
//! assert_eq!(decode(&json).unwrap(), doc);
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — value walker, object/array emitters, [`EncodeOptions`]
//! - [`escape`] — per-byte dispatch tables and the escape state machine
//! - [`fragment`] — the [`Fragments`] rope and its flattening/vectored views
//! - [`ext`] — the [`ToFragments`] extension hook and built-in date/time and
//!   decimal renderings
//! - [`decoder`] — JSON text back into a [`Value`] tree
//! - [`error`] — the crate-wide [`Error`] type
//! - [`types`] — the [`Value`] tree and [`Key`] model

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod ext;
pub mod fragment;
pub mod types;

pub use decoder::decode;
pub use encoder::{encode, encode_to_iodata, EncodeOptions, Maps, MAX_DEPTH};
pub use error::{Error, Result};
pub use escape::Escape;
pub use ext::{RawJson, ToFragments};
pub use fragment::{Fragment, Fragments};
pub use types::{Key, Value};
