//! Error types for JSON encoding and decoding operations.

use thiserror::Error;

/// Errors that can occur while encoding a value tree or decoding JSON text.
///
/// An error aborts the top-level call; no partial output reaches the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Strict map encoding saw two keys escape to the same bytes in one
    /// object. Carries the textual form of the repeated key.
    #[error("duplicate object key {0:?}")]
    DuplicateKey(String),

    /// A string contained a byte sequence that is not valid UTF-8.
    #[error("invalid byte 0x{byte:02X} at offset {offset}")]
    InvalidByte {
        /// The byte that broke the sequence.
        byte: u8,
        /// Its offset in the input string.
        offset: usize,
    },

    /// NaN or an infinity in the value tree. JSON has no syntax for them.
    #[error("{0} cannot be represented in JSON")]
    NonFiniteNumber(f64),

    /// The value tree nests deeper than the encoder's recursion guard.
    #[error("nesting depth exceeds the limit of {0}")]
    DepthExceeded(usize),

    /// A user extension hook failed.
    #[error("extension hook failed: {0}")]
    Extension(String),

    /// Free-form encoding failure.
    #[error("{0}")]
    Message(String),

    /// The input to the decoder was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience alias used throughout jsonrope-core.
pub type Result<T> = std::result::Result<T, Error>;
