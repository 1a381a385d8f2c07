//! Fragment lists — the encoder's rope-shaped output.
//!
//! The encoder accumulates output as an ordered list of byte segments rather
//! than one contiguous buffer. Runs of input bytes that need no escaping are
//! appended as borrowed spans of the original string, so a mostly-clean
//! string costs a handful of pointer-sized pushes instead of a byte-by-byte
//! copy. Concatenating the segments left to right yields the JSON document;
//! [`Fragments::io_slices`] exposes them for vectored writes without
//! flattening.

use std::io::IoSlice;

/// One segment of encoder output.
#[derive(Debug, Clone)]
pub enum Fragment<'a> {
    /// A borrowed span: a verbatim run of the input, a literal like `null`,
    /// or a precomputed escape constant.
    Slice(&'a [u8]),
    /// Bytes computed during encoding: numeric text, `\uXXXX` escapes,
    /// extension output.
    Owned(Vec<u8>),
}

impl<'a> Fragment<'a> {
    /// The segment's bytes, whichever side of the borrow they live on.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Fragment::Slice(bytes) => bytes,
            Fragment::Owned(bytes) => bytes,
        }
    }
}

/// An ordered list of byte segments whose left-to-right concatenation is the
/// encoded JSON document.
#[derive(Debug, Clone, Default)]
pub struct Fragments<'a> {
    segments: Vec<Fragment<'a>>,
}

impl<'a> Fragments<'a> {
    /// An empty fragment list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a borrowed span. Empty spans are dropped.
    pub fn push_slice(&mut self, bytes: &'a [u8]) {
        if !bytes.is_empty() {
            self.segments.push(Fragment::Slice(bytes));
        }
    }

    /// Append computed bytes. Empty buffers are dropped.
    pub fn push_owned(&mut self, bytes: Vec<u8>) {
        if !bytes.is_empty() {
            self.segments.push(Fragment::Owned(bytes));
        }
    }

    /// Splice another fragment list onto the end of this one.
    pub fn extend(&mut self, other: Fragments<'a>) {
        self.segments.extend(other.segments);
    }

    /// Total byte length across all segments.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.as_bytes().len()).sum()
    }

    /// True if no bytes have been emitted.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the segments' byte spans in output order.
    pub fn segments(&self) -> impl Iterator<Item = &[u8]> {
        self.segments.iter().map(Fragment::as_bytes)
    }

    /// The segments as [`IoSlice`]s, ready for `write_vectored`.
    pub fn io_slices(&self) -> Vec<IoSlice<'_>> {
        self.segments().map(IoSlice::new).collect()
    }

    /// Flatten into a single contiguous buffer.
    pub fn concat(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        for bytes in self.segments() {
            out.extend_from_slice(bytes);
        }
        out
    }

    /// Current segment count, used to delimit the bytes of one emission.
    pub(crate) fn mark(&self) -> usize {
        self.segments.len()
    }

    /// Flatten every segment appended since `mark` into one buffer.
    pub(crate) fn bytes_since(&self, mark: usize) -> Vec<u8> {
        let mut out = Vec::new();
        for segment in &self.segments[mark..] {
            out.extend_from_slice(segment.as_bytes());
        }
        out
    }
}
