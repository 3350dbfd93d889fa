//! Error types for span construction and store snapshots.
//!
//! Queries never fail. Everything in here is raised while building spans,
//! building sorted views, or loading/saving a store.

use thiserror::Error;

/// Errors raised by span construction and the span store.
#[derive(Debug, Error)]
pub enum SpanError {
    /// A span whose begin comes after its end.
    #[error("span begin {begin} is after its end {end}")]
    InvertedRange { begin: usize, end: usize },

    /// A span that extends past the end of the document text.
    #[error("span end {end} is past the end of the text ({len} bytes)")]
    OutOfBounds { end: usize, len: usize },

    /// An offset that falls inside a multi-byte character.
    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },

    /// A sequence that was claimed to be sorted by begin offset but is not.
    #[error("spans are not sorted by begin: index {index} begins at {begin}, after {previous}")]
    Unsorted {
        index: usize,
        previous: usize,
        begin: usize,
    },

    /// A store snapshot that could not be parsed.
    #[error("failed to read span snapshot: {0}")]
    Deserialize(#[from] ron::error::SpannedError),

    /// A store snapshot that could not be written.
    #[error("failed to write span snapshot: {0}")]
    Serialize(#[from] ron::Error),
}

/// Result type for span construction and store operations.
pub type SpanResult<T> = Result<T, SpanError>;
