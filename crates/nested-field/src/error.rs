//! Error types for path parsing and nested field access.

use thiserror::Error;

/// Errors that can occur while parsing a path or walking a document.
///
/// Absence is not an error: a missing key or a `null` on the way is reported
/// as `Ok(None)` by the reader. Every variant here means the document (or the
/// path) has a shape the caller did not expect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The node at `path` has the wrong shape: a segment needed to descend
    /// through a mapping, or a replaced sequence element must keep the
    /// element type of its sequence.
    #[error("expected {expected} at `{path}`, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// An indexed segment addressed an element past the end of a sequence.
    #[error("invalid index {index} at `{path}`: sequence has {len} element(s)")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },

    /// An indexed segment resolved to a value that is not one of the
    /// sequence variants.
    #[error("cannot index into {found} at `{path}`")]
    UnsupportedSequenceType { path: String, found: &'static str },

    /// The bracket suffix of a segment is not a non-negative integer.
    #[error("malformed index in segment `{segment}`")]
    MalformedIndex { segment: String },

    /// A typed accessor found a value of a different type.
    #[error("expected {expected} at `{path}`, got {found}")]
    TypeAssertion {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A path needs at least one segment.
    #[error("path must contain at least one segment")]
    EmptyPath,
}

/// Convenience alias used throughout nested-field.
pub type Result<T> = std::result::Result<T, PathError>;
