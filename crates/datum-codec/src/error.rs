//! Error types for datum encoding and decoding.

use thiserror::Error;

/// Errors that can occur while encoding a datum.
///
/// Encoding is all-or-nothing: when one of these is returned, no bytes have
/// been handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The in-memory value violates a model invariant.
    #[error("malformed value: {0}")]
    MalformedValue(String),

    /// An integer argument needs more bytes than the configured ceiling.
    #[error("unsupported magnitude: {bytes} bytes exceeds limit of {limit}")]
    UnsupportedMagnitude { bytes: usize, limit: usize },
}

/// Errors that can occur while decoding CBOR bytes into a datum.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid CBOR: {0}")]
    Cbor(String),

    #[error("{0} trailing bytes after datum")]
    TrailingBytes(usize),

    #[error("unexpected CBOR tag: {0}")]
    UnexpectedTag(u64),

    #[error("unsupported CBOR item: {0}")]
    UnsupportedItem(&'static str),

    #[error("malformed constructor: {0}")]
    MalformedConstructor(String),

    #[error("datum nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Errors from checking that bytes are the canonical encoding of a datum.
#[derive(Debug, Error)]
pub enum CanonicalityError {
    #[error("decoding error: {0}")]
    Decode(#[from] DecodeError),

    #[error("encoding error: {0}")]
    Encode(#[from] EncodeError),

    /// The bytes decode, but differ from the canonical re-encoding.
    #[error("datum is not canonical: expected {expected}, got {actual}")]
    NotCanonical { expected: String, actual: String },
}

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
