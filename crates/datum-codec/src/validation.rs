//! Canonicality checks on encoded datums.
//!
//! A consumer that compares datums by bytes must only ever see canonical
//! encodings. These checks decode the input, re-encode it canonically, and
//! require exact byte equality.

use crate::canonical::encode;
use crate::datum::Datum;
use crate::error::{CanonicalityError, DecodeError};

/// Check whether `bytes` is the canonical encoding of the datum it carries.
pub fn is_canonical(bytes: &[u8]) -> Result<bool, DecodeError> {
    let datum = crate::decode::decode(bytes)?;
    Ok(matches!(encode(&datum, true), Ok(canonical) if canonical == bytes))
}

/// Decode `bytes`, requiring them to be the canonical encoding.
pub fn require_canonical(bytes: &[u8]) -> Result<Datum, CanonicalityError> {
    let datum = crate::decode::decode(bytes)?;
    let canonical = encode(&datum, true)?;
    if canonical != bytes {
        tracing::debug!(
            expected_len = canonical.len(),
            actual_len = bytes.len(),
            "rejected non-canonical datum"
        );
        return Err(CanonicalityError::NotCanonical {
            expected: hex::encode(&canonical),
            actual: hex::encode(bytes),
        });
    }
    Ok(datum)
}

/// Whether two encodings carry the same logical datum, however spelled.
pub fn logically_equal(a: &[u8], b: &[u8]) -> Result<bool, CanonicalityError> {
    let a = encode(&crate::decode::decode(a)?, true)?;
    let b = encode(&crate::decode::decode(b)?, true)?;
    Ok(a == b)
}
