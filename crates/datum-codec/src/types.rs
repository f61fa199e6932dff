//! Strong type definitions for datum-codec.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte datum hash, computed as Blake3(canonical encoding).
///
/// Two datums that are logically equal (same values, map pairs in any order)
/// have the same hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatumHash(pub [u8; 32]);

impl DatumHash {
    /// Hash already-encoded canonical bytes.
    pub fn hash(canonical: &[u8]) -> Self {
        Self(*blake3::hash(canonical).as_bytes())
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for DatumHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DatumHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for DatumHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
