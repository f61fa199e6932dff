//! Datum: the algebraic value attached to an on-chain output.
//!
//! A datum tree is built once, handed to the encoder, and discarded. Nothing
//! in this crate mutates a datum after construction.

use bytes::Bytes;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::canonical::encode;
use crate::error::Result;
use crate::types::DatumHash;

/// An algebraic datum value.
///
/// `Map` keeps pairs in the order they were supplied. Structural equality
/// (`PartialEq`) is therefore order-sensitive for maps; use
/// [`Datum::logically_eq`] to compare values the way the canonical encoding
/// does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Datum {
    /// Arbitrary-precision signed integer.
    Integer(BigInt),
    /// Raw bytes.
    ByteString(Bytes),
    /// Ordered sequence of datums.
    List(Vec<Datum>),
    /// Key/value pairs in caller order. Keys need not be sorted or unique.
    Map(Vec<(Datum, Datum)>),
    /// A sum-type variant: its index plus positional fields.
    ///
    /// The tag must be non-negative and fit in 64 bits to be encodable.
    Constructor { tag: BigInt, fields: Vec<Datum> },
}

impl Datum {
    /// Create an integer datum.
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self::Integer(value.into())
    }

    /// Create a byte string datum.
    pub fn bytes(value: impl Into<Bytes>) -> Self {
        Self::ByteString(value.into())
    }

    /// Create a list datum.
    pub fn list(items: impl IntoIterator<Item = Datum>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Create a map datum, preserving the iteration order of `pairs`.
    pub fn map(pairs: impl IntoIterator<Item = (Datum, Datum)>) -> Self {
        Self::Map(pairs.into_iter().collect())
    }

    /// Create a constructor datum.
    pub fn constr(tag: u64, fields: impl IntoIterator<Item = Datum>) -> Self {
        Self::Constructor {
            tag: BigInt::from(tag),
            fields: fields.into_iter().collect(),
        }
    }

    /// The unit value: constructor 0 with no fields.
    pub fn unit() -> Self {
        Self::Constructor {
            tag: BigInt::from(0u64),
            fields: Vec::new(),
        }
    }

    /// Short name of the variant, for logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::ByteString(_) => "bytes",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Constructor { .. } => "constructor",
        }
    }

    /// Content address of this datum: Blake3 of its canonical encoding.
    pub fn hash(&self) -> Result<DatumHash> {
        Ok(DatumHash::hash(&encode(self, true)?))
    }

    /// Compare two datums ignoring map pair order.
    ///
    /// Datums that cannot be encoded are never equal to anything.
    pub fn logically_eq(&self, other: &Datum) -> bool {
        match (encode(self, true), encode(other, true)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl From<BigInt> for Datum {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for Datum {
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<Vec<u8>> for Datum {
    fn from(value: Vec<u8>) -> Self {
        Self::ByteString(value.into())
    }
}

impl From<Vec<Datum>> for Datum {
    fn from(value: Vec<Datum>) -> Self {
        Self::List(value)
    }
}
