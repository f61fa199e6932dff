//! Test fixtures for the lock/unlock scenario.
//!
//! A value is locked at a script output using a non-canonical encoding, then
//! spent while the script requires the continuing output to carry the
//! canonical encoding of the same value. [`ScriptOutput`] stands in for that
//! script: it only ever looks at the datum bytes.

use datum_codec::{
    decode, encode, require_canonical, CanonicalityError, Datum, DatumHash, DecodeError,
    EncodeError,
};
use num_bigint::BigInt;
use thiserror::Error;

/// The inner record of [`CanonicalDatum`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    pub number: BigInt,
}

/// Record datum used by the scenario: `{ some_number: { number } }`.
///
/// Records are encoded as constructor 0 with positional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalDatum {
    pub some_number: Number,
}

impl CanonicalDatum {
    pub fn new(number: impl Into<BigInt>) -> Self {
        Self {
            some_number: Number {
                number: number.into(),
            },
        }
    }

    /// Convert to the datum model.
    pub fn to_datum(&self) -> Datum {
        Datum::constr(
            0,
            [Datum::constr(
                0,
                [Datum::Integer(self.some_number.number.clone())],
            )],
        )
    }

    /// Read the record back from a datum, if it has the expected shape.
    pub fn from_datum(datum: &Datum) -> Option<Self> {
        let inner = match datum {
            Datum::Constructor { tag, fields } if *tag == BigInt::from(0u8) => match &fields[..] {
                [inner] => inner,
                _ => return None,
            },
            _ => return None,
        };
        match inner {
            Datum::Constructor { tag, fields } if *tag == BigInt::from(0u8) => match &fields[..] {
                [Datum::Integer(n)] => Some(Self::new(n.clone())),
                _ => None,
            },
            _ => None,
        }
    }

    /// Encode the record in the requested mode.
    pub fn serialize(&self, canonical: bool) -> Result<Vec<u8>, EncodeError> {
        encode(&self.to_datum(), canonical)
    }
}

/// Errors from spending a [`ScriptOutput`].
#[derive(Debug, Error)]
pub enum SpendError {
    /// The continuing datum is not canonically encoded.
    #[error("canonicality error: {0}")]
    Canonicality(#[from] CanonicalityError),

    /// The continuing datum carries a different value.
    #[error("continuing datum {0} differs from locked datum")]
    DatumChanged(DatumHash),
}

/// An output locked at the script, holding inline datum bytes verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutput {
    datum_bytes: Vec<u8>,
    datum: Datum,
}

impl ScriptOutput {
    /// Lock a datum. Any decodable spelling is accepted.
    pub fn lock(datum_bytes: Vec<u8>) -> Result<Self, DecodeError> {
        let datum = decode(&datum_bytes)?;
        Ok(Self { datum_bytes, datum })
    }

    /// The datum bytes exactly as they were locked.
    pub fn datum_bytes(&self) -> &[u8] {
        &self.datum_bytes
    }

    /// The decoded datum.
    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    /// Spend this output into a continuing output carrying `continuing`.
    ///
    /// The continuing datum must be the canonical encoding of the locked
    /// value.
    pub fn spend(&self, continuing: &[u8]) -> Result<ScriptOutput, SpendError> {
        let next = require_canonical(continuing)?;
        if !next.logically_eq(&self.datum) {
            let hash = next.hash().map_err(CanonicalityError::from)?;
            return Err(SpendError::DatumChanged(hash));
        }
        Ok(ScriptOutput {
            datum_bytes: continuing.to_vec(),
            datum: next,
        })
    }
}
