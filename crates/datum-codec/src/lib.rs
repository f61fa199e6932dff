//! # datum-codec
//!
//! Canonical and non-canonical CBOR encodings of algebraic datums.
//!
//! This crate contains no I/O, no storage, no networking. Encoding is a pure
//! function of the datum and the chosen options.
//!
//! ## Key Types
//!
//! - [`Datum`] - Integers, byte strings, lists, maps, and constructors
//! - [`EncodeOptions`] - Which spelling of a datum the encoder emits
//! - [`DatumHash`] - Content address of a datum (Blake3 of its canonical bytes)
//!
//! ## Usage
//!
//! ```rust
//! use datum_codec::{encode, decode, Datum};
//!
//! let datum = Datum::constr(0, [Datum::integer(1)]);
//! let canonical = encode(&datum, true).unwrap();
//! let non_canonical = encode(&datum, false).unwrap();
//!
//! assert_ne!(canonical, non_canonical);
//! assert_eq!(decode(&non_canonical).unwrap(), datum);
//! ```
//!
//! ## Canonicalization
//!
//! See the [`canonical`] module for the exact encoding rules, and
//! [`validation`] for checking received bytes against them.

pub mod canonical;
pub mod datum;
pub mod decode;
pub mod error;
pub mod options;
pub mod types;
pub mod validation;

pub use canonical::{encode, encode_into, encode_with};
pub use datum::Datum;
pub use decode::decode;
pub use error::{CanonicalityError, DecodeError, EncodeError};
pub use options::{EncodeOptions, Width, DEFAULT_MAX_INTEGER_BYTES, MAX_NESTING_DEPTH};
pub use types::DatumHash;
pub use validation::{is_canonical, logically_equal, require_canonical};
