//! # datum-codec testkit
//!
//! Testing utilities for datum-codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known datums with their expected canonical and
//!   non-canonical bytes
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: The lock/unlock scenario, where a script output locked
//!   with a non-canonical datum may only be spent into its canonical form
//!
//! ## Golden Vectors
//!
//! ```rust
//! use datum_codec_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, canonical, _) in verify_all_vectors() {
//!     assert!(matches, "{}: {}", name, canonical);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use datum_codec::{decode, encode};
//! use datum_codec_testkit::generators::datum;
//!
//! proptest! {
//!     #[test]
//!     fn non_canonical_preserves_value(d in datum()) {
//!         let bytes = encode(&d, false).unwrap();
//!         prop_assert_eq!(decode(&bytes).unwrap(), d);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use datum_codec_testkit::fixtures::{CanonicalDatum, ScriptOutput};
//!
//! let record = CanonicalDatum::new(1);
//! let locked = ScriptOutput::lock(record.serialize(false).unwrap()).unwrap();
//! assert!(locked.spend(&record.serialize(true).unwrap()).is_ok());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{CanonicalDatum, Number, ScriptOutput, SpendError};
pub use generators::{datum, reverse_maps};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
