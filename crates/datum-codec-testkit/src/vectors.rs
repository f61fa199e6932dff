//! Golden test vectors for deterministic verification.
//!
//! Each vector pins both spellings of one datum. Any implementation of the
//! encoding must reproduce the canonical bytes exactly; the non-canonical
//! bytes pin this crate's default non-canonical options.

use datum_codec::{encode, Datum};
use num_bigint::BigInt;
use serde::Serialize;

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// What the vector exercises.
    pub description: &'static str,
    /// The datum being encoded.
    pub datum: Datum,
    /// Expected canonical encoding (hex).
    pub canonical_hex: &'static str,
    /// Expected default non-canonical encoding (hex).
    pub non_canonical_hex: &'static str,
}

impl GoldenVector {
    /// Whether both spellings of this datum are byte-identical.
    pub fn modes_agree(&self) -> bool {
        self.canonical_hex == self.non_canonical_hex
    }
}

fn pow2(bits: u32) -> BigInt {
    BigInt::from(1u8) << bits
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "integer_zero",
            description: "Zero fits in the initial byte",
            datum: Datum::integer(0),
            canonical_hex: "00",
            non_canonical_hex: "1800",
        },
        GoldenVector {
            name: "integer_one",
            description: "The value locked by the lock/unlock scenario",
            datum: Datum::integer(1),
            canonical_hex: "01",
            non_canonical_hex: "1801",
        },
        GoldenVector {
            name: "negative_one",
            description: "-1 is major type 1 with argument 0",
            datum: Datum::integer(-1),
            canonical_hex: "20",
            non_canonical_hex: "3800",
        },
        GoldenVector {
            name: "integer_500",
            description: "Two-byte argument, widened to four",
            datum: Datum::integer(500),
            canonical_hex: "1901f4",
            non_canonical_hex: "1a000001f4",
        },
        GoldenVector {
            name: "u64_max",
            description: "Eight-byte argument cannot be widened",
            datum: Datum::integer(u64::MAX),
            canonical_hex: "1bffffffffffffffff",
            non_canonical_hex: "1bffffffffffffffff",
        },
        GoldenVector {
            name: "bignum_2_64",
            description: "Smallest positive bignum; non-canonical pads a zero byte",
            datum: Datum::Integer(pow2(64)),
            canonical_hex: "c249010000000000000000",
            non_canonical_hex: "c24a00010000000000000000",
        },
        GoldenVector {
            name: "negative_bignum",
            description: "-(2^64) - 1 needs tag 3",
            datum: Datum::Integer(-pow2(64) - 1),
            canonical_hex: "c349010000000000000000",
            non_canonical_hex: "c34a00010000000000000000",
        },
        GoldenVector {
            name: "negative_bignum_2_128",
            description: "-(2^128) has a full 16-byte argument",
            datum: Datum::Integer(-pow2(128)),
            canonical_hex: "c350ffffffffffffffffffffffffffffffff",
            non_canonical_hex: "c35100ffffffffffffffffffffffffffffffff",
        },
        GoldenVector {
            name: "byte_string",
            description: "Short byte string, same in both modes",
            datum: Datum::bytes(vec![0xdeu8, 0xad, 0xbe, 0xef]),
            canonical_hex: "44deadbeef",
            non_canonical_hex: "44deadbeef",
        },
        GoldenVector {
            name: "empty_list",
            description: "Empty lists are always definite",
            datum: Datum::List(vec![]),
            canonical_hex: "80",
            non_canonical_hex: "80",
        },
        GoldenVector {
            name: "list_one_two",
            description: "Definite list vs indefinite list with widened items",
            datum: Datum::list([Datum::integer(1), Datum::integer(2)]),
            canonical_hex: "820102",
            non_canonical_hex: "9f18011802ff",
        },
        GoldenVector {
            name: "map_reordered",
            description: "Pairs inserted as [5, 1]; canonical sorts, non-canonical keeps order",
            datum: Datum::map([
                (Datum::integer(5), Datum::integer(0)),
                (Datum::integer(1), Datum::integer(0)),
            ]),
            canonical_hex: "a201000500",
            non_canonical_hex: "a21805180018011800",
        },
        GoldenVector {
            name: "unit",
            description: "Constructor 0 with no fields",
            datum: Datum::unit(),
            canonical_hex: "d87980",
            non_canonical_hex: "d87980",
        },
        GoldenVector {
            name: "constr_7",
            description: "First tag of the 1280 range",
            datum: Datum::constr(7, Vec::new()),
            canonical_hex: "d9050080",
            non_canonical_hex: "d9050080",
        },
        GoldenVector {
            name: "constr_128",
            description: "First tag needing the general 102 form",
            datum: Datum::constr(128, Vec::new()),
            canonical_hex: "d86682188080",
            non_canonical_hex: "d8668219008080",
        },
        GoldenVector {
            name: "some_number_record",
            description: "{ some_number: { number: 1 } } as nested constructors",
            datum: Datum::constr(0, [Datum::constr(0, [Datum::integer(1)])]),
            canonical_hex: "d87981d8798101",
            non_canonical_hex: "d8799fd8799f1801ffff",
        },
    ]
}

/// Verify all golden vectors against the encoder.
///
/// Returns `(name, matches, canonical_hex, non_canonical_hex)` per vector,
/// with the hex actually produced.
pub fn verify_all_vectors() -> Vec<(String, bool, String, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let canonical = encode(&v.datum, true)
                .map(hex::encode)
                .unwrap_or_default();
            let non_canonical = encode(&v.datum, false)
                .map(hex::encode)
                .unwrap_or_default();
            let matches = canonical == v.canonical_hex && non_canonical == v.non_canonical_hex;
            (v.name.to_string(), matches, canonical, non_canonical)
        })
        .collect()
}
