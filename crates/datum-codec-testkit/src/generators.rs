//! Proptest generators for property-based testing.

use num_bigint::{BigInt, Sign};
use proptest::prelude::*;

use datum_codec::Datum;

/// Generate an integer that fits in 64 bits.
pub fn small_integer() -> impl Strategy<Value = BigInt> {
    any::<i64>().prop_map(BigInt::from)
}

/// Generate an integer at or past the 64-bit boundary (magnitude below 2^256).
pub fn big_integer() -> impl Strategy<Value = BigInt> {
    (
        1u8..=u8::MAX,
        prop::collection::vec(any::<u8>(), 8..32),
        any::<bool>(),
    )
        .prop_map(|(high, low, negative)| {
            let mut be = vec![high];
            be.extend(low);
            let magnitude = BigInt::from_bytes_be(Sign::Plus, &be);
            if negative {
                -magnitude
            } else {
                magnitude
            }
        })
}

/// Generate an integer, mostly small.
pub fn integer() -> impl Strategy<Value = BigInt> {
    prop_oneof![
        4 => small_integer(),
        1 => big_integer(),
    ]
}

/// Generate byte string contents of at most `max_len` bytes.
pub fn byte_string(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a constructor tag from each of the three tag ranges.
pub fn constr_tag() -> impl Strategy<Value = u64> {
    prop_oneof![0u64..=6, 7u64..=127, 128u64..=u64::MAX]
}

/// Generate a leaf datum (integer or byte string).
pub fn leaf() -> impl Strategy<Value = Datum> {
    prop_oneof![
        integer().prop_map(Datum::Integer),
        byte_string(64).prop_map(Datum::bytes),
    ]
}

/// Generate an arbitrary datum tree.
pub fn datum() -> BoxedStrategy<Datum> {
    leaf()
        .prop_recursive(4, 64, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Datum::List),
                prop::collection::vec((inner.clone(), inner.clone()), 0..5).prop_map(Datum::Map),
                (constr_tag(), prop::collection::vec(inner, 0..5))
                    .prop_map(|(tag, fields)| Datum::constr(tag, fields)),
            ]
        })
        .boxed()
}

/// Reverse the pair order of every map in the tree.
///
/// The result is logically equal to the input.
pub fn reverse_maps(datum: &Datum) -> Datum {
    match datum {
        Datum::List(items) => Datum::List(items.iter().map(reverse_maps).collect()),
        Datum::Map(pairs) => Datum::Map(
            pairs
                .iter()
                .rev()
                .map(|(k, v)| (reverse_maps(k), reverse_maps(v)))
                .collect(),
        ),
        Datum::Constructor { tag, fields } => Datum::Constructor {
            tag: tag.clone(),
            fields: fields.iter().map(reverse_maps).collect(),
        },
        other => other.clone(),
    }
}
