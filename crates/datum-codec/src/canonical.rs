//! CBOR encoding of datums, canonical and non-canonical.
//!
//! The canonical encoding follows RFC 8949 Core Deterministic Encoding with
//! the Plutus data conventions:
//! - Integers use the smallest head; arguments beyond 64 bits use bignum
//!   tags 2/3 with no leading zero bytes
//! - Definite lengths only, in the smallest head
//! - Map pairs sorted by encoded key bytes
//! - Constructors use tags 121..=127, 1280..=1400, or 102 by tag range
//!
//! The non-canonical encoding spells the same value differently (see
//! [`EncodeOptions::non_canonical`]). Both decode to the same datum.

use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use crate::datum::Datum;
use crate::error::{EncodeError, Result};
use crate::options::{EncodeOptions, Width, MAX_NESTING_DEPTH};

/// CBOR major types.
mod major {
    pub const UNSIGNED: u8 = 0;
    pub const NEGATIVE: u8 = 1;
    pub const BYTES: u8 = 2;
    pub const ARRAY: u8 = 4;
    pub const MAP: u8 = 5;
    pub const TAG: u8 = 6;
}

/// CBOR tag numbers used by the datum encoding.
pub(crate) mod tags {
    pub const BIGNUM_POS: u64 = 2;
    pub const BIGNUM_NEG: u64 = 3;
    /// Constructors with an arbitrary 64-bit tag: `102([tag, fields])`.
    pub const CONSTR_GENERAL: u64 = 102;
    /// Constructors 0..=6 map to tags 121..=127.
    pub const CONSTR_COMPACT: u64 = 121;
    /// Constructors 7..=127 map to tags 1280..=1400.
    pub const CONSTR_EXTENDED: u64 = 1280;

    pub const COMPACT_MAX: u64 = 6;
    pub const EXTENDED_MIN: u64 = 7;
    pub const EXTENDED_MAX: u64 = 127;
}

const INDEFINITE_ARRAY: u8 = 0x9f;
const BREAK: u8 = 0xff;

/// Encode a datum in canonical (`true`) or default non-canonical (`false`)
/// form.
pub fn encode(datum: &Datum, canonical: bool) -> Result<Vec<u8>> {
    encode_with(datum, &EncodeOptions::for_mode(canonical))
}

/// Encode a datum with explicit options.
pub fn encode_with(datum: &Datum, opts: &EncodeOptions) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Err(e) = encode_datum(&mut buf, datum, opts, 0) {
        tracing::debug!(kind = datum.kind(), error = %e, "datum rejected by encoder");
        return Err(e);
    }
    tracing::trace!(
        canonical = opts.is_canonical(),
        len = buf.len(),
        "encoded datum"
    );
    Ok(buf)
}

/// Append the encoding of `datum` to `buf`.
///
/// On error `buf` is left exactly as it was.
pub fn encode_into(buf: &mut Vec<u8>, datum: &Datum, opts: &EncodeOptions) -> Result<()> {
    let bytes = encode_with(datum, opts)?;
    buf.extend_from_slice(&bytes);
    Ok(())
}

/// Recursively encode a datum sitting inside `depth` enclosing containers.
fn encode_datum(
    buf: &mut Vec<u8>,
    datum: &Datum,
    opts: &EncodeOptions,
    depth: usize,
) -> Result<()> {
    match datum {
        Datum::Integer(n) => encode_integer(buf, n, opts),
        Datum::ByteString(b) => {
            encode_bytes(buf, b, opts.length_width);
            Ok(())
        }
        Datum::List(items) => encode_list(buf, items, opts, nested(depth)?),
        Datum::Map(pairs) => encode_map(buf, pairs, opts, nested(depth)?),
        Datum::Constructor { tag, fields } => {
            encode_constructor(buf, tag, fields, opts, nested(depth)?)
        }
    }
}

/// Depth of the children of a container found at `depth`.
fn nested(depth: usize) -> Result<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(EncodeError::MalformedValue(format!(
            "nested deeper than {} levels",
            MAX_NESTING_DEPTH
        )));
    }
    Ok(depth + 1)
}

/// Size class of a CBOR head argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Head {
    Inline,
    U8,
    U16,
    U32,
    U64,
}

impl Head {
    fn minimal(n: u64) -> Self {
        if n < 24 {
            Head::Inline
        } else if n <= 0xff {
            Head::U8
        } else if n <= 0xffff {
            Head::U16
        } else if n <= 0xffffffff {
            Head::U32
        } else {
            Head::U64
        }
    }

    fn widened(self) -> Self {
        match self {
            Head::Inline => Head::U8,
            Head::U8 => Head::U16,
            Head::U16 => Head::U32,
            Head::U32 | Head::U64 => Head::U64,
        }
    }

    fn select(n: u64, width: Width) -> Self {
        match width {
            Width::Minimal => Head::minimal(n),
            Width::Widened => Head::minimal(n).widened(),
        }
    }
}

/// Encode a head (major type + argument).
fn encode_head(buf: &mut Vec<u8>, major: u8, n: u64, width: Width) {
    let mt = major << 5;
    match Head::select(n, width) {
        Head::Inline => buf.push(mt | (n as u8)),
        Head::U8 => {
            buf.push(mt | 24);
            buf.push(n as u8);
        }
        Head::U16 => {
            buf.push(mt | 25);
            buf.extend_from_slice(&(n as u16).to_be_bytes());
        }
        Head::U32 => {
            buf.push(mt | 26);
            buf.extend_from_slice(&(n as u32).to_be_bytes());
        }
        Head::U64 => {
            buf.push(mt | 27);
            buf.extend_from_slice(&n.to_be_bytes());
        }
    }
}

/// Encode an integer (major types 0 and 1, or bignum tags 2 and 3).
fn encode_integer(buf: &mut Vec<u8>, n: &BigInt, opts: &EncodeOptions) -> Result<()> {
    // CBOR encodes -1 as 0, -2 as 1, etc.
    let (major, bignum_tag, arg) = match n.sign() {
        Sign::Minus => (
            major::NEGATIVE,
            tags::BIGNUM_NEG,
            n.magnitude().clone() - 1u32,
        ),
        _ => (major::UNSIGNED, tags::BIGNUM_POS, n.magnitude().clone()),
    };

    if let Some(small) = arg.to_u64() {
        encode_head(buf, major, small, opts.integer_width);
        return Ok(());
    }

    let mut bytes = arg.to_bytes_be();
    if let Some(limit) = opts.max_integer_bytes {
        if bytes.len() > limit {
            return Err(EncodeError::UnsupportedMagnitude {
                bytes: bytes.len(),
                limit,
            });
        }
    }
    if opts.integer_width == Width::Widened {
        bytes.insert(0, 0);
    }

    encode_head(buf, major::TAG, bignum_tag, Width::Minimal);
    encode_bytes(buf, &bytes, opts.length_width);
    Ok(())
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8], width: Width) {
    encode_head(buf, major::BYTES, bytes.len() as u64, width);
    buf.extend_from_slice(bytes);
}

/// Encode a list (major type 4), definite or indefinite.
fn encode_list(
    buf: &mut Vec<u8>,
    items: &[Datum],
    opts: &EncodeOptions,
    depth: usize,
) -> Result<()> {
    let indefinite = opts.indefinite_lists && !items.is_empty();
    if indefinite {
        buf.push(INDEFINITE_ARRAY);
    } else {
        encode_head(buf, major::ARRAY, items.len() as u64, opts.length_width);
    }
    for item in items {
        encode_datum(buf, item, opts, depth)?;
    }
    if indefinite {
        buf.push(BREAK);
    }
    Ok(())
}

/// Encode a map (major type 5).
///
/// When sorting, pairs are ordered by their encoded key bytes as emitted
/// (the canonical key encoding under canonical options). Pairs with equal
/// keys are ordered by their encoded value bytes.
fn encode_map(
    buf: &mut Vec<u8>,
    pairs: &[(Datum, Datum)],
    opts: &EncodeOptions,
    depth: usize,
) -> Result<()> {
    let mut encoded = Vec::with_capacity(pairs.len());
    for (k, v) in pairs {
        let mut key_buf = Vec::new();
        encode_datum(&mut key_buf, k, opts, depth)?;
        let mut value_buf = Vec::new();
        encode_datum(&mut value_buf, v, opts, depth)?;
        encoded.push((key_buf, value_buf));
    }

    if opts.sort_map_keys {
        encoded.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    }

    encode_head(buf, major::MAP, encoded.len() as u64, opts.length_width);
    for (key_bytes, value_bytes) in encoded {
        buf.extend_from_slice(&key_bytes);
        buf.extend_from_slice(&value_bytes);
    }
    Ok(())
}

/// Encode a constructor application.
fn encode_constructor(
    buf: &mut Vec<u8>,
    tag: &BigInt,
    fields: &[Datum],
    opts: &EncodeOptions,
    depth: usize,
) -> Result<()> {
    if tag.sign() == Sign::Minus {
        return Err(EncodeError::MalformedValue(format!(
            "negative constructor tag {}",
            tag
        )));
    }
    let t = tag.to_u64().ok_or_else(|| EncodeError::UnsupportedMagnitude {
        bytes: tag.magnitude().to_bytes_be().len(),
        limit: 8,
    })?;

    match t {
        0..=tags::COMPACT_MAX => {
            encode_head(buf, major::TAG, tags::CONSTR_COMPACT + t, Width::Minimal);
        }
        tags::EXTENDED_MIN..=tags::EXTENDED_MAX => {
            let tag_number = tags::CONSTR_EXTENDED + (t - tags::EXTENDED_MIN);
            encode_head(buf, major::TAG, tag_number, Width::Minimal);
        }
        _ => {
            encode_head(buf, major::TAG, tags::CONSTR_GENERAL, Width::Minimal);
            encode_head(buf, major::ARRAY, 2, opts.length_width);
            encode_head(buf, major::UNSIGNED, t, opts.integer_width);
        }
    }
    encode_list(buf, fields, opts, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ciborium::value::Value;
    use num_bigint::BigInt;
    use proptest::prelude::*;

    fn canonical(d: &Datum) -> Vec<u8> {
        encode(d, true).unwrap()
    }

    fn non_canonical(d: &Datum) -> Vec<u8> {
        encode(d, false).unwrap()
    }

    fn pow2(bits: u32) -> BigInt {
        BigInt::from(1u8) << bits
    }

    #[test]
    fn test_integer_encoding() {
        // Test smallest encoding for various integer sizes
        let mut buf = Vec::new();

        // 0-23: single byte
        encode_head(&mut buf, 0, 0, Width::Minimal);
        assert_eq!(buf, vec![0x00]);

        buf.clear();
        encode_head(&mut buf, 0, 23, Width::Minimal);
        assert_eq!(buf, vec![0x17]);

        // 24-255: two bytes
        buf.clear();
        encode_head(&mut buf, 0, 24, Width::Minimal);
        assert_eq!(buf, vec![0x18, 24]);

        buf.clear();
        encode_head(&mut buf, 0, 255, Width::Minimal);
        assert_eq!(buf, vec![0x18, 255]);

        // 256-65535: three bytes
        buf.clear();
        encode_head(&mut buf, 0, 256, Width::Minimal);
        assert_eq!(buf, vec![0x19, 0x01, 0x00]);

        buf.clear();
        encode_head(&mut buf, 0, 65535, Width::Minimal);
        assert_eq!(buf, vec![0x19, 0xff, 0xff]);

        buf.clear();
        encode_head(&mut buf, 0, 65536, Width::Minimal);
        assert_eq!(buf, vec![0x1a, 0x00, 0x01, 0x00, 0x00]);

        buf.clear();
        encode_head(&mut buf, 0, 1 << 32, Width::Minimal);
        assert_eq!(buf, vec![0x1b, 0, 0, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_widened_heads() {
        let mut buf = Vec::new();
        encode_head(&mut buf, 0, 1, Width::Widened);
        assert_eq!(buf, vec![0x18, 0x01]);

        buf.clear();
        encode_head(&mut buf, 0, 200, Width::Widened);
        assert_eq!(buf, vec![0x19, 0x00, 200]);

        buf.clear();
        encode_head(&mut buf, 0, 500, Width::Widened);
        assert_eq!(buf, vec![0x1a, 0x00, 0x00, 0x01, 0xf4]);

        buf.clear();
        encode_head(&mut buf, 0, u64::MAX, Width::Widened);
        assert_eq!(buf, vec![0x1b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_integer_one_modes_diverge() {
        let d = Datum::integer(1);
        let c = canonical(&d);
        let n = non_canonical(&d);

        assert_eq!(c, vec![0x01]);
        assert_eq!(n, vec![0x18, 0x01]);
        assert_ne!(c, n);
        assert!(c.len() <= n.len());
    }

    #[test]
    fn test_negative_integers() {
        assert_eq!(canonical(&Datum::integer(-1)), vec![0x20]);
        assert_eq!(canonical(&Datum::integer(-24)), vec![0x37]);
        assert_eq!(canonical(&Datum::integer(-25)), vec![0x38, 0x18]);
        assert_eq!(non_canonical(&Datum::integer(-1)), vec![0x38, 0x00]);

        // -(2^64) still fits a major type 1 head
        let mut expected = vec![0x3b];
        expected.extend_from_slice(&[0xff; 8]);
        assert_eq!(canonical(&Datum::Integer(-pow2(64))), expected);
    }

    #[test]
    fn test_bignums() {
        let mut expected = vec![0xc2, 0x49, 0x01];
        expected.extend_from_slice(&[0x00; 8]);
        assert_eq!(canonical(&Datum::Integer(pow2(64))), expected);

        // Non-canonical pads the magnitude with a leading zero
        let mut expected = vec![0xc2, 0x4a, 0x00, 0x01];
        expected.extend_from_slice(&[0x00; 8]);
        assert_eq!(non_canonical(&Datum::Integer(pow2(64))), expected);

        // -(2^64) - 1 has argument 2^64
        let mut expected = vec![0xc3, 0x49, 0x01];
        expected.extend_from_slice(&[0x00; 8]);
        assert_eq!(
            canonical(&Datum::Integer(-pow2(64) - BigInt::from(1))),
            expected
        );
    }

    #[test]
    fn test_u64_max_is_identical_in_both_modes() {
        let d = Datum::integer(u64::MAX);
        assert_eq!(canonical(&d), non_canonical(&d));
    }

    #[test]
    fn test_unsupported_magnitude() {
        // 2^511 needs 64 bytes, 2^512 needs 65
        assert!(encode(&Datum::Integer(pow2(511)), true).is_ok());

        let too_big = Datum::list([Datum::Integer(pow2(512))]);
        assert_eq!(
            encode(&too_big, true),
            Err(EncodeError::UnsupportedMagnitude {
                bytes: 65,
                limit: 64
            })
        );

        let unbounded = EncodeOptions::canonical().with_max_integer_bytes(None);
        let bytes = encode_with(&too_big, &unbounded).unwrap();
        assert_eq!(&bytes[..4], &[0x81, 0xc2, 0x58, 65]);
    }

    #[test]
    fn test_byte_strings() {
        let d = Datum::bytes(vec![0xdeu8, 0xad, 0xbe, 0xef]);
        assert_eq!(canonical(&d), vec![0x44, 0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(canonical(&d), non_canonical(&d));

        let long = Datum::bytes(vec![0u8; 24]);
        assert_eq!(&canonical(&long)[..2], &[0x58, 24]);

        let wide_lengths = EncodeOptions {
            length_width: Width::Widened,
            ..EncodeOptions::canonical()
        };
        assert_eq!(
            &encode_with(&d, &wide_lengths).unwrap()[..2],
            &[0x58, 0x04]
        );
    }

    #[test]
    fn test_lists() {
        let d = Datum::list([Datum::integer(1), Datum::integer(2)]);
        assert_eq!(canonical(&d), vec![0x82, 0x01, 0x02]);
        assert_eq!(
            non_canonical(&d),
            vec![0x9f, 0x18, 0x01, 0x18, 0x02, 0xff]
        );

        // Empty lists are always definite
        let empty = Datum::list([]);
        assert_eq!(canonical(&empty), vec![0x80]);
        assert_eq!(non_canonical(&empty), vec![0x80]);
    }

    #[test]
    fn test_map_key_ordering() {
        // Ensure integer keys are sorted correctly
        let d = Datum::map([
            (Datum::integer(8), Datum::integer(80)),
            (Datum::integer(0), Datum::integer(0)),
            (Datum::integer(5), Datum::integer(50)),
        ]);
        let buf = canonical(&d);

        // Map header (3 entries)
        assert_eq!(buf[0], 0xa3);
        // Keys should be in order: 0, 5, 8
        assert_eq!(buf[1], 0x00); // key 0
        assert_eq!(buf[2], 0x00); // value 0
        assert_eq!(buf[3], 0x05); // key 5
        assert_eq!(buf[4], 0x18); // value 50 (>23)
        assert_eq!(buf[5], 50);
        assert_eq!(buf[6], 0x08); // key 8
        assert_eq!(buf[7], 0x18); // value 80 (>23)
        assert_eq!(buf[8], 80);
    }

    #[test]
    fn test_map_reordering_only_in_canonical_mode() {
        let d = Datum::map([
            (Datum::integer(5), Datum::integer(0)),
            (Datum::integer(1), Datum::integer(0)),
        ]);
        assert_eq!(canonical(&d), vec![0xa2, 0x01, 0x00, 0x05, 0x00]);
        assert_eq!(
            non_canonical(&d),
            vec![0xa2, 0x18, 0x05, 0x18, 0x00, 0x18, 0x01, 0x18, 0x00]
        );
    }

    #[test]
    fn test_map_keys_sort_by_encoded_bytes() {
        // Encoded bytes, not numeric value: 10 (0x0a) < 100 (0x18 0x64) < -1 (0x20)
        let d = Datum::map([
            (Datum::integer(-1), Datum::unit()),
            (Datum::integer(100), Datum::unit()),
            (Datum::integer(10), Datum::unit()),
        ]);
        let buf = canonical(&d);
        // Each value is the 3-byte unit constructor
        assert_eq!(buf[1], 0x0a);
        assert_eq!(&buf[5..7], &[0x18, 0x64]);
        assert_eq!(buf[10], 0x20);
        assert_eq!(buf.len(), 14);
    }

    #[test]
    fn test_duplicate_keys_are_order_independent() {
        let a = Datum::map([
            (Datum::integer(1), Datum::integer(2)),
            (Datum::integer(1), Datum::integer(1)),
        ]);
        let b = Datum::map([
            (Datum::integer(1), Datum::integer(1)),
            (Datum::integer(1), Datum::integer(2)),
        ]);
        assert_eq!(canonical(&a), canonical(&b));
    }

    #[test]
    fn test_constructor_tag_ranges() {
        assert_eq!(canonical(&Datum::constr(0, [])), vec![0xd8, 0x79, 0x80]);
        assert_eq!(canonical(&Datum::constr(6, [])), vec![0xd8, 0x7f, 0x80]);
        assert_eq!(
            canonical(&Datum::constr(7, [])),
            vec![0xd9, 0x05, 0x00, 0x80]
        );
        assert_eq!(
            canonical(&Datum::constr(127, [])),
            vec![0xd9, 0x05, 0x78, 0x80]
        );
        assert_eq!(
            canonical(&Datum::constr(128, [])),
            vec![0xd8, 0x66, 0x82, 0x18, 0x80, 0x80]
        );
        assert_eq!(
            non_canonical(&Datum::constr(128, [])),
            vec![0xd8, 0x66, 0x82, 0x19, 0x00, 0x80, 0x80]
        );
    }

    #[test]
    fn test_nested_constructor_record() {
        // { some_number: { number: 1 } }
        let d = Datum::constr(0, [Datum::constr(0, [Datum::integer(1)])]);
        assert_eq!(
            canonical(&d),
            vec![0xd8, 0x79, 0x81, 0xd8, 0x79, 0x81, 0x01]
        );
        assert_eq!(
            non_canonical(&d),
            vec![0xd8, 0x79, 0x9f, 0xd8, 0x79, 0x9f, 0x18, 0x01, 0xff, 0xff]
        );
    }

    #[test]
    fn test_negative_tag_is_malformed() {
        let d = Datum::Constructor {
            tag: BigInt::from(-1),
            fields: vec![],
        };
        assert!(matches!(
            encode(&d, true),
            Err(EncodeError::MalformedValue(_))
        ));
        assert!(matches!(
            encode(&d, false),
            Err(EncodeError::MalformedValue(_))
        ));
    }

    #[test]
    fn test_tag_above_u64_is_unsupported() {
        let d = Datum::Constructor {
            tag: pow2(64),
            fields: vec![],
        };
        assert_eq!(
            encode(&d, true),
            Err(EncodeError::UnsupportedMagnitude { bytes: 9, limit: 8 })
        );
    }

    #[test]
    fn test_encode_into_leaves_buffer_untouched_on_error() {
        let bad = Datum::list([
            Datum::integer(1),
            Datum::Constructor {
                tag: BigInt::from(-3),
                fields: vec![],
            },
        ]);
        let mut buf = vec![0xaa];
        assert!(encode_into(&mut buf, &bad, &EncodeOptions::canonical()).is_err());
        assert_eq!(buf, vec![0xaa]);

        encode_into(&mut buf, &Datum::integer(1), &EncodeOptions::canonical()).unwrap();
        assert_eq!(buf, vec![0xaa, 0x01]);
    }

    fn nested_lists(levels: usize) -> Datum {
        let mut d = Datum::List(vec![]);
        for _ in 1..levels {
            d = Datum::list([d]);
        }
        d
    }

    #[test]
    fn test_nesting_depth_limit() {
        let deepest = nested_lists(MAX_NESTING_DEPTH);
        // 0x81 per wrapping list vs 0x9f ... 0xff, around an empty 0x80
        assert_eq!(canonical(&deepest).len(), MAX_NESTING_DEPTH);
        assert_eq!(non_canonical(&deepest).len(), 2 * MAX_NESTING_DEPTH - 1);

        let too_deep = nested_lists(MAX_NESTING_DEPTH + 1);
        assert!(matches!(
            encode(&too_deep, true),
            Err(EncodeError::MalformedValue(_))
        ));

        // Constructors and maps count as levels too
        let mut d = Datum::integer(1);
        for i in 0..=MAX_NESTING_DEPTH {
            d = if i % 2 == 0 {
                Datum::constr(0, [d])
            } else {
                Datum::map([(Datum::integer(0), d)])
            };
        }
        assert!(matches!(
            encode(&d, false),
            Err(EncodeError::MalformedValue(_))
        ));
    }

    #[test]
    fn test_encoding_deterministic() {
        let d = Datum::map([
            (Datum::bytes(b"k".to_vec()), Datum::list([Datum::integer(-7)])),
            (Datum::integer(3), Datum::constr(200, [Datum::Integer(pow2(70))])),
        ]);
        assert_eq!(canonical(&d), canonical(&d));
        assert_eq!(non_canonical(&d), non_canonical(&d));
    }

    #[test]
    fn test_output_is_valid_cbor() {
        let d = Datum::constr(
            2,
            [
                Datum::map([(Datum::integer(1), Datum::bytes(vec![1u8, 2, 3]))]),
                Datum::list([Datum::integer(-500), Datum::integer(70000)]),
            ],
        );
        for bytes in [canonical(&d), non_canonical(&d)] {
            let cursor = std::io::Cursor::new(&bytes);
            let result: std::result::Result<Value, _> = ciborium::from_reader(cursor);
            assert!(result.is_ok(), "encoding must be valid CBOR");
        }
    }

    fn minimal_len(n: u64) -> usize {
        match n {
            0..=23 => 1,
            24..=0xff => 2,
            0x100..=0xffff => 3,
            0x1_0000..=0xffff_ffff => 5,
            _ => 9,
        }
    }

    proptest! {
        #[test]
        fn prop_canonical_integers_are_minimal(n in any::<u64>()) {
            prop_assert_eq!(canonical(&Datum::integer(n)).len(), minimal_len(n));
        }

        #[test]
        fn prop_canonical_negatives_are_minimal(n in any::<u64>()) {
            let value = -BigInt::from(n) - BigInt::from(1);
            prop_assert_eq!(canonical(&Datum::Integer(value)).len(), minimal_len(n));
        }

        #[test]
        fn prop_modes_diverge_below_64_bits(n in any::<i64>()) {
            let d = Datum::list([Datum::integer(n)]);
            prop_assert_ne!(canonical(&d), non_canonical(&d));
        }
    }
}
