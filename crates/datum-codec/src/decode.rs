//! Decoding CBOR bytes back into datums.
//!
//! Accepts any valid spelling of a datum: non-minimal heads, indefinite
//! lengths, padded bignums, unsorted maps. Whether the bytes were canonical is
//! a separate question, answered by [`crate::validation`].
//!
//! Items are read header by header, so bignum tags always reach the datum
//! layer with their byte string intact, whatever its length.

use std::fmt;

use ciborium_ll::{simple, Decoder, Header};
use num_bigint::{BigInt, BigUint};

use crate::canonical::tags;
use crate::datum::Datum;
use crate::error::DecodeError;
use crate::options::MAX_NESTING_DEPTH;

type Reader<'a> = Decoder<&'a [u8]>;

/// Upper bound on the buffer used to read one byte string segment.
const SEGMENT_BUFFER: usize = 4096;

/// Decode a single datum from `bytes`, rejecting trailing data.
pub fn decode(bytes: &[u8]) -> Result<Datum, DecodeError> {
    let mut decoder = Decoder::from(bytes);
    let datum = read_datum(&mut decoder, 0)?;

    let consumed = decoder.offset();
    if consumed < bytes.len() {
        return Err(DecodeError::TrailingBytes(bytes.len() - consumed));
    }

    Ok(datum)
}

fn cbor_error<E: fmt::Debug>(e: ciborium_ll::Error<E>) -> DecodeError {
    match e {
        ciborium_ll::Error::Io(e) => DecodeError::Cbor(format!("truncated input: {:?}", e)),
        ciborium_ll::Error::Syntax(offset) => {
            DecodeError::Cbor(format!("syntax error at offset {}", offset))
        }
    }
}

fn pull(dec: &mut Reader<'_>) -> Result<Header, DecodeError> {
    dec.pull().map_err(cbor_error)
}

/// Depth of the children of a container found at `depth`.
fn nested(depth: usize) -> Result<usize, DecodeError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(DecodeError::NestingTooDeep(MAX_NESTING_DEPTH));
    }
    Ok(depth + 1)
}

/// Read one datum sitting inside `depth` enclosing containers.
fn read_datum(dec: &mut Reader<'_>, depth: usize) -> Result<Datum, DecodeError> {
    match pull(dec)? {
        Header::Positive(n) => Ok(Datum::Integer(BigInt::from(n))),
        // CBOR encodes -1 as 0, -2 as 1, etc.
        Header::Negative(n) => Ok(Datum::Integer(-BigInt::from(n) - 1)),
        Header::Bytes(len) => Ok(Datum::ByteString(read_bytes(dec, len)?.into())),
        Header::Array(len) => Ok(Datum::List(read_items(dec, len, nested(depth)?)?)),
        Header::Map(len) => read_map(dec, len, nested(depth)?),
        Header::Tag(tag) => read_tagged(dec, tag, depth),
        Header::Text(_) => Err(DecodeError::UnsupportedItem("text string")),
        Header::Float(_) => Err(DecodeError::UnsupportedItem("float")),
        Header::Simple(simple::FALSE | simple::TRUE) => Err(DecodeError::UnsupportedItem("bool")),
        Header::Simple(simple::NULL) => Err(DecodeError::UnsupportedItem("null")),
        Header::Simple(_) => Err(DecodeError::UnsupportedItem("simple value")),
        Header::Break => Err(DecodeError::Cbor("unexpected break".into())),
    }
}

/// Read the contents of a byte string whose header was just pulled.
fn read_bytes(dec: &mut Reader<'_>, len: Option<usize>) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(len.unwrap_or(0).min(SEGMENT_BUFFER));
    let mut buffer = vec![0u8; len.unwrap_or(SEGMENT_BUFFER).clamp(1, SEGMENT_BUFFER)];
    let mut segments = dec.bytes(len);
    while let Some(mut segment) = segments.pull().map_err(cbor_error)? {
        while let Some(chunk) = segment.pull(&mut buffer).map_err(cbor_error)? {
            out.extend_from_slice(chunk);
        }
    }
    Ok(out)
}

/// Whether another item follows in an array or map of length `len`, having
/// read `read` items so far. Consumes the break of indefinite containers.
fn has_next(dec: &mut Reader<'_>, len: Option<usize>, read: usize) -> Result<bool, DecodeError> {
    match len {
        Some(n) => Ok(read < n),
        None => match pull(dec)? {
            Header::Break => Ok(false),
            header => {
                dec.push(header);
                Ok(true)
            }
        },
    }
}

fn read_items(
    dec: &mut Reader<'_>,
    len: Option<usize>,
    depth: usize,
) -> Result<Vec<Datum>, DecodeError> {
    let mut items = Vec::new();
    while has_next(dec, len, items.len())? {
        items.push(read_datum(dec, depth)?);
    }
    Ok(items)
}

fn read_map(dec: &mut Reader<'_>, len: Option<usize>, depth: usize) -> Result<Datum, DecodeError> {
    let mut pairs = Vec::new();
    while has_next(dec, len, pairs.len())? {
        let key = read_datum(dec, depth)?;
        let value = read_datum(dec, depth)?;
        pairs.push((key, value));
    }
    Ok(Datum::Map(pairs))
}

/// Read a tagged item: bignums and the three constructor forms.
fn read_tagged(dec: &mut Reader<'_>, tag: u64, depth: usize) -> Result<Datum, DecodeError> {
    match tag {
        tags::BIGNUM_POS | tags::BIGNUM_NEG => {
            let Header::Bytes(len) = pull(dec)? else {
                return Err(DecodeError::UnsupportedItem("bignum without byte string"));
            };
            let arg = BigInt::from(BigUint::from_bytes_be(&read_bytes(dec, len)?));
            let n = if tag == tags::BIGNUM_NEG {
                -arg - 1
            } else {
                arg
            };
            Ok(Datum::Integer(n))
        }
        t if (tags::CONSTR_COMPACT..=tags::CONSTR_COMPACT + tags::COMPACT_MAX).contains(&t) => {
            read_constructor(dec, t - tags::CONSTR_COMPACT, nested(depth)?)
        }
        t if (tags::CONSTR_EXTENDED
            ..=tags::CONSTR_EXTENDED + (tags::EXTENDED_MAX - tags::EXTENDED_MIN))
            .contains(&t) =>
        {
            let index = t - tags::CONSTR_EXTENDED + tags::EXTENDED_MIN;
            read_constructor(dec, index, nested(depth)?)
        }
        tags::CONSTR_GENERAL => {
            let depth = nested(depth)?;
            let Header::Array(len) = pull(dec)? else {
                return Err(DecodeError::MalformedConstructor(
                    "expected [tag, fields]".into(),
                ));
            };
            if let Some(n) = len.filter(|n| *n != 2) {
                return Err(DecodeError::MalformedConstructor(format!(
                    "expected 2 elements, got {}",
                    n
                )));
            }
            let index = match pull(dec)? {
                Header::Positive(i) => i,
                Header::Negative(_) => {
                    return Err(DecodeError::MalformedConstructor(
                        "tag out of range".into(),
                    ))
                }
                _ => {
                    return Err(DecodeError::MalformedConstructor(
                        "tag is not an integer".into(),
                    ))
                }
            };
            let datum = read_constructor(dec, index, depth)?;
            if len.is_none() && !matches!(pull(dec)?, Header::Break) {
                return Err(DecodeError::MalformedConstructor(
                    "expected 2 elements".into(),
                ));
            }
            Ok(datum)
        }
        other => Err(DecodeError::UnexpectedTag(other)),
    }
}

/// Read the field array of a constructor; `depth` is the depth of its fields.
fn read_constructor(dec: &mut Reader<'_>, index: u64, depth: usize) -> Result<Datum, DecodeError> {
    let Header::Array(len) = pull(dec)? else {
        return Err(DecodeError::MalformedConstructor(
            "fields are not an array".into(),
        ));
    };
    Ok(Datum::Constructor {
        tag: BigInt::from(index),
        fields: read_items(dec, len, depth)?,
    })
}
