//! Encoding options: which of the valid CBOR spellings the encoder picks.
//!
//! There is exactly one canonical spelling of a datum. Everything else the
//! encoder can emit is a non-canonical spelling of the same value, used to
//! check that consumers insist on the canonical one.

/// Largest bignum argument accepted by default, in bytes.
///
/// Matches the 64-byte chunk size Plutus uses for byte strings.
pub const DEFAULT_MAX_INTEGER_BYTES: usize = 64;

/// Deepest chain of nested lists, maps, and constructors the encoder emits
/// and the decoder accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Width rule for CBOR item heads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    /// Shortest head able to carry the argument.
    #[default]
    Minimal,
    /// One size class wider than minimal (8-byte arguments stay 8 bytes).
    /// Bignum arguments gain one leading zero byte instead.
    Widened,
}

/// Configuration for the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Head width for integers and constructor tags in the extended form.
    pub integer_width: Width,
    /// Head width for byte string, list, and map lengths.
    pub length_width: Width,
    /// Emit non-empty lists (and constructor fields) as indefinite-length
    /// arrays.
    pub indefinite_lists: bool,
    /// Sort map pairs by encoded key bytes.
    pub sort_map_keys: bool,
    /// Ceiling on bignum argument size. `None` means unbounded.
    pub max_integer_bytes: Option<usize>,
}

impl EncodeOptions {
    /// The canonical encoding: minimal heads, definite lengths, sorted maps.
    pub fn canonical() -> Self {
        Self {
            integer_width: Width::Minimal,
            length_width: Width::Minimal,
            indefinite_lists: false,
            sort_map_keys: true,
            max_integer_bytes: Some(DEFAULT_MAX_INTEGER_BYTES),
        }
    }

    /// The default non-canonical encoding.
    ///
    /// Integers use widened heads, non-empty lists are indefinite-length,
    /// and map pairs keep caller order. Lengths stay minimal.
    pub fn non_canonical() -> Self {
        Self {
            integer_width: Width::Widened,
            length_width: Width::Minimal,
            indefinite_lists: true,
            sort_map_keys: false,
            max_integer_bytes: Some(DEFAULT_MAX_INTEGER_BYTES),
        }
    }

    /// Options for the boolean mode flag of [`crate::encode`].
    pub fn for_mode(canonical: bool) -> Self {
        if canonical {
            Self::canonical()
        } else {
            Self::non_canonical()
        }
    }

    /// Whether these options produce the canonical encoding.
    pub fn is_canonical(&self) -> bool {
        self.integer_width == Width::Minimal
            && self.length_width == Width::Minimal
            && !self.indefinite_lists
            && self.sort_map_keys
    }

    /// Replace the bignum ceiling.
    pub fn with_max_integer_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_integer_bytes = limit;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(EncodeOptions::default(), EncodeOptions::canonical());
        assert!(EncodeOptions::default().is_canonical());
    }

    #[test]
    fn test_for_mode() {
        assert!(EncodeOptions::for_mode(true).is_canonical());
        assert!(!EncodeOptions::for_mode(false).is_canonical());
    }

    #[test]
    fn test_ceiling_does_not_affect_canonicality() {
        let opts = EncodeOptions::canonical().with_max_integer_bytes(None);
        assert!(opts.is_canonical());
        assert_eq!(opts.max_integer_bytes, None);
    }
}
