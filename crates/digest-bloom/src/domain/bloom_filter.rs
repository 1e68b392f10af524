//! Core Bloom filter implementation
//!
//! One bit per supplied hash byte-string. Payloads are turned into hash
//! byte-strings by a caller-supplied [`Hasher`]; callers that already hold
//! canonical digests use the `*_hash` entry points directly.
//!
//! INVARIANTS:
//! - Every set bit lies in `[0, max_bits)`.
//! - No false negatives: once a hash is added, `test_hash` on it returns true.
//! - Bits are never cleared; only a state load replaces them.

use tracing::{debug, trace, warn};

use super::bits::FilterBits;
use super::config::{resolve_max_bits, FilterConfig};
use super::hash_index::bit_index;
use crate::adapters::NoHasher;
use crate::error::FilterError;
use crate::ports::Hasher;

/// Bloom filter for probabilistic membership testing
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
///
/// Not synchronized: wrap in a lock (or shard across several filters) for
/// concurrent mutation.
#[derive(Clone, Debug)]
pub struct BloomFilter<H = NoHasher> {
    /// Bit array storing the filter state
    bits: FilterBits,
    /// Size of the index space
    max_bits: usize,
    /// Payload hasher, absent for hash-only use
    hasher: Option<H>,
}

/// Result of testing a payload
///
/// On a hasher failure `present` is `true` and `error` carries the cause, so
/// a caller that ignores the error still never sees a false negative.
#[must_use = "check `error` before trusting `present`"]
#[derive(Debug)]
pub struct TestOutcome {
    /// Whether the payload is possibly present
    pub present: bool,
    /// Why the answer could not be computed, if it could not
    pub error: Option<FilterError>,
}

impl TestOutcome {
    fn found(present: bool) -> Self {
        Self {
            present,
            error: None,
        }
    }

    fn failed(error: FilterError) -> Self {
        Self {
            present: true,
            error: Some(error),
        }
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn error(&self) -> Option<&FilterError> {
        self.error.as_ref()
    }

    /// Split into the answer and the error
    pub fn into_parts(self) -> (bool, Option<FilterError>) {
        (self.present, self.error)
    }

    /// Convert to a `Result`, dropping the conservative answer on error
    pub fn into_result(self) -> Result<bool, FilterError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.present),
        }
    }
}

impl BloomFilter<NoHasher> {
    /// Create an empty filter that only accepts pre-computed hashes
    pub fn without_hasher(max_bits: usize) -> Self {
        Self::new(max_bits, None)
    }
}

impl<H> BloomFilter<H> {
    /// Create an empty filter
    ///
    /// # Arguments
    /// * `max_bits` - Size of the index space; zero selects the default
    /// * `hasher` - Payload hasher, or `None` for hash-only use
    pub fn new(max_bits: usize, hasher: Option<H>) -> Self {
        let max_bits = resolve_max_bits(max_bits);
        debug!(
            max_bits = max_bits,
            has_hasher = hasher.is_some(),
            "Created Bloom filter"
        );

        Self {
            bits: FilterBits::new(),
            max_bits,
            hasher,
        }
    }

    /// Create a filter and load its state from a big-endian byte buffer
    pub fn new_from_bytes(max_bits: usize, hasher: Option<H>, bytes: &[u8]) -> Self {
        let mut filter = Self::new(max_bits, hasher);
        filter.set_bytes(bytes);
        filter
    }

    /// Create a filter and load its state from an integer value
    ///
    /// `None` is treated as zero.
    pub fn new_from_int(max_bits: usize, hasher: Option<H>, value: Option<FilterBits>) -> Self {
        let mut filter = Self::new(max_bits, hasher);
        filter.set_int(value);
        filter
    }

    /// Create an empty filter from configuration
    pub fn from_config(config: &FilterConfig, hasher: Option<H>) -> Self {
        Self::new(config.max_bits, hasher)
    }

    /// Set the bit for a single pre-computed hash
    pub fn add_hash(&mut self, hash: &[u8]) {
        let index = bit_index(hash, self.max_bits);
        trace!(bit_index = index, "Setting filter bit");
        self.bits.set_bit(index);
    }

    /// Set one bit per pre-computed hash
    pub fn add_hashes<I>(&mut self, hashes: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for hash in hashes {
            self.add_hash(hash.as_ref());
        }
    }

    /// Test the bit for a single pre-computed hash
    ///
    /// Returns:
    /// - `true` if the hash might have been added (could be false positive)
    /// - `false` if it definitely was not
    pub fn test_hash(&self, hash: &[u8]) -> bool {
        self.bits.bit(bit_index(hash, self.max_bits))
    }

    /// Test that every given hash has its bit set
    ///
    /// Stops at the first unset bit. An empty set of hashes tests true.
    pub fn test_hashes<I>(&self, hashes: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        hashes
            .into_iter()
            .all(|hash| self.test_hash(hash.as_ref()))
    }

    /// Export the state as a minimal big-endian byte buffer
    ///
    /// An empty filter exports an empty buffer.
    pub fn bytes(&self) -> Vec<u8> {
        self.bits.to_be_bytes()
    }

    /// Replace the state with a big-endian byte buffer
    ///
    /// An empty buffer is a no-op: existing state is kept, not cleared.
    pub fn set_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        self.bits = FilterBits::from_be_bytes(bytes);
        debug!(
            bytes_loaded = bytes.len(),
            bits_set = self.bits.count_ones(),
            "Loaded filter state from bytes"
        );
    }

    /// Replace the state with an integer value
    ///
    /// `None` resets the filter to zero.
    pub fn set_int(&mut self, value: Option<FilterBits>) {
        self.bits = value.unwrap_or_default();
        debug!(
            byte_len = self.bits.byte_len(),
            bits_set = self.bits.count_ones(),
            "Loaded filter state from integer"
        );
    }

    /// Size of the index space
    pub fn max_bits(&self) -> usize {
        self.max_bits
    }

    /// Current state viewed as an integer
    pub fn bits(&self) -> &FilterBits {
        &self.bits
    }

    /// Number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn hasher(&self) -> Option<&H> {
        self.hasher.as_ref()
    }

    /// Add a payload using the configured hasher
    ///
    /// # Errors
    /// - [`FilterError::HasherNotSet`] if no hasher is configured
    /// - [`FilterError::Hashing`] if the hasher fails
    /// - [`FilterError::EmptyHashes`] if the hasher returns no hashes
    ///
    /// The state is unchanged on error.
    pub fn add<P>(&mut self, payload: &P) -> Result<(), FilterError>
    where
        P: ?Sized,
        H: Hasher<P>,
    {
        match self.hash(payload)?.as_slice() {
            [single] => self.add_hash(single),
            many => self.add_hashes(many),
        }

        Ok(())
    }

    /// Test a payload using the configured hasher
    ///
    /// Any hasher problem yields `present == true` together with the error.
    pub fn test<P>(&self, payload: &P) -> TestOutcome
    where
        P: ?Sized,
        H: Hasher<P>,
    {
        let hashes = match self.hash(payload) {
            Ok(hashes) => hashes,
            Err(err) => return TestOutcome::failed(err),
        };

        match hashes.as_slice() {
            [single] => TestOutcome::found(self.test_hash(single)),
            many => TestOutcome::found(self.test_hashes(many)),
        }
    }

    fn hash<P>(&self, payload: &P) -> Result<Vec<Vec<u8>>, FilterError>
    where
        P: ?Sized,
        H: Hasher<P>,
    {
        let hasher = self.hasher.as_ref().ok_or(FilterError::HasherNotSet)?;

        let hashes = hasher.build_hashes(payload).map_err(|err| {
            warn!(error = %err, "Hasher failed for payload");
            FilterError::Hashing(err)
        })?;

        if hashes.is_empty() {
            warn!("Hasher returned no hashes for payload");
            return Err(FilterError::EmptyHashes);
        }

        Ok(hashes)
    }
}
