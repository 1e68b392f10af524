//! Growable bit vector backing the filter state
//!
//! `FilterBits` behaves like an arbitrary-precision unsigned integer whose
//! binary digits are the filter bits: bit `i` of the integer is filter bit `i`.
//! Storage only grows as far as the highest set bit, so a filter with a large
//! capacity but few high bits set stays small.
//!
//! INVARIANTS:
//! - The vector length is exactly `highest set bit + 1` (zero when empty).
//! - Bits are never cleared except by replacing the whole state.

use bitvec::prelude::*;
use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Bit state of a Bloom filter, viewed as an unsigned big integer
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FilterBits {
    /// Byte `k` of the raw storage holds integer bits `8k..8k+7`.
    bits: BitVec<u8, Lsb0>,
}

impl FilterBits {
    /// Create an all-zero state
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a big-endian unsigned integer
    ///
    /// Leading zero bytes are accepted and ignored.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let raw: Vec<u8> = bytes.iter().rev().copied().collect();
        let mut state = Self {
            bits: BitVec::from_vec(raw),
        };
        state.normalize();
        state
    }

    /// Minimal big-endian encoding (no leading zero bytes)
    ///
    /// An all-zero state encodes as an empty buffer.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = self.bits.as_raw_slice().to_vec();
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        bytes.reverse();
        bytes
    }

    /// Whether bit `index` is set
    pub fn bit(&self, index: usize) -> bool {
        self.bits.get(index).map_or(false, |bit| *bit)
    }

    /// Set bit `index`, growing the storage if needed
    pub fn set_bit(&mut self, index: usize) {
        if index >= self.bits.len() {
            self.bits.resize(index + 1, false);
        }
        self.bits.set(index, true);
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Position of the highest set bit plus one; zero for an empty state
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Length of the minimal big-endian encoding
    pub fn byte_len(&self) -> usize {
        (self.bits.len() + 7) / 8
    }

    pub fn is_zero(&self) -> bool {
        self.bits.is_empty()
    }

    /// Iterate over the indices of set bits, lowest first
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    fn normalize(&mut self) {
        match self.bits.last_one() {
            Some(highest) => self.bits.truncate(highest + 1),
            None => self.bits.clear(),
        }
        self.bits.set_uninitialized(false);
    }
}

impl From<u64> for FilterBits {
    fn from(value: u64) -> Self {
        Self::from_be_bytes(&value.to_be_bytes())
    }
}

impl From<u128> for FilterBits {
    fn from(value: u128) -> Self {
        Self::from_be_bytes(&value.to_be_bytes())
    }
}

impl From<U256> for FilterBits {
    fn from(value: U256) -> Self {
        let mut buf = [0u8; 32];
        value.to_big_endian(&mut buf);
        Self::from_be_bytes(&buf)
    }
}

impl From<&[u8]> for FilterBits {
    fn from(bytes: &[u8]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

/// Serialized as the minimal big-endian byte string, same as `to_be_bytes`
impl Serialize for FilterBits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_be_bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FilterBits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Ok(Self::from_be_bytes(&bytes))
    }
}
