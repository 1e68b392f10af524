//! Filter configuration
//!
//! # Example
//!
//! ```
//! use digest_bloom::{BloomFilter, FilterConfig, NoHasher};
//!
//! let config = FilterConfig::default().with_max_bits(1 << 20);
//! let filter = BloomFilter::<NoHasher>::from_config(&config, None);
//! assert_eq!(filter.max_bits(), 1 << 20);
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Capacity used when none (or zero) is given
pub const DEFAULT_MAX_BITS: usize = 100_000_007;

/// Environment variable read by [`FilterConfig::from_env`]
pub const MAX_BITS_ENV: &str = "DIGEST_BLOOM_MAX_BITS";

/// Bloom filter configuration
///
/// `max_bits` is the size of the index space. A larger value lowers the
/// false positive rate at the cost of a larger serialized state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Capacity bound; zero means [`DEFAULT_MAX_BITS`]
    pub max_bits: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_bits: DEFAULT_MAX_BITS,
        }
    }
}

impl FilterConfig {
    pub fn new(max_bits: usize) -> Self {
        Self { max_bits }
    }

    /// Load configuration from the environment
    ///
    /// - `DIGEST_BLOOM_MAX_BITS`: capacity bound (default: 100000007)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let max_bits = match env::var(MAX_BITS_ENV) {
            Ok(raw) => parse_max_bits(&raw),
            Err(_) => DEFAULT_MAX_BITS,
        };

        Self { max_bits }
    }

    /// Builder-style method to set the capacity bound
    pub fn with_max_bits(mut self, max_bits: usize) -> Self {
        self.max_bits = max_bits;
        self
    }

    /// Capacity after substituting the default for zero
    pub fn effective_max_bits(&self) -> usize {
        resolve_max_bits(self.max_bits)
    }
}

pub(crate) fn resolve_max_bits(max_bits: usize) -> usize {
    if max_bits == 0 {
        DEFAULT_MAX_BITS
    } else {
        max_bits
    }
}

fn parse_max_bits(raw: &str) -> usize {
    match raw.trim().replace('_', "").parse::<usize>() {
        Ok(value) => value,
        Err(err) => {
            warn!(
                value = raw,
                error = %err,
                "Invalid {}, using default {}",
                MAX_BITS_ENV,
                DEFAULT_MAX_BITS
            );
            DEFAULT_MAX_BITS
        }
    }
}
