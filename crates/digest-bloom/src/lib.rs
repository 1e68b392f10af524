//! # Digest Bloom
//!
//! Probabilistic set membership over externally supplied content hashes.
//! Used as a cheap pre-filter in front of an exact lookup, e.g. "has this
//! content-addressed blob already been stored?".
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `BloomFilter`: One bit per hash byte-string
//!   - `FilterBits`: Growable bit state with a big-endian integer encoding
//!   - `bit_index`: Hash byte-string to bit position mapping
//!   - `FilterConfig`: Capacity configuration
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `Hasher`: Driven port turning payloads into hash byte-strings
//!
//! - **Adapters Layer** (`adapters/`): Ready-made hashers
//!   - `FnHasher`: Wraps a closure as a `Hasher`
//!   - `NoHasher`: Placeholder for hash-only filters
//!
//! ## Invariants
//!
//! - **No false negatives**: if a hash was added, `test_hash` MUST return true
//! - **Bounded indices**: every set bit lies in `[0, max_bits)`
//! - **Portable state**: `bytes()` is the minimal big-endian encoding of the
//!   bit array; any filter with the same `max_bits` and hash scheme can load it
//!
//! ## Usage Example
//!
//! ```
//! use digest_bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::without_hasher(1 << 16);
//! let digest = [0x9f, 0x86, 0xd0, 0x81, 0x88, 0x4c, 0x7d, 0x65];
//!
//! filter.add_hash(&digest);
//! assert!(filter.test_hash(&digest));
//!
//! // Persist and restore
//! let state = filter.bytes();
//! let mut restored = BloomFilter::without_hasher(1 << 16);
//! restored.set_bytes(&state);
//! assert!(restored.test_hash(&digest));
//! ```
//!
//! ## Concurrency
//!
//! A filter is plain owned data. Concurrent readers are fine; any mutation
//! needs external synchronization (e.g. `RwLock<BloomFilter<_>>`) or
//! sharding across several filters.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use adapters::{hasher_fn, FnHasher, NoHasher};
pub use domain::{
    bit_index, truncate_hash, BloomFilter, FilterBits, FilterConfig, TestOutcome,
    DEFAULT_MAX_BITS,
};
pub use error::{FilterError, HashError};
pub use ports::Hasher;
