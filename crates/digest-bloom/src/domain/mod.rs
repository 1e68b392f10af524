//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - Growable bit state (big-integer view)
//! - Hash to bit index mapping
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bits;
pub mod bloom_filter;
pub mod config;
pub mod hash_index;

pub use bits::FilterBits;
pub use bloom_filter::{BloomFilter, TestOutcome};
pub use config::{FilterConfig, DEFAULT_MAX_BITS, MAX_BITS_ENV};
pub use hash_index::{bit_index, truncate_hash, INDEX_BYTES};
