//! Ports Layer
//!
//! Defines the capability the filter depends on:
//! - Driven Ports (outbound) - payload hashing supplied by the caller

pub mod outbound;

pub use outbound::Hasher;
