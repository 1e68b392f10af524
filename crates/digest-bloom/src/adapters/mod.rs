//! Adapters Layer
//!
//! Ready-made implementations of the [`Hasher`](crate::ports::Hasher) port.

pub mod fn_hasher;

pub use fn_hasher::{hasher_fn, FnHasher, NoHasher};
