//! Outbound Ports (Driven Ports)
//!
//! The filter never hashes payloads itself. It asks a caller-supplied
//! [`Hasher`] for one or more hash byte-strings and sets one bit per string.

use std::sync::Arc;

use crate::error::HashError;

/// Hashing capability (Driven Port)
///
/// Turns a payload into one or more hash byte-strings. Byte-strings may be
/// of any length; the filter normalizes each one independently. Returning
/// an empty vector is a contract violation and is reported by the filter as
/// [`FilterError::EmptyHashes`](crate::FilterError::EmptyHashes).
pub trait Hasher<P: ?Sized> {
    /// Build the hash byte-strings for `payload`
    fn build_hashes(&self, payload: &P) -> Result<Vec<Vec<u8>>, HashError>;
}

impl<P: ?Sized, H: Hasher<P> + ?Sized> Hasher<P> for &H {
    fn build_hashes(&self, payload: &P) -> Result<Vec<Vec<u8>>, HashError> {
        (**self).build_hashes(payload)
    }
}

impl<P: ?Sized, H: Hasher<P> + ?Sized> Hasher<P> for Box<H> {
    fn build_hashes(&self, payload: &P) -> Result<Vec<Vec<u8>>, HashError> {
        (**self).build_hashes(payload)
    }
}

impl<P: ?Sized, H: Hasher<P> + ?Sized> Hasher<P> for Arc<H> {
    fn build_hashes(&self, payload: &P) -> Result<Vec<Vec<u8>>, HashError> {
        (**self).build_hashes(payload)
    }
}
