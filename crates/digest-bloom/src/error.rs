//! Error types for the digest Bloom filter

use thiserror::Error;

/// Error produced by a [`Hasher`](crate::ports::Hasher) implementation.
///
/// Boxed so that any hasher error type converts with `?`.
pub type HashError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by the payload-based entry points (`add` / `test`)
///
/// The pre-computed hash entry points and the serialization entry points
/// never fail.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A payload was passed but the filter has no hasher configured.
    #[error("hasher not set")]
    HasherNotSet,

    /// The hasher reported a failure for the payload.
    #[error("hasher failed: {0}")]
    Hashing(#[source] HashError),

    /// The hasher succeeded but produced no hash byte-strings.
    #[error("found empty result returned by hasher")]
    EmptyHashes,
}

impl FilterError {
    /// Wrap an arbitrary hasher error
    pub fn hashing<E>(err: E) -> Self
    where
        E: Into<HashError>,
    {
        Self::Hashing(err.into())
    }
}
