//! Closure adapter for the [`Hasher`] port
//!
//! Lets callers plug an ad-hoc function in as a hasher without declaring a
//! named type, and provides [`NoHasher`] for filters that only ever see
//! pre-computed hashes.

use std::fmt;

use crate::error::HashError;
use crate::ports::Hasher;

/// Wraps a function as a [`Hasher`]
#[derive(Clone, Copy)]
pub struct FnHasher<F> {
    build_hashes: F,
}

impl<F> FnHasher<F> {
    pub fn new(build_hashes: F) -> Self {
        Self { build_hashes }
    }
}

/// Build a [`Hasher`] from a function
///
/// ```
/// use digest_bloom::{hasher_fn, BloomFilter};
///
/// let hasher = hasher_fn(|payload: &str| {
///     Ok::<_, std::convert::Infallible>(vec![payload.as_bytes().to_vec()])
/// });
/// let mut filter = BloomFilter::new(1024, Some(hasher));
/// filter.add("blob").unwrap();
/// assert!(filter.test("blob").is_present());
/// ```
pub fn hasher_fn<F>(build_hashes: F) -> FnHasher<F> {
    FnHasher::new(build_hashes)
}

impl<P, F, E> Hasher<P> for FnHasher<F>
where
    P: ?Sized,
    F: Fn(&P) -> Result<Vec<Vec<u8>>, E>,
    E: Into<HashError>,
{
    fn build_hashes(&self, payload: &P) -> Result<Vec<Vec<u8>>, HashError> {
        (self.build_hashes)(payload).map_err(Into::into)
    }
}

impl<F> fmt::Debug for FnHasher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHasher").finish_non_exhaustive()
    }
}

/// Placeholder hasher type for filters used only with pre-computed hashes
///
/// Uninhabited: a `BloomFilter<NoHasher>` can never hold a hasher, so its
/// payload entry points always report
/// [`FilterError::HasherNotSet`](crate::FilterError::HasherNotSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoHasher {}

impl<P: ?Sized> Hasher<P> for NoHasher {
    fn build_hashes(&self, _payload: &P) -> Result<Vec<Vec<u8>>, HashError> {
        match *self {}
    }
}
