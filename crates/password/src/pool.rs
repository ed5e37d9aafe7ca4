//! Buffered pool of cryptographically secure random bytes.
use crate::{csprng, Result};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use std::fmt;
use zeroize::Zeroize;

/// Number of random bytes requested from the generator at a time.
pub const POOL_SIZE: usize = 128;

/// Supplies the random bytes consumed by the password builder.
pub trait ByteSource {
    /// Next random byte.
    fn next_byte(&mut self) -> Result<u8>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> Result<u8> {
        (**self).next_byte()
    }
}

/// Fixed size pool of random bytes.
///
/// The entire pool is refilled from the generator on the first read and
/// then once every `N` reads, so each byte is handed out exactly once.
/// A failed refill is returned as
/// [`Error::RandomSourceUnavailable`](crate::Error::RandomSourceUnavailable)
/// and never falls back to another generator.
///
/// Reads require exclusive access; callers sharing a pool between
/// threads must wrap it in a mutex.
pub struct RandomPool<R = OsRng, const N: usize = POOL_SIZE> {
    rng: R,
    pool: [u8; N],
    cursor: usize,
}

impl RandomPool {
    /// Create a pool backed by the operating system random source.
    pub fn new() -> Self {
        Self::from_rng(csprng())
    }
}

impl Default for RandomPool {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng, const N: usize> RandomPool<R, N> {
    const NON_EMPTY: () = assert!(N > 0, "random pool must not be empty");

    /// Create a pool backed by the given generator.
    pub fn from_rng(rng: R) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self {
            rng,
            pool: [0; N],
            cursor: 0,
        }
    }

    /// Number of bytes drawn from the generator on each refill.
    pub fn capacity(&self) -> usize {
        N
    }

    fn refill(&mut self) -> Result<()> {
        self.rng.try_fill_bytes(&mut self.pool)?;
        tracing::trace!(capacity = N, "random_pool::refill");
        Ok(())
    }
}

impl<R: RngCore + CryptoRng, const N: usize> ByteSource for RandomPool<R, N> {
    fn next_byte(&mut self) -> Result<u8> {
        if self.cursor == 0 {
            self.refill()?;
        }
        let byte = self.pool[self.cursor];
        self.cursor = (self.cursor + 1) % N;
        Ok(byte)
    }
}

impl<R, const N: usize> fmt::Debug for RandomPool<R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomPool")
            .field("capacity", &N)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl<R, const N: usize> Drop for RandomPool<R, N> {
    fn drop(&mut self) {
        self.pool.zeroize();
    }
}
