//! `rand`-backed implementations of [`ScalarSource`]

use log::trace;
use monecc_api::{Error as CoreError, Result as CoreResult, ScalarSource};
use rand::rngs::OsRng;
use rand::{Rng, RngCore};

/// Adapts any [`RngCore`] into a [`ScalarSource`].
///
/// Draws use `rand`'s unbiased range sampling. Pair it with a seeded
/// `ChaCha20Rng` for reproducible runs, or with [`OsRng`] for real entropy.
#[derive(Clone, Debug, Default)]
pub struct RngScalarSource<R> {
    rng: R,
}

impl<R: RngCore> RngScalarSource<R> {
    /// Wrap `rng`
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> ScalarSource for RngScalarSource<R> {
    fn uniform_int(&mut self, low: u64, high: u64) -> CoreResult<u64> {
        if low > high {
            return Err(CoreError::param(
                "ScalarSource::uniform_int",
                format!("empty range [{}, {}]", low, high),
            ));
        }
        trace!("drawing a scalar from [{}, {}]", low, high);
        Ok(self.rng.gen_range(low..=high))
    }
}

/// A scalar source reading from the operating system's generator.
///
/// `OsRng` is a zero-sized handle, so each thread can hold its own source.
pub fn os_scalar_source() -> RngScalarSource<OsRng> {
    RngScalarSource::new(OsRng)
}
