//! Entropy capability used for private and ephemeral scalars.

use crate::error::Result;

/// Source of uniformly distributed integers.
///
/// Implementations must be uniform over the closed interval `[low, high]`.
/// The core never asks for cryptographic quality, but any stronger
/// generator can be plugged in without touching it.
pub trait ScalarSource {
    /// Draws an integer uniformly from `[low, high]` (both inclusive).
    ///
    /// Fails with `InvalidParameter` when `low > high`.
    fn uniform_int(&mut self, low: u64, high: u64) -> Result<u64>;
}

impl<S: ScalarSource + ?Sized> ScalarSource for &mut S {
    fn uniform_int(&mut self, low: u64, high: u64) -> Result<u64> {
        (**self).uniform_int(low, high)
    }
}
