//! Validation utilities shared by every layer

use super::types::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that `low <= value <= high`
#[inline(always)]
pub fn range(context: &'static str, value: u64, low: u64, high: u64) -> Result<()> {
    if value < low || value > high {
        return Err(Error::param(
            context,
            format!("{} is outside [{}, {}]", value, low, high),
        ));
    }
    Ok(())
}
