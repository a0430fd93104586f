//! Tunables of the hybrid scheme

use monecc_params::traditional::ecies::{
    DEFAULT_EPHEMERAL_BOUND, DEFAULT_MAX_KEYGEN_ATTEMPTS, DEFAULT_MAX_PRIVATE_SCALAR,
};

use crate::error::{Error, Result};

/// Bounds used when drawing scalars.
///
/// Private scalars come from `[1, max_private_scalar]`, ephemeral scalars
/// from `[1, ephemeral_bound]`. Every draw that would produce the identity
/// is repeated, at most `max_keygen_attempts` times in total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EciesConfig {
    /// Inclusive upper bound for private scalars
    pub max_private_scalar: u64,
    /// Inclusive upper bound for ephemeral scalars
    pub ephemeral_bound: u64,
    /// Cap on draws per key pair or per encryption
    pub max_keygen_attempts: u32,
}

impl Default for EciesConfig {
    fn default() -> Self {
        Self {
            max_private_scalar: DEFAULT_MAX_PRIVATE_SCALAR,
            ephemeral_bound: DEFAULT_EPHEMERAL_BOUND,
            max_keygen_attempts: DEFAULT_MAX_KEYGEN_ATTEMPTS,
        }
    }
}

impl EciesConfig {
    /// Set the private scalar bound
    pub fn with_max_private_scalar(mut self, bound: u64) -> Self {
        self.max_private_scalar = bound;
        self
    }

    /// Set the ephemeral scalar bound
    pub fn with_ephemeral_bound(mut self, bound: u64) -> Self {
        self.ephemeral_bound = bound;
        self
    }

    /// Set the draw cap
    pub fn with_max_keygen_attempts(mut self, attempts: u32) -> Self {
        self.max_keygen_attempts = attempts;
        self
    }

    /// Check that every bound admits at least one draw
    pub fn validate(&self) -> Result<()> {
        if self.max_private_scalar == 0 {
            return Err(Error::InvalidConfig("max_private_scalar must be at least 1"));
        }
        if self.ephemeral_bound == 0 {
            return Err(Error::InvalidConfig("ephemeral_bound must be at least 1"));
        }
        if self.max_keygen_attempts == 0 {
            return Err(Error::InvalidConfig("max_keygen_attempts must be at least 1"));
        }
        Ok(())
    }
}
