//! Error type definitions for elliptic-curve and encryption operations

use thiserror::Error as ThisError;

/// Primary error type for monecc operations
///
/// Every variant carries a static `context` naming the operation that
/// failed. Lower layers keep their own error enums and convert into this
/// one at their public boundary.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A field inverse was requested for a multiple of the modulus
    #[error("{context}: division by zero in the prime field")]
    DivisionByZero { context: &'static str },

    /// Key agreement produced the point at infinity
    #[error("{context}: shared secret is the point at infinity")]
    InvalidSharedSecret { context: &'static str },

    /// The symmetric layer rejected the ciphertext (wrong key, tampered data)
    #[error("Decryption failed: {context}: {message}")]
    DecryptionFailed {
        context: &'static str,
        message: String,
    },

    /// A key, point or message envelope could not be decoded
    #[error("Invalid key encoding: {context}: {message}")]
    InvalidKeyEncoding {
        context: &'static str,
        message: String,
    },

    /// A bounded retry loop gave up
    #[error("{context}: gave up after {attempts} attempts")]
    ExhaustedRetries {
        context: &'static str,
        attempts: u32,
    },

    /// A point that is not on the configured curve
    #[error("Invalid point: {context}: {message}")]
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Random generation error
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Reading or writing a key file failed
    #[error("{context}: {message}")]
    Io {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for monecc operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::InvalidSharedSecret { .. } => Self::InvalidSharedSecret { context },
            Self::DecryptionFailed { message, .. } => Self::DecryptionFailed { context, message },
            Self::InvalidKeyEncoding { message, .. } => {
                Self::InvalidKeyEncoding { context, message }
            }
            Self::ExhaustedRetries { attempts, .. } => Self::ExhaustedRetries { context, attempts },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Io { message, .. } => Self::Io { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// The static context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::DivisionByZero { context }
            | Self::InvalidSharedSecret { context }
            | Self::DecryptionFailed { context, .. }
            | Self::InvalidKeyEncoding { context, .. }
            | Self::ExhaustedRetries { context, .. }
            | Self::InvalidPoint { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Io { context, .. }
            | Self::Other { context, .. } => context,
        }
    }

    /// Shorthand to create an `InvalidKeyEncoding` error
    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKeyEncoding {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_keeps_payload() {
        let err = Error::ExhaustedRetries {
            context: "inner",
            attempts: 7,
        }
        .with_context("outer");
        assert_eq!(
            err,
            Error::ExhaustedRetries {
                context: "outer",
                attempts: 7
            }
        );
        assert_eq!(err.context(), "outer");
    }

    #[test]
    fn test_display_mentions_context() {
        let err = Error::InvalidSharedSecret { context: "ECIES" };
        assert_eq!(
            err.to_string(),
            "ECIES: shared secret is the point at infinity"
        );

        let err = Error::encoding("public key", "missing header");
        assert_eq!(
            err.to_string(),
            "Invalid key encoding: public key: missing header"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io { .. }));
    }
}
