//! Error handling for key and encryption operations.

use core::fmt;

use monecc_algorithms::error::Error as PrimitiveError;
use monecc_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure inside a primitive (field, group, KDF, cipher)
    Primitive(PrimitiveError),
    /// Failure reported through the API layer (entropy, cipher trait)
    Api(CoreError),
    /// Key agreement produced the point at infinity
    InvalidSharedSecret(&'static str),
    /// The ciphertext was rejected or did not decode to the expected form
    DecryptionFailed(&'static str),
    /// A bounded redraw loop gave up
    ExhaustedRetries {
        /// The loop that gave up
        context: &'static str,
        /// Number of draws made
        attempts: u32,
    },
    /// A public key that cannot be used (identity or off the curve)
    InvalidPublicKey(&'static str),
    /// Malformed key or envelope text
    InvalidKeyEncoding {
        /// What was being decoded
        context: &'static str,
        /// What was wrong with it
        message: String,
    },
    /// Unusable configuration
    InvalidConfig(&'static str),
}

impl Error {
    pub(crate) fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidKeyEncoding {
            context,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Api(e) => write!(f, "PKE API error: {}", e),
            Error::InvalidSharedSecret(context) => {
                write!(f, "{}: shared secret is the point at infinity", context)
            }
            Error::DecryptionFailed(reason) => write!(f, "PKE decryption failed: {}", reason),
            Error::ExhaustedRetries { context, attempts } => {
                write!(f, "{}: gave up after {} attempts", context, attempts)
            }
            Error::InvalidPublicKey(reason) => write!(f, "Invalid public key: {}", reason),
            Error::InvalidKeyEncoding { context, message } => {
                write!(f, "Invalid key encoding in {}: {}", context, message)
            }
            Error::InvalidConfig(reason) => write!(f, "Invalid ECIES configuration: {}", reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::InvalidSharedSecret(context) => CoreError::InvalidSharedSecret { context },
            Error::DecryptionFailed(reason) => CoreError::DecryptionFailed {
                context: "ECIES decryption",
                message: reason.to_string(),
            },
            Error::ExhaustedRetries { context, attempts } => {
                CoreError::ExhaustedRetries { context, attempts }
            }
            Error::InvalidPublicKey(reason) => CoreError::InvalidPoint {
                context: "ECIES public key",
                message: reason.to_string(),
            },
            Error::InvalidKeyEncoding { context, message } => {
                CoreError::InvalidKeyEncoding { context, message }
            }
            Error::InvalidConfig(reason) => CoreError::InvalidParameter {
                context: "EciesConfig",
                message: reason.to_string(),
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_keeps_kind() {
        let core: CoreError = Error::InvalidSharedSecret("ECIES decrypt").into();
        assert_eq!(
            core,
            CoreError::InvalidSharedSecret {
                context: "ECIES decrypt"
            }
        );

        let core: CoreError = Error::ExhaustedRetries {
            context: "key generation",
            attempts: 64,
        }
        .into();
        assert!(matches!(core, CoreError::ExhaustedRetries { attempts: 64, .. }));

        let core: CoreError = Error::DecryptionFailed("bad tag").into();
        assert!(matches!(core, CoreError::DecryptionFailed { .. }));

        let core: CoreError = Error::encoding("armored key", "missing header").into();
        assert_eq!(core, CoreError::encoding("armored key", "missing header"));
    }

    #[test]
    fn test_primitive_errors_pass_through() {
        let prim = PrimitiveError::DivisionByZero {
            operation: "field inverse",
        };
        let core: CoreError = Error::from(prim).into();
        assert_eq!(
            core,
            CoreError::DivisionByZero {
                context: "field inverse"
            }
        );

        let api = CoreError::param("ScalarSource::uniform_int", "empty range");
        let core: CoreError = Error::from(api.clone()).into();
        assert_eq!(core, api);
    }

    #[test]
    fn test_display() {
        let err = Error::ExhaustedRetries {
            context: "ephemeral scalar",
            attempts: 3,
        };
        assert_eq!(err.to_string(), "ephemeral scalar: gave up after 3 attempts");
    }
}
