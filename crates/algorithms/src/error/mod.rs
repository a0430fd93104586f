//! Error handling for monecc primitives

use std::borrow::Cow;
use std::fmt;

use monecc_api::{Error as CoreError, Result as CoreResult};

/// The error type for primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Inverse of zero requested in a prime field
    DivisionByZero {
        /// Operation that needed the inverse
        operation: &'static str,
    },

    /// A point failed the curve equation
    NotOnCurve {
        /// Where the point was checked
        context: &'static str,
        /// x-coordinate of the rejected point
        x: u64,
        /// y-coordinate of the rejected point
        y: u64,
    },

    /// Key derivation was handed the point at infinity
    InvalidSharedSecret {
        /// Where the identity was detected
        context: &'static str,
    },

    /// Padding or tag check failed while decrypting
    Decryption {
        /// Algorithm that rejected the input
        algorithm: &'static str,
        /// What was wrong
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::DivisionByZero { operation } => {
                write!(f, "Division by zero in {}", operation)
            }
            Error::NotOnCurve { context, x, y } => {
                write!(f, "{}: ({}, {}) is not on the curve", context, x, y)
            }
            Error::InvalidSharedSecret { context } => {
                write!(f, "{}: shared secret is the point at infinity", context)
            }
            Error::Decryption { algorithm, details } => {
                write!(f, "{} decryption failed: {}", algorithm, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "primitive parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::DivisionByZero { operation } => CoreError::DivisionByZero { context: operation },
            Error::NotOnCurve { context, x, y } => CoreError::InvalidPoint {
                context,
                message: format!("({}, {}) does not satisfy the curve equation", x, y),
            },
            Error::InvalidSharedSecret { context } => CoreError::InvalidSharedSecret { context },
            Error::Decryption { algorithm, details } => CoreError::DecryptionFailed {
                context: algorithm,
                message: details.to_string(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "primitives",
                message: msg.to_string(),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;
