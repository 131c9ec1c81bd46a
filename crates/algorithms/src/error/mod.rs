//! Error handling for field and curve arithmetic

use core::fmt;

use blsarith_api::{Error as CoreError, Result as CoreResult};

/// The error type for arithmetic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
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

    /// Bytes of the right length that are not a canonical encoding
    Encoding {
        /// Type being decoded
        context: &'static str,
        /// Why the bytes were rejected
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding(context: &'static str, reason: &'static str) -> Self {
        Error::Encoding { context, reason }
    }
}

/// Result type for arithmetic primitives
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
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Encoding { context, reason } => {
                write!(f, "Invalid encoding for {}: {}", context, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            #[cfg(feature = "std")]
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into(),
            },
            #[cfg(not(feature = "std"))]
            Error::Parameter { name, .. } => CoreError::InvalidParameter { context: name },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Error::Encoding { context, reason } => CoreError::InvalidEncoding {
                context,
                message: reason.into(),
            },
            #[cfg(not(feature = "std"))]
            Error::Encoding { context, .. } => CoreError::InvalidEncoding { context },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub use blsarith_api::error::ResultExt;

pub mod validate;
