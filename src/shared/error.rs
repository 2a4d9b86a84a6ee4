//! Codec Error Types
//!
//! Reasons a wire payload was not accepted as a structured error.
//!
//! A rejected payload is not a failure of the codec itself: every variant
//! can be turned back into a best-effort [`ErrorValue`] with
//! [`CodecError::into_value`], which is how callers degrade to "unclassified,
//! treat as internal".
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

use crate::shared::value::ErrorValue;

/// Errors produced while decoding a wire payload
#[derive(Debug, Error)]
pub enum CodecError {
    /// Not JSON, or JSON of the wrong shape
    #[error("malformed error payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A code outside the kind table
    #[error("unknown error code {code}")]
    UnknownCode {
        /// The rejected code
        code: i64,
        /// Payload decoded with an internal kind
        value: ErrorValue,
    },

    /// Code absent or zero
    #[error("error payload carries no classification")]
    Unclassified(ErrorValue),

    /// Recognized code but no message
    #[error("error payload has an empty message")]
    EmptyMessage(ErrorValue),
}

impl CodecError {
    /// Create a new unknown-code error
    pub fn unknown_code(code: i64, value: ErrorValue) -> Self {
        Self::UnknownCode { code, value }
    }

    /// Best-effort value for a rejected payload
    ///
    /// Malformed input yields the zero value (internal, empty message).
    pub fn into_value(self) -> ErrorValue {
        match self {
            Self::Malformed(_) => ErrorValue::default(),
            Self::UnknownCode { value, .. } => value,
            Self::Unclassified(value) | Self::EmptyMessage(value) => value,
        }
    }
}
