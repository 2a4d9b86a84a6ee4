//! Shared Module
//!
//! This module contains the transport-agnostic core of the codec: error
//! kinds, error values, the JSON wire codec and the classification of
//! opaque errors. Nothing here depends on an HTTP framework.
//!
//! # Overview
//!
//! - `kind` - the closed `ErrorKind` enumeration and its code/status tables
//! - `detail` - name/value facts attached to errors
//! - `value` - the `ErrorValue` entity and its constructors
//! - `codec` - JSON encoding and decoding
//! - `classify` - status lookup and predicates over any `std::error::Error`
//! - `driver` - database driver constraint-violation table
//! - `config` - codec configuration
//! - `error` - codec error types

/// Error kind enumeration
pub mod kind;

/// Detail entries
pub mod detail;

/// Structured error values
pub mod value;

/// JSON wire codec
pub mod codec;

/// Classification of opaque errors
pub mod classify;

/// Database driver adapter
pub mod driver;

/// Codec configuration
pub mod config;

/// Codec error types
pub mod error;

/// Re-export commonly used types for convenience
pub use kind::ErrorKind;
pub use detail::{detail, Detail};
pub use value::{ErrorValue, TIMEOUT_DETAIL};
pub use codec::{decode, encode, parse, write_to, ErrorCodec};
pub use classify::{
    append_details, classify, http_status, http_status_of, is, is_bad_input, is_conflict,
    is_duplicate, is_forbidden, is_not_found, is_not_referenced_id, is_not_supported,
    is_permission_denied, is_service_unavailable, is_timeout, is_unauthorized, is_unimplemented,
    kind_of, recover, status_of_str,
};
pub use driver::{constraint_violation, ConstraintViolation, DriverError, DriverFamily};
pub use config::{CodecConfig, CodecConfigBuilder, ConfigError};
pub use error::CodecError;
