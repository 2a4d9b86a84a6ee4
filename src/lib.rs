//! errkind - Error Classification Codec
//!
//! A small library that gives services one vocabulary for failures: a closed
//! set of error kinds, structured name/value details, a lossless JSON wire
//! format, and a mapping between kinds and HTTP status codes.
//!
//! # Overview
//!
//! - Construct an [`ErrorValue`](shared::ErrorValue) where a failure is
//!   detected, one constructor per kind
//! - Enrich it with details as it moves up the call stack
//! - Encode it at the HTTP boundary; the status comes from the kind
//! - Decode it on the receiving side and branch with the `is_*` predicates
//!
//! Opaque errors (anything implementing `std::error::Error`) are classified
//! through their source chain, through `sqlx` driver error codes, or by
//! decoding their display text.
//!
//! # Module Structure
//!
//! - **`shared`** - Kinds, values, codec, classification, driver adapter
//! - **`backend`** - Axum integration (only compiled with the `server` feature)
//!
//! # Example
//!
//! ```rust
//! use errkind::shared::{detail, encode, http_status, parse, ErrorValue};
//!
//! let err = ErrorValue::not_found("user missing", [detail("userId", "42")]);
//! let wire = encode(&err);
//!
//! let received = parse(&wire).unwrap();
//! assert_eq!(http_status(&received), 404);
//! assert_eq!(received.detail("userId"), Some("42"));
//! ```
//!
//! # Thread Safety
//!
//! Every operation is a pure function of its arguments. Error values are
//! owned, `Send + Sync`, and enrichment copies rather than mutates.

/// Kinds, values, codec and classification
pub mod shared;

/// Axum integration
#[cfg(feature = "server")]
pub mod backend;
