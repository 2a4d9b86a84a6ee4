//! Backend Error Module
//!
//! HTTP boundary for the codec. `ErrorValue` implements `IntoResponse` from
//! Axum, so handlers can return it directly; the response carries the
//! kind's status code and the JSON wire body.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! └── conversion.rs - IntoResponse and response decoding
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use errkind::shared::{detail, ErrorValue};
//!
//! async fn get_user(id: u64) -> Result<String, ErrorValue> {
//!     Err(ErrorValue::not_found("user missing", [detail("userId", id)]))
//! }
//! ```

/// Error conversion implementations
pub mod conversion;
