//! Backend Module
//!
//! Server-side integration of the codec. This module is only compiled when
//! the `server` feature is enabled and adds the Axum response conversion on
//! top of the transport-agnostic `shared` module.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs    - Module exports and documentation
//! └── error/    - IntoResponse for ErrorValue, response decoding
//! ```

/// HTTP error conversion
pub mod error;
