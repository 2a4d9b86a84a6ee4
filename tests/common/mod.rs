//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Opaque error fixtures
//! - Simulated driver errors
//! - Custom assertion macros

pub mod assertions;
pub mod fixtures;

// Re-export commonly used utilities
pub use fixtures::*;
