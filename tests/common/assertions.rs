//! Custom assertion macros and utilities
//!
//! Provides enhanced assertion macros for better test output and
//! more descriptive error messages.

/// Assert that an error classifies as the given kind
#[macro_export]
macro_rules! assert_kind {
    ($err:expr, $kind:expr) => {
        let actual = errkind::shared::kind_of($err);
        assert_eq!(
            actual, $kind,
            "Expected kind {:?}, got {:?} for {:?}",
            $kind, actual, $err
        );
    };
}

/// Assert that an error maps to the given HTTP status
#[macro_export]
macro_rules! assert_status {
    ($err:expr, $status:expr) => {
        let actual = errkind::shared::http_status($err);
        assert_eq!(
            actual, $status,
            "Expected status {}, got {} for {:?}",
            $status, actual, $err
        );
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
