//! Error Values
//!
//! `ErrorValue` is the structured error carried across call layers and
//! process boundaries: a kind, a human-readable message and an ordered list
//! of details.
//!
//! # Construction
//!
//! There is one constructor per kind, plus [`ErrorValue::create`] for a
//! kind only known at runtime:
//!
//! ```rust
//! use errkind::shared::{detail, ErrorKind, ErrorValue};
//!
//! let a = ErrorValue::forbidden("not your document", [detail("docId", "d-1")]);
//! let b = ErrorValue::create(ErrorKind::Forbidden, "not your document", [detail("docId", "d-1")]);
//! assert_eq!(a, b);
//! ```
//!
//! # Enrichment
//!
//! Details are append-only. [`ErrorValue::with_details`] returns a fresh
//! value and leaves the original untouched, so two callers enriching the
//! same error never observe each other's entries.

use std::fmt;

use crate::shared::detail::Detail;
use crate::shared::kind::ErrorKind;

/// Name of the detail that marks a service-unavailable error as a timeout.
pub const TIMEOUT_DETAIL: &str = "timeout";

/// A classified error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorValue {
    kind: ErrorKind,
    message: String,
    details: Vec<Detail>,
}

impl ErrorValue {
    /// Create an error of any kind
    pub fn create(
        kind: ErrorKind,
        message: impl Into<String>,
        details: impl IntoIterator<Item = Detail>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            details: details.into_iter().collect(),
        }
    }

    /// Create an internal error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self::create(ErrorKind::Internal, message, [])
    }

    /// Create an error from a numeric wire code
    ///
    /// Codes outside the kind table produce an `Internal` error.
    pub fn from_code(
        code: i64,
        message: impl Into<String>,
        details: impl IntoIterator<Item = Detail>,
    ) -> Self {
        Self::create(ErrorKind::from_code_or_internal(code), message, details)
    }

    /// Error of `kind` carrying the kind's canonical message
    pub fn sentinel(kind: ErrorKind) -> Self {
        Self::create(kind, kind.canonical_message(), [])
    }

    /// Build an error from a received HTTP status
    ///
    /// The message is the canonical message of the resolved kind. Unknown
    /// statuses produce an `Internal` error.
    pub fn from_http_status(status: u16, details: impl IntoIterator<Item = Detail>) -> Self {
        let kind = ErrorKind::from_http_status(status);
        Self::create(kind, kind.canonical_message(), details)
    }

    /// Create a internal error
    pub fn internal(message: impl Into<String>, details: impl IntoIterator<Item = Detail>) -> Self {
        Self::create(ErrorKind::Internal, message, details)
    }

    /// Create a bad-request error
    pub fn bad_request(message: impl Into<String>, details: impl IntoIterator<Item = Detail>) -> Self {
        Self::create(ErrorKind::BadRequest, message, details)
    }

    /// Create a unauthorized error
    pub fn unauthorized(message: impl Into<String>, details: impl IntoIterator<Item = Detail>) -> Self {
        Self::create(ErrorKind::Unauthorized, message, details)
    }

    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>, details: impl IntoIterator<Item = Detail>) -> Self {
        Self::create(ErrorKind::Forbidden, message, details)
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>, details: impl IntoIterator<Item = Detail>) -> Self {
        Self::create(ErrorKind::NotFound, message, details)
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>, details: impl IntoIterator<Item = Detail>) -> Self {
        Self::create(ErrorKind::Conflict, message, details)
    }

    /// Create a not-implemented error
    pub fn not_implemented(
        message: impl Into<String>,
        details: impl IntoIterator<Item = Detail>,
    ) -> Self {
        Self::create(ErrorKind::NotImplemented, message, details)
    }

    /// Create a service-unavailable error
    pub fn service_unavailable(
        message: impl Into<String>,
        details: impl IntoIterator<Item = Detail>,
    ) -> Self {
        Self::create(ErrorKind::ServiceUnavailable, message, details)
    }

    /// Create a version-not-supported error
    pub fn version_not_supported(
        message: impl Into<String>,
        details: impl IntoIterator<Item = Detail>,
    ) -> Self {
        Self::create(ErrorKind::VersionNotSupported, message, details)
    }

    /// Create a duplicate-resource error
    pub fn duplicate(message: impl Into<String>, details: impl IntoIterator<Item = Detail>) -> Self {
        Self::create(ErrorKind::DuplicateResource, message, details)
    }

    /// Create a not-supported error
    pub fn not_supported(
        message: impl Into<String>,
        details: impl IntoIterator<Item = Detail>,
    ) -> Self {
        Self::create(ErrorKind::NotSupported, message, details)
    }

    /// Service-unavailable error tagged as a timeout
    ///
    /// The tag is a [`TIMEOUT_DETAIL`] entry, so it survives the wire.
    pub fn timeout(message: impl Into<String>, details: impl IntoIterator<Item = Detail>) -> Self {
        Self::service_unavailable(message, details).with(TIMEOUT_DETAIL, true)
    }

    /// Kind of this error
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Wire code of the kind
    pub fn code(&self) -> i64 {
        self.kind.code()
    }

    /// Human-readable message, possibly empty
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Details in insertion order
    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    /// Value of the first detail called `name`
    pub fn detail(&self, name: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
    }

    /// Values of every detail called `name`, in insertion order
    pub fn details_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.details
            .iter()
            .filter(move |d| d.name == name)
            .map(|d| d.value.as_str())
    }

    /// Append one detail, consuming the value
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.details.push(Detail::new(name, value));
        self
    }

    /// Copy of this error with `entries` appended
    ///
    /// Kind and message are kept; `self` is not modified.
    pub fn with_details(&self, entries: impl IntoIterator<Item = Detail>) -> Self {
        let mut details = self.details.clone();
        details.extend(entries);
        Self {
            kind: self.kind,
            message: self.message.clone(),
            details,
        }
    }

    /// Split into kind, message and details
    pub fn into_parts(self) -> (ErrorKind, String, Vec<Detail>) {
        (self.kind, self.message, self.details)
    }

    /// HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        self.kind.http_status()
    }

    /// Whether this error is of `kind`
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Not found
    pub fn is_not_found(&self) -> bool {
        self.is(ErrorKind::NotFound)
    }

    /// Conflict, or its duplicate-resource alias
    pub fn is_conflict(&self) -> bool {
        self.kind.is_conflict()
    }

    /// Same as [`ErrorValue::is_conflict`]
    pub fn is_duplicate(&self) -> bool {
        self.kind.is_conflict()
    }

    /// Unauthorized
    pub fn is_unauthorized(&self) -> bool {
        self.is(ErrorKind::Unauthorized)
    }

    /// Forbidden
    pub fn is_forbidden(&self) -> bool {
        self.is(ErrorKind::Forbidden)
    }

    /// Forbidden or unauthorized
    pub fn is_permission_denied(&self) -> bool {
        self.kind.is_permission_denied()
    }

    /// Service unavailable, timeouts included
    pub fn is_service_unavailable(&self) -> bool {
        self.is(ErrorKind::ServiceUnavailable)
    }

    /// Not implemented
    pub fn is_unimplemented(&self) -> bool {
        self.is(ErrorKind::NotImplemented)
    }

    /// Bad request
    pub fn is_bad_input(&self) -> bool {
        self.is(ErrorKind::BadRequest)
    }

    /// Not supported, including unsupported versions
    pub fn is_not_supported(&self) -> bool {
        matches!(self.kind, ErrorKind::NotSupported | ErrorKind::VersionNotSupported)
    }

    /// Service unavailable tagged with a `timeout=true` detail
    pub fn is_timeout(&self) -> bool {
        self.is_service_unavailable()
            && self.details_named(TIMEOUT_DETAIL).any(|v| v == "true")
    }
}

impl From<ErrorKind> for ErrorValue {
    fn from(kind: ErrorKind) -> Self {
        Self::sentinel(kind)
    }
}

impl PartialEq<ErrorKind> for ErrorValue {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind == *other
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(self.kind.canonical_message())
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for ErrorValue {}
