//! Classification of opaque errors
//!
//! Functions here accept any `std::error::Error` and answer questions about
//! it in terms of [`ErrorKind`]. The error is resolved to an [`ErrorValue`]
//! in this order:
//!
//! 1. the error, or something in its source chain, is an `ErrorValue`
//! 2. ... is a `sqlx::Error` or a [`DriverError`]
//! 3. its display text, or that of a source, decodes as a wire payload
//!
//! None of these functions panic. Anything unrecognized classifies as
//! internal, maps to status 500 and answers `false` to every predicate.

use std::borrow::Cow;
use std::error::Error;

use crate::shared::codec;
use crate::shared::detail::Detail;
use crate::shared::driver::{constraint_violation, ConstraintViolation, DriverError};
use crate::shared::error::CodecError;
use crate::shared::kind::ErrorKind;
use crate::shared::value::ErrorValue;

/// Recover a structured error, if there is one
pub fn recover<'a>(err: &'a (dyn Error + 'static)) -> Option<Cow<'a, ErrorValue>> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(value) = e.downcast_ref::<ErrorValue>() {
            return Some(Cow::Borrowed(value));
        }
        if let Some(sqlx_err) = e.downcast_ref::<sqlx::Error>() {
            return Some(Cow::Owned(ErrorValue::from_sqlx(sqlx_err)));
        }
        if let Some(driver) = e.downcast_ref::<DriverError>() {
            return Some(Cow::Owned(ErrorValue::from_driver(driver)));
        }
        current = e.source();
    }

    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(value) = codec::parse(&e.to_string()) {
            return Some(Cow::Owned(value));
        }
        current = e.source();
    }
    None
}

/// Resolve any error to an `ErrorValue`, defaulting to internal
///
/// When nothing structured can be recovered, the result is an internal
/// error whose message is the error's display text (or the message of a
/// payload that decoded without a classification).
pub fn classify(err: &(dyn Error + 'static)) -> ErrorValue {
    classify_with(err, true)
}

pub(crate) fn classify_with(err: &(dyn Error + 'static), log_unclassified: bool) -> ErrorValue {
    if let Some(value) = recover(err) {
        return value.into_owned();
    }

    let text = err.to_string();
    if log_unclassified {
        tracing::debug!("Unclassified error treated as internal: {}", text);
    }

    match codec::decode(&text) {
        Ok(value) => value,
        Err(CodecError::Malformed(_)) => ErrorValue::new(text),
        Err(rejected) => {
            let value = rejected.into_value();
            if value.message().is_empty() {
                ErrorValue::new(text)
            } else {
                value
            }
        }
    }
}

/// Kind of any error
pub fn kind_of(err: &(dyn Error + 'static)) -> ErrorKind {
    recover(err).map_or(ErrorKind::Internal, |v| v.kind())
}

/// HTTP status for any error
///
/// Always one of 400, 401, 403, 404, 409, 500, 501, 503, 505.
pub fn http_status(err: &(dyn Error + 'static)) -> u16 {
    kind_of(err).http_status()
}

/// HTTP status for an optional error; no error maps to 500
pub fn http_status_of(err: Option<&(dyn Error + 'static)>) -> u16 {
    err.map_or(ErrorKind::Internal.http_status(), http_status)
}

/// HTTP status for a raw wire payload
pub fn status_of_str(payload: &str) -> u16 {
    codec::parse(payload).map_or(ErrorKind::Internal.http_status(), |v| v.http_status())
}

/// Append details to any error
///
/// Non-structured errors become internal errors first; see [`classify`].
pub fn append_details(
    err: &(dyn Error + 'static),
    entries: impl IntoIterator<Item = Detail>,
) -> ErrorValue {
    classify(err).with_details(entries)
}

/// Whether `err`, or the error it wraps, is of `kind`
///
/// Unrecognized errors are only ever `Internal`.
pub fn is(err: &(dyn Error + 'static), kind: ErrorKind) -> bool {
    kind_of(err) == kind
}

fn check(err: &(dyn Error + 'static), predicate: impl FnOnce(&ErrorValue) -> bool) -> bool {
    recover(err).is_some_and(|v| predicate(&*v))
}

pub fn is_not_found(err: &(dyn Error + 'static)) -> bool {
    check(err, ErrorValue::is_not_found)
}

/// Conflict, duplicate resource, or a unique-constraint violation
pub fn is_conflict(err: &(dyn Error + 'static)) -> bool {
    constraint_violation(err) == Some(ConstraintViolation::Unique)
        || check(err, ErrorValue::is_conflict)
}

/// Same classes as [`is_conflict`]
pub fn is_duplicate(err: &(dyn Error + 'static)) -> bool {
    constraint_violation(err) == Some(ConstraintViolation::Unique)
        || check(err, ErrorValue::is_duplicate)
}

/// Foreign-key violation: the error references an id that does not exist
pub fn is_not_referenced_id(err: &(dyn Error + 'static)) -> bool {
    constraint_violation(err) == Some(ConstraintViolation::ForeignKey)
}

pub fn is_unauthorized(err: &(dyn Error + 'static)) -> bool {
    check(err, ErrorValue::is_unauthorized)
}

pub fn is_forbidden(err: &(dyn Error + 'static)) -> bool {
    check(err, ErrorValue::is_forbidden)
}

pub fn is_permission_denied(err: &(dyn Error + 'static)) -> bool {
    check(err, ErrorValue::is_permission_denied)
}

pub fn is_service_unavailable(err: &(dyn Error + 'static)) -> bool {
    check(err, ErrorValue::is_service_unavailable)
}

pub fn is_unimplemented(err: &(dyn Error + 'static)) -> bool {
    check(err, ErrorValue::is_unimplemented)
}

pub fn is_bad_input(err: &(dyn Error + 'static)) -> bool {
    check(err, ErrorValue::is_bad_input)
}

pub fn is_not_supported(err: &(dyn Error + 'static)) -> bool {
    check(err, ErrorValue::is_not_supported)
}

/// Timeout-tagged errors, `io::ErrorKind::TimedOut` anywhere in the source
/// chain, and `sqlx` pool timeouts
pub fn is_timeout(err: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::TimedOut {
                return true;
            }
        }
        current = e.source();
    }
    check(err, ErrorValue::is_timeout)
}
