/**
 * Error Conversion
 *
 * This module provides the HTTP boundary for `ErrorValue`: converting an
 * error into an Axum response on the sending side, and rebuilding it from a
 * status and body on the receiving side.
 *
 * # Response Format
 *
 * Error responses use the codec wire format:
 * ```json
 * {
 *   "code": 4,
 *   "message": "user missing",
 *   "details": [{"name": "userId", "value": "42"}]
 * }
 * ```
 *
 * The status is the kind's HTTP status.
 */

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::shared::codec::ErrorCodec;
use crate::shared::detail::detail;
use crate::shared::value::ErrorValue;

impl IntoResponse for ErrorValue {
    /// Convert an error into an HTTP response
    ///
    /// Uses the default codec configuration. Handlers that need a custom
    /// configuration call [`ErrorCodec::response`] instead.
    fn into_response(self) -> Response {
        ErrorCodec::default().response(&self)
    }
}

impl ErrorCodec {
    /// Build a JSON response for `value`
    pub fn response(&self, value: &ErrorValue) -> Response {
        let status = StatusCode::from_u16(value.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            Body::from(self.encode(value)),
        )
            .into_response()
    }
}

impl ErrorValue {
    /// Rebuild an error from a received response
    ///
    /// A body in the wire format wins over the status. Otherwise the error
    /// is built from the status, with a non-empty body attached as a `body`
    /// detail.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        if let Some(value) = ErrorCodec::default().parse(body) {
            return value;
        }

        tracing::debug!(status = status.as_u16(), "Error response without a structured body");
        if body.is_empty() {
            ErrorValue::from_http_status(status.as_u16(), [])
        } else {
            ErrorValue::from_http_status(status.as_u16(), [detail("body", body)])
        }
    }
}
