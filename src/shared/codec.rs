//! Wire Codec
//!
//! JSON encoding and decoding of [`ErrorValue`].
//!
//! # Wire Format
//!
//! ```json
//! {
//!   "code": 4,
//!   "message": "user missing",
//!   "details": [ { "name": "userId", "value": "42" } ]
//! }
//! ```
//!
//! - `code` is omitted for internal errors (code 0) unless
//!   `CodecConfig::emit_internal_code` is set
//! - `details` is omitted when empty; `null` or absent decodes as empty
//! - `CodecConfig::max_details` caps encoding only; decoding keeps every
//!   received detail
//!
//! Details are always an array of entries so that repeated names survive a
//! round trip.
//!
//! # Acceptance
//!
//! A payload decodes to an `ErrorValue` only when it is valid JSON, its code
//! is a known non-zero kind and its message is non-empty. Anything else is a
//! [`CodecError`] that still carries the best-effort value.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::shared::classify;
use crate::shared::config::CodecConfig;
use crate::shared::detail::Detail;
use crate::shared::error::CodecError;
use crate::shared::kind::ErrorKind;
use crate::shared::value::ErrorValue;

#[derive(Serialize)]
struct WireOut<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<i64>,
    message: &'a str,
    #[serde(skip_serializing_if = "no_details")]
    details: &'a [Detail],
}

fn no_details(details: &&[Detail]) -> bool {
    details.is_empty()
}

#[derive(Deserialize)]
struct WireIn {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Option<Vec<Detail>>,
}

/// Encoder/decoder bound to a [`CodecConfig`]
///
/// The free functions in this module use `ErrorCodec::default()`.
#[derive(Debug, Clone, Default)]
pub struct ErrorCodec {
    config: CodecConfig,
}

impl ErrorCodec {
    /// Codec using `config`
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode an error to its JSON wire form
    ///
    /// Never fails. If serialization breaks, a minimal object with `code`
    /// and `message` is returned instead.
    pub fn encode(&self, value: &ErrorValue) -> String {
        let code = match value.code() {
            0 if !self.config.emit_internal_code => None,
            code => Some(code),
        };
        let details = match self.config.max_details {
            Some(max) if value.details().len() > max => &value.details()[..max],
            _ => value.details(),
        };

        let wire = WireOut {
            code,
            message: value.message(),
            details,
        };

        serde_json::to_string(&wire).unwrap_or_else(|e| {
            tracing::warn!("Falling back to minimal error body: {}", e);
            fallback_body(value)
        })
    }

    /// Decode a wire payload
    pub fn decode(&self, payload: &str) -> Result<ErrorValue, CodecError> {
        let wire: WireIn = serde_json::from_str(payload).map_err(|e| {
            tracing::debug!("Rejected error payload: {}", e);
            CodecError::from(e)
        })?;

        let details = wire.details.unwrap_or_default();
        let value = match wire.code {
            None | Some(0) => {
                return Err(CodecError::Unclassified(ErrorValue::create(
                    ErrorKind::Internal,
                    wire.message,
                    details,
                )));
            }
            Some(code) => match ErrorKind::from_code(code) {
                Some(kind) => ErrorValue::create(kind, wire.message, details),
                None => {
                    tracing::debug!(code, "Rejected error payload with unknown code");
                    return Err(CodecError::unknown_code(
                        code,
                        ErrorValue::create(ErrorKind::Internal, wire.message, details),
                    ));
                }
            },
        };

        if value.message().is_empty() {
            return Err(CodecError::EmptyMessage(value));
        }
        Ok(value)
    }

    /// `Some` only for well-formed, classified payloads
    pub fn parse(&self, payload: &str) -> Option<ErrorValue> {
        self.decode(payload).ok()
    }

    /// Classify any error, defaulting to internal
    pub fn classify(&self, err: &(dyn std::error::Error + 'static)) -> ErrorValue {
        classify::classify_with(err, self.config.log_unclassified)
    }

    /// Encode any error
    ///
    /// Unclassifiable errors are encoded as internal errors carrying their
    /// display text.
    pub fn encode_error(&self, err: &(dyn std::error::Error + 'static)) -> String {
        self.encode(&self.classify(err))
    }

    /// Write an error body to `writer`
    ///
    /// Structured errors are written in the wire format. Anything that
    /// cannot be classified is written as `{"error": "<text>"}`.
    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
        err: &(dyn std::error::Error + 'static),
    ) -> std::io::Result<usize> {
        let body = match classify::recover(err) {
            Some(value) => self.encode(&value),
            None => serde_json::json!({ "error": err.to_string() }).to_string(),
        };
        writer.write_all(body.as_bytes())?;
        Ok(body.len())
    }
}

fn fallback_body(value: &ErrorValue) -> String {
    let message = serde_json::to_string(value.message()).unwrap_or_else(|_| "\"\"".to_string());
    format!(r#"{{"code":{},"message":{}}}"#, value.code(), message)
}

/// Encode with the default configuration
pub fn encode(value: &ErrorValue) -> String {
    ErrorCodec::default().encode(value)
}

/// Decode with the default configuration
pub fn decode(payload: &str) -> Result<ErrorValue, CodecError> {
    ErrorCodec::default().decode(payload)
}

/// Parse with the default configuration
///
/// ```rust
/// use errkind::shared::{detail, encode, parse, ErrorValue};
///
/// let sent = ErrorValue::not_found("user missing", [detail("userId", "42")]);
/// let received = parse(&encode(&sent)).unwrap();
/// assert_eq!(received.http_status(), 404);
/// assert_eq!(received.detail("userId"), Some("42"));
///
/// assert!(parse("").is_none());
/// assert!(parse("not json").is_none());
/// ```
pub fn parse(payload: &str) -> Option<ErrorValue> {
    ErrorCodec::default().parse(payload)
}

/// Write an error body with the default configuration
pub fn write_to<W: Write>(
    writer: &mut W,
    err: &(dyn std::error::Error + 'static),
) -> std::io::Result<usize> {
    ErrorCodec::default().write_to(writer, err)
}
