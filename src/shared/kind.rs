//! Error Kinds
//!
//! The closed set of error categories understood by the codec, together with
//! the tables that translate a kind to its wire code, its HTTP status and its
//! canonical message.
//!
//! # Tables
//!
//! | Kind                  | Code | HTTP |
//! |-----------------------|------|------|
//! | `Internal`            | 0    | 500  |
//! | `BadRequest`          | 1    | 400  |
//! | `Unauthorized`        | 2    | 401  |
//! | `Forbidden`           | 3    | 403  |
//! | `NotFound`            | 4    | 404  |
//! | `Conflict`            | 5    | 409  |
//! | `NotImplemented`      | 6    | 501  |
//! | `ServiceUnavailable`  | 7    | 503  |
//! | `VersionNotSupported` | 8    | 505  |
//! | `DuplicateResource`   | 9    | 409  |
//! | `NotSupported`        | 10   | 505  |
//!
//! Unknown codes fall back to `Internal`.

use std::fmt;

/// Category of a failure.
///
/// The discriminant of every `ErrorValue`. Kinds are compared directly,
/// never through their messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    /// Bugs, system errors, anything unclassified
    #[default]
    Internal,

    /// Invalid input, user error
    BadRequest,

    /// Missing or invalid credentials
    Unauthorized,

    /// Authenticated but not allowed
    Forbidden,

    /// Resource missing
    NotFound,

    /// Resource exists or is in a conflicting state
    Conflict,

    /// Operation exists but has no implementation
    NotImplemented,

    /// Dependency down or overloaded, retry possible
    ServiceUnavailable,

    /// Protocol or API version rejected
    VersionNotSupported,

    /// Unique constraint hit; classified as a conflict
    DuplicateResource,

    /// Operation not supported by this deployment
    NotSupported,
}

impl ErrorKind {
    /// Every kind, in code order.
    pub const ALL: [ErrorKind; 11] = [
        ErrorKind::Internal,
        ErrorKind::BadRequest,
        ErrorKind::Unauthorized,
        ErrorKind::Forbidden,
        ErrorKind::NotFound,
        ErrorKind::Conflict,
        ErrorKind::NotImplemented,
        ErrorKind::ServiceUnavailable,
        ErrorKind::VersionNotSupported,
        ErrorKind::DuplicateResource,
        ErrorKind::NotSupported,
    ];

    /// Numeric code written to the wire.
    pub fn code(self) -> i64 {
        match self {
            Self::Internal => 0,
            Self::BadRequest => 1,
            Self::Unauthorized => 2,
            Self::Forbidden => 3,
            Self::NotFound => 4,
            Self::Conflict => 5,
            Self::NotImplemented => 6,
            Self::ServiceUnavailable => 7,
            Self::VersionNotSupported => 8,
            Self::DuplicateResource => 9,
            Self::NotSupported => 10,
        }
    }

    /// Look up a kind by wire code.
    ///
    /// Returns `None` for codes outside the table. Use
    /// [`ErrorKind::from_code_or_internal`] when a kind is always needed.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Internal),
            1 => Some(Self::BadRequest),
            2 => Some(Self::Unauthorized),
            3 => Some(Self::Forbidden),
            4 => Some(Self::NotFound),
            5 => Some(Self::Conflict),
            6 => Some(Self::NotImplemented),
            7 => Some(Self::ServiceUnavailable),
            8 => Some(Self::VersionNotSupported),
            9 => Some(Self::DuplicateResource),
            10 => Some(Self::NotSupported),
            _ => None,
        }
    }

    /// Like [`ErrorKind::from_code`], with `Internal` for unknown codes.
    pub fn from_code_or_internal(code: i64) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// HTTP status code for this kind.
    pub fn http_status(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict | Self::DuplicateResource => 409,
            Self::NotImplemented => 501,
            Self::ServiceUnavailable => 503,
            Self::VersionNotSupported | Self::NotSupported => 505,
            Self::Internal => 500,
        }
    }

    /// Reverse of [`ErrorKind::http_status`].
    ///
    /// 409 resolves to `Conflict` and 505 to `VersionNotSupported`; every
    /// status outside the table resolves to `Internal`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            501 => Self::NotImplemented,
            503 => Self::ServiceUnavailable,
            505 => Self::VersionNotSupported,
            _ => Self::Internal,
        }
    }

    /// Fixed message used by sentinel errors of this kind.
    pub fn canonical_message(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::BadRequest => "bad input",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::Conflict => "conflict",
            Self::NotImplemented => "unimplemented",
            Self::ServiceUnavailable => "service unavailable",
            Self::VersionNotSupported => "version not supported",
            Self::DuplicateResource => "duplicate resource",
            Self::NotSupported => "unsupported",
        }
    }

    /// Conflict and its duplicate-resource alias.
    pub fn is_conflict(self) -> bool {
        matches!(self, Self::Conflict | Self::DuplicateResource)
    }

    /// Forbidden or unauthorized.
    pub fn is_permission_denied(self) -> bool {
        matches!(self, Self::Forbidden | Self::Unauthorized)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_message())
    }
}
