//! Error fixtures
//!
//! Opaque errors that are not `ErrorValue`s, and simulated driver errors
//! carrying the vendor codes of each supported driver family.

use errkind::shared::{DriverError, DriverFamily};
use thiserror::Error;

/// An error the codec knows nothing about
#[derive(Debug, Error)]
#[error("{0}")]
pub struct Opaque(pub String);

impl Opaque {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

/// An application error wrapping a lower-level cause
#[derive(Debug, Error)]
#[error("{context}")]
pub struct Layered {
    pub context: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl Layered {
    pub fn wrap(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

pub fn mysql_duplicate() -> DriverError {
    DriverError::new(
        DriverFamily::MySql,
        1062,
        "Duplicate entry 'ann@example.com' for key 'users.email'",
    )
}

pub fn mysql_missing_parent() -> DriverError {
    DriverError::new(
        DriverFamily::MySql,
        1216,
        "Cannot add or update a child row: a foreign key constraint fails",
    )
}

pub fn sqlite_unique() -> DriverError {
    DriverError::new(DriverFamily::Sqlite, 2067, "UNIQUE constraint failed: users.email")
}

pub fn sqlite_primary_key() -> DriverError {
    DriverError::new(DriverFamily::Sqlite, 1555, "UNIQUE constraint failed: users.id")
}

pub fn sqlite_foreign_key() -> DriverError {
    DriverError::new(DriverFamily::Sqlite, 787, "FOREIGN KEY constraint failed")
}

pub fn postgres_unique() -> DriverError {
    DriverError::new(
        DriverFamily::Postgres,
        23505,
        "duplicate key value violates unique constraint \"users_email_key\"",
    )
}

pub fn postgres_foreign_key() -> DriverError {
    DriverError::new(
        DriverFamily::Postgres,
        23503,
        "insert or update on table \"orders\" violates foreign key constraint",
    )
}
