//! Database Driver Adapter
//!
//! Translates vendor-specific constraint-violation codes into error
//! classifications. This is the only place the codec looks outside its own
//! kinds, and it does so through one explicit table:
//!
//! | Driver   | Code  | Meaning                               |
//! |----------|-------|---------------------------------------|
//! | MySQL    | 1062  | duplicate entry for unique key        |
//! | MySQL    | 1216  | foreign key, no parent row            |
//! | MySQL    | 1452  | foreign key, no parent row (InnoDB)   |
//! | SQLite   | 2067  | `SQLITE_CONSTRAINT_UNIQUE`            |
//! | SQLite   | 1555  | `SQLITE_CONSTRAINT_PRIMARYKEY`        |
//! | SQLite   | 787   | `SQLITE_CONSTRAINT_FOREIGNKEY`        |
//! | Postgres | 23505 | `unique_violation`                    |
//! | Postgres | 23503 | `foreign_key_violation`               |
//!
//! Supporting a new driver means adding rows, not control flow. Codes are
//! never inferred from error text.
//!
//! # sqlx
//!
//! [`DriverError::from_sqlx`] reads the vendor code out of a `sqlx::Error`:
//! the MySQL error number, the SQLite extended result code, or the numeric
//! Postgres SQLSTATE.

use std::fmt;

use sqlx::error::DatabaseError;
use sqlx::mysql::MySqlDatabaseError;
use sqlx::postgres::PgDatabaseError;
use sqlx::sqlite::SqliteError;
use thiserror::Error;

use crate::shared::detail::detail;
use crate::shared::value::ErrorValue;

/// Database driver family a vendor code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverFamily {
    /// MySQL and MariaDB error numbers
    MySql,
    /// SQLite extended result codes
    Sqlite,
    /// Postgres SQLSTATE, numeric codes only
    Postgres,
}

impl fmt::Display for DriverFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgres",
        })
    }
}

/// Constraint class recognized by the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintViolation {
    /// Unique or primary key; classified as duplicate/conflict
    Unique,
    /// Foreign key; the referenced id does not exist
    ForeignKey,
}

/// `(driver, vendor code) -> constraint` translation table
pub const CONSTRAINT_TABLE: &[(DriverFamily, i64, ConstraintViolation)] = &[
    (DriverFamily::MySql, 1062, ConstraintViolation::Unique),
    (DriverFamily::MySql, 1216, ConstraintViolation::ForeignKey),
    (DriverFamily::MySql, 1452, ConstraintViolation::ForeignKey),
    (DriverFamily::Sqlite, 2067, ConstraintViolation::Unique),
    (DriverFamily::Sqlite, 1555, ConstraintViolation::Unique),
    (DriverFamily::Sqlite, 787, ConstraintViolation::ForeignKey),
    (DriverFamily::Postgres, 23505, ConstraintViolation::Unique),
    (DriverFamily::Postgres, 23503, ConstraintViolation::ForeignKey),
];

/// Look up a vendor code
pub fn lookup(family: DriverFamily, code: i64) -> Option<ConstraintViolation> {
    CONSTRAINT_TABLE
        .iter()
        .find(|(f, c, _)| *f == family && *c == code)
        .map(|&(_, _, violation)| violation)
}

/// Driver error reduced to its family and numeric vendor code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{family} error {code}: {message}")]
pub struct DriverError {
    pub family: DriverFamily,
    pub code: i64,
    pub message: String,
}

impl DriverError {
    /// Driver error with a vendor code and message
    pub fn new(family: DriverFamily, code: i64, message: impl Into<String>) -> Self {
        Self {
            family,
            code,
            message: message.into(),
        }
    }

    /// Constraint this error violates, if the table knows its code
    pub fn violation(&self) -> Option<ConstraintViolation> {
        lookup(self.family, self.code)
    }

    /// Extract the vendor code of a `sqlx` database error
    ///
    /// Returns `None` for non-database errors and for codes that are not
    /// numeric (e.g. Postgres `42P01`).
    pub fn from_sqlx(err: &sqlx::Error) -> Option<Self> {
        Self::from_database_error(err.as_database_error()?)
    }

    /// Extract the vendor code of a database error of a known driver
    pub fn from_database_error(db: &(dyn DatabaseError + 'static)) -> Option<Self> {
        if let Some(e) = db.try_downcast_ref::<MySqlDatabaseError>() {
            return Some(Self::new(DriverFamily::MySql, i64::from(e.number()), e.message()));
        }
        if let Some(e) = db.try_downcast_ref::<SqliteError>() {
            let code: i64 = e.code()?.parse().ok()?;
            return Some(Self::new(DriverFamily::Sqlite, code, e.message()));
        }
        if let Some(e) = db.try_downcast_ref::<PgDatabaseError>() {
            let code: i64 = e.code().parse().ok()?;
            return Some(Self::new(DriverFamily::Postgres, code, e.message()));
        }

        tracing::debug!("Database error from unknown driver: {}", db.message());
        None
    }
}

/// Constraint violated by `err` or anything in its source chain
pub fn constraint_violation(
    err: &(dyn std::error::Error + 'static),
) -> Option<ConstraintViolation> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(driver) = e.downcast_ref::<DriverError>() {
            return driver.violation();
        }
        if let Some(sqlx_err) = e.downcast_ref::<sqlx::Error>() {
            return DriverError::from_sqlx(sqlx_err).and_then(|d| d.violation());
        }
        current = e.source();
    }
    None
}

impl ErrorValue {
    /// Classify a driver error
    ///
    /// Unique violations become duplicate-resource errors, foreign-key
    /// violations bad requests, everything else internal. The driver and
    /// vendor code are attached as details.
    pub fn from_driver(err: &DriverError) -> Self {
        let details = [detail("driver", err.family), detail("vendorCode", err.code)];
        match err.violation() {
            Some(ConstraintViolation::Unique) => ErrorValue::duplicate(err.message.clone(), details),
            Some(ConstraintViolation::ForeignKey) => {
                ErrorValue::bad_request(err.message.clone(), details)
            }
            None => ErrorValue::internal(err.message.clone(), details),
        }
    }

    /// Classify a `sqlx` error
    pub fn from_sqlx(err: &sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ErrorValue::not_found(err.to_string(), []),
            sqlx::Error::PoolTimedOut => ErrorValue::timeout(err.to_string(), []),
            sqlx::Error::Database(_) => match DriverError::from_sqlx(err) {
                Some(driver) => ErrorValue::from_driver(&driver),
                None => ErrorValue::internal(err.to_string(), []),
            },
            _ => ErrorValue::internal(err.to_string(), []),
        }
    }
}

impl From<DriverError> for ErrorValue {
    fn from(err: DriverError) -> Self {
        ErrorValue::from_driver(&err)
    }
}

impl From<sqlx::Error> for ErrorValue {
    fn from(err: sqlx::Error) -> Self {
        ErrorValue::from_sqlx(&err)
    }
}
