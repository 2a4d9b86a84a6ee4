//! Detail entries
//!
//! A detail is a named string fact attached to an error for API consumers.
//! Errors keep details as an ordered list: duplicate names are all kept and
//! consumers should treat the list as a multimap.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One `name = value` fact attached to an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Detail {
    /// Key of the fact, e.g. `userId`
    pub name: String,
    /// Rendered value
    pub value: String,
}

impl Detail {
    /// Create a new detail entry
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

/// Shorthand for [`Detail::new`].
///
/// ```rust
/// use errkind::shared::{detail, ErrorValue};
///
/// let err = ErrorValue::not_found("user missing", [detail("userId", 42)]);
/// assert_eq!(err.detail("userId"), Some("42"));
/// ```
pub fn detail(name: impl Into<String>, value: impl ToString) -> Detail {
    Detail::new(name, value)
}

impl<N: Into<String>, V: ToString> From<(N, V)> for Detail {
    fn from((name, value): (N, V)) -> Self {
        Detail::new(name, value)
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
