//! Player birthday bounded to the years 2000..3000.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// 2000-01-01T00:00:00Z in epoch milliseconds, inclusive.
pub const EARLIEST_BIRTHDAY_MILLIS: i64 = 946_684_800_000;

/// 3000-01-01T00:00:00Z in epoch milliseconds, exclusive.
pub const LATEST_BIRTHDAY_MILLIS: i64 = 32_503_680_000_000;

/// A validated birthday within `[2000-01-01T00:00:00Z, 3000-01-01T00:00:00Z)`.
///
/// Serialized as epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Birthday(DateTime<Utc>);

impl Birthday {
    pub fn new(at: DateTime<Utc>) -> Result<Self, DomainError> {
        let millis = at.timestamp_millis();
        if !(EARLIEST_BIRTHDAY_MILLIS..LATEST_BIRTHDAY_MILLIS).contains(&millis) {
            return Err(DomainError::validation(format!(
                "Birthday must be within years [2000, 3000), got {}",
                at.to_rfc3339()
            )));
        }
        Ok(Self(at))
    }

    pub fn from_millis(millis: i64) -> Result<Self, DomainError> {
        let at = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            DomainError::validation(format!("Birthday timestamp out of range: {}", millis))
        })?;
        Self::new(at)
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl TryFrom<i64> for Birthday {
    type Error = DomainError;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
    }
}

impl From<Birthday> for i64 {
    fn from(birthday: Birthday) -> Self {
        birthday.timestamp_millis()
    }
}
