use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned identifier of a player. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PlayerId(i64);

impl PlayerId {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::invalid_id(format!(
                "Player id must be positive, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .parse()
            .map_err(|_| DomainError::invalid_id(format!("Player id is not a number: {}", s)))?;
        Self::new(value)
    }
}

impl TryFrom<i64> for PlayerId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerId> for i64 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids() {
        let id: PlayerId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn rejects_zero_and_negative_ids() {
        assert!(matches!("0".parse::<PlayerId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("-7".parse::<PlayerId>(), Err(DomainError::InvalidId(_))));
        assert!(PlayerId::new(0).is_err());
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(matches!("abc".parse::<PlayerId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("1.5".parse::<PlayerId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("".parse::<PlayerId>(), Err(DomainError::InvalidId(_))));
    }
}
