//! Experience points value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Highest experience a player can reach.
pub const MAX_EXPERIENCE: u32 = 10_000_000;

/// Validated experience points in `0..=10_000_000`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Experience(u32);

impl Experience {
    pub fn new(points: i64) -> Result<Self, DomainError> {
        if !(0..=i64::from(MAX_EXPERIENCE)).contains(&points) {
            return Err(DomainError::validation(format!(
                "Experience must be within [0, {}], got {}",
                MAX_EXPERIENCE, points
            )));
        }
        // In range, so the narrowing is lossless
        Ok(Self(points as u32))
    }

    pub fn points(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Experience {
    type Error = DomainError;

    fn try_from(points: i64) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Experience> for u32 {
    fn from(experience: Experience) -> Self {
        experience.0
    }
}
