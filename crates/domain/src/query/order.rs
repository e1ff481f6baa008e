//! Sort engine: ascending, stable ordering by a fixed set of keys.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::Player;

/// Sort key for player listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl PlayerOrder {
    pub fn all() -> &'static [PlayerOrder] {
        &[
            PlayerOrder::Id,
            PlayerOrder::Name,
            PlayerOrder::Experience,
            PlayerOrder::Birthday,
            PlayerOrder::Level,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerOrder::Id => "ID",
            PlayerOrder::Name => "NAME",
            PlayerOrder::Experience => "EXPERIENCE",
            PlayerOrder::Birthday => "BIRTHDAY",
            PlayerOrder::Level => "LEVEL",
        }
    }

    /// Natural ascending ordering of the keyed field.
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        match self {
            PlayerOrder::Id => a.id().cmp(&b.id()),
            PlayerOrder::Name => a.name().as_str().cmp(b.name().as_str()),
            PlayerOrder::Experience => a.experience().cmp(&b.experience()),
            PlayerOrder::Birthday => a.birthday().cmp(&b.birthday()),
            PlayerOrder::Level => a.level().cmp(&b.level()),
        }
    }
}

impl fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerOrder::all()
            .iter()
            .copied()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown player order: {}", s)))
    }
}

/// Sort `players` by `order`. `None` keeps the input order.
///
/// Ties keep their original relative order.
pub fn sort(mut players: Vec<Player>, order: Option<PlayerOrder>) -> Vec<Player> {
    if let Some(order) = order {
        players.sort_by(|a, b| order.compare(a, b));
    }
    players
}
