//! Player race - a closed set of fantasy races

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Race of a player character.
///
/// The set is closed: there is no catch-all variant, and unknown names are
/// rejected both by `FromStr` and by serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

impl Race {
    pub fn all() -> &'static [Race] {
        &[
            Race::Human,
            Race::Dwarf,
            Race::Elf,
            Race::Giant,
            Race::Orc,
            Race::Troll,
            Race::Hobbit,
        ]
    }

    /// Wire name, as used in JSON bodies and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Race::Human => "HUMAN",
            Race::Dwarf => "DWARF",
            Race::Elf => "ELF",
            Race::Giant => "GIANT",
            Race::Orc => "ORC",
            Race::Troll => "TROLL",
            Race::Hobbit => "HOBBIT",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    /// Parses the exact upper-case wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Race::all()
            .iter()
            .copied()
            .find(|race| race.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown race: {}", s)))
    }
}
