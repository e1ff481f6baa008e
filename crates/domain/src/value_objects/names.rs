//! Validated text newtypes for the player aggregate
//!
//! These newtypes ensure that text fields are valid by construction:
//! - Non-empty
//! - Within length limits (counted in characters, not bytes)
//!
//! Unlike free-form descriptions, names and titles are stored exactly as
//! submitted. Surrounding whitespace counts towards the length.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for player names
pub const MAX_NAME_LENGTH: usize = 12;

/// Maximum length for player titles
pub const MAX_TITLE_LENGTH: usize = 30;

fn check_length(value: &str, max: usize, label: &str) -> Result<(), DomainError> {
    let length = value.chars().count();
    if length == 0 {
        return Err(DomainError::validation(format!("{} cannot be empty", label)));
    }
    if length > max {
        return Err(DomainError::validation(format!(
            "{} cannot exceed {} characters",
            label, max
        )));
    }
    Ok(())
}

// ============================================================================
// PlayerName
// ============================================================================

/// A validated player name (1..=12 chars)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new validated player name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty
    /// - The name exceeds 12 characters
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        check_length(&name, MAX_NAME_LENGTH, "Player name")?;
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}

// ============================================================================
// PlayerTitle
// ============================================================================

/// A validated player title (1..=30 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerTitle(String);

impl PlayerTitle {
    /// Create a new validated player title.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the title is empty or exceeds
    /// 30 characters.
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        check_length(&title, MAX_TITLE_LENGTH, "Player title")?;
        Ok(Self(title))
    }

    /// Returns the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerTitle {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerTitle> for String {
    fn from(title: PlayerTitle) -> String {
        title.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_one_to_twelve_chars() {
        assert!(PlayerName::new("A").is_ok());
        assert!(PlayerName::new("Abcdefghijkl").is_ok());
    }

    #[test]
    fn name_rejects_empty_and_thirteen_chars() {
        assert!(PlayerName::new("").is_err());
        let err = PlayerName::new("Abcdefghijklm").unwrap_err();
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 12 Cyrillic letters are 24 bytes in UTF-8
        assert!(PlayerName::new("Ахиллесович1").is_ok());
    }

    #[test]
    fn name_preserves_whitespace() {
        let name = PlayerName::new(" Bob ").unwrap();
        assert_eq!(name.as_str(), " Bob ");
    }

    #[test]
    fn title_bounds() {
        assert!(PlayerTitle::new("").is_err());
        assert!(PlayerTitle::new("x".repeat(30)).is_ok());
        assert!(PlayerTitle::new("x".repeat(31)).is_err());
    }

    #[test]
    fn serde_roundtrip_validates() {
        let ok: Result<PlayerName, _> = serde_json::from_str("\"Gandalf\"");
        assert!(ok.is_ok());
        let bad: Result<PlayerName, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
