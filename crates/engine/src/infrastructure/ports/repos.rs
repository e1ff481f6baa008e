//! Repository port traits for database access.

use async_trait::async_trait;
use roster_domain::{Player, PlayerId, PlayerProfile};

use super::error::RepoError;

// =============================================================================
// Player Store
// =============================================================================

/// Persistence for players.
///
/// Calls are all-or-nothing; concurrent-access safety is the adapter's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    /// Every stored player, in ascending id order.
    async fn list_all(&self) -> Result<Vec<Player>, RepoError>;

    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError>;

    /// Store a new player, assigning a fresh id.
    async fn insert(&self, profile: &PlayerProfile) -> Result<Player, RepoError>;

    /// Overwrite an existing player. `NotFound` if the id is not stored.
    async fn save(&self, player: &Player) -> Result<(), RepoError>;

    /// Remove a player. `NotFound` if the id is not stored.
    async fn delete(&self, id: PlayerId) -> Result<(), RepoError>;
}
