//! In-memory player storage.

use std::collections::BTreeMap;

use async_trait::async_trait;
use roster_domain::{Player, PlayerId, PlayerProfile};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{PlayerRepo, RepoError};

#[derive(Default)]
struct Inner {
    players: BTreeMap<PlayerId, Player>,
    /// Last id handed out. Ids are never reused, even after deletes.
    last_id: i64,
}

/// Process-local player store backed by a `BTreeMap`.
///
/// Holding a single lock across each operation keeps every call atomic.
#[derive(Default)]
pub struct InMemoryPlayerRepo {
    inner: RwLock<Inner>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepo for InMemoryPlayerRepo {
    async fn list_all(&self) -> Result<Vec<Player>, RepoError> {
        let guard = self.inner.read().await;
        Ok(guard.players.values().cloned().collect())
    }

    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        let guard = self.inner.read().await;
        Ok(guard.players.get(&id).cloned())
    }

    async fn insert(&self, profile: &PlayerProfile) -> Result<Player, RepoError> {
        let mut guard = self.inner.write().await;
        let next = guard
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::database("players.insert", "id sequence exhausted"))?;
        let id = PlayerId::new(next).map_err(|e| RepoError::database("players.insert", e))?;
        let player = Player::new(id, profile.clone());
        guard.last_id = next;
        guard.players.insert(id, player.clone());
        Ok(player)
    }

    async fn save(&self, player: &Player) -> Result<(), RepoError> {
        let mut guard = self.inner.write().await;
        match guard.players.get_mut(&player.id()) {
            Some(slot) => {
                *slot = player.clone();
                Ok(())
            }
            None => Err(RepoError::not_found("Player", player.id())),
        }
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepoError> {
        let mut guard = self.inner.write().await;
        guard
            .players
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Player", id))
    }
}
