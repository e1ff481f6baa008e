//! Player CRUD operations.

use std::sync::Arc;

use roster_domain::query::{filter, select};
use roster_domain::{Player, PlayerId};
use roster_shared::{CreatePlayerRequest, PlayerQueryParams, UpdatePlayerRequest};

use crate::infrastructure::ports::PlayerRepo;
use crate::use_cases::validation::{
    validate_create, validate_criteria, validate_filter, validate_update,
};

use super::ManagementError;

pub struct PlayerCrud {
    repo: Arc<dyn PlayerRepo>,
}

impl PlayerCrud {
    pub fn new(repo: Arc<dyn PlayerRepo>) -> Self {
        Self { repo }
    }

    /// Filtered, ordered and paginated players.
    pub async fn list(&self, params: &PlayerQueryParams) -> Result<Vec<Player>, ManagementError> {
        let query = validate_criteria(params)?;
        let players = self.repo.list_all().await?;
        Ok(select(players, &query.criteria, query.order, query.page))
    }

    /// Size of the filtered set. Order and paging are ignored.
    pub async fn count(&self, params: &PlayerQueryParams) -> Result<usize, ManagementError> {
        let criteria = validate_filter(params)?;
        Ok(filter(self.repo.list_all().await?, &criteria).len())
    }

    pub async fn get(&self, raw_id: &str) -> Result<Player, ManagementError> {
        let id = parse_id(raw_id)?;
        self.load(id).await
    }

    pub async fn create(&self, request: &CreatePlayerRequest) -> Result<Player, ManagementError> {
        let profile = validate_create(request)?;
        let player = self.repo.insert(&profile).await?;
        tracing::info!(
            player_id = %player.id(),
            name = %player.name(),
            level = player.level(),
            "Player created"
        );
        Ok(player)
    }

    /// Apply the present fields of `request` onto the stored player.
    ///
    /// Nothing is written unless every present field is valid.
    pub async fn update(
        &self,
        raw_id: &str,
        request: &UpdatePlayerRequest,
    ) -> Result<Player, ManagementError> {
        let id = parse_id(raw_id)?;
        let existing = self.load(id).await?;
        let patch = validate_update(request)?;

        let updated = existing.apply(patch);
        self.repo.save(&updated).await?;
        tracing::info!(
            player_id = %id,
            experience = updated.experience().points(),
            level = updated.level(),
            "Player updated"
        );
        Ok(updated)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), ManagementError> {
        let id = parse_id(raw_id)?;
        // An absent id reports NotFound before any delete is attempted.
        self.load(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(player_id = %id, "Player deleted");
        Ok(())
    }

    async fn load(&self, id: PlayerId) -> Result<Player, ManagementError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ManagementError::NotFound {
                entity_type: "Player",
                id: id.to_string(),
            })
    }
}

fn parse_id(raw: &str) -> Result<PlayerId, ManagementError> {
    raw.parse::<PlayerId>()
        .map_err(|e| ManagementError::InvalidId(e.to_string()))
}
