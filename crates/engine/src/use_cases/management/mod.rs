//! Management use cases for CRUD-style operations.
//!
//! These use cases keep HTTP handlers thin while coordinating validation and
//! the player store.

mod player;

pub use player::PlayerCrud;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationError;

/// Shared error type for management use cases.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl From<RepoError> for ManagementError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            other => Self::Repo(other),
        }
    }
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub player: PlayerCrud,
}

impl ManagementUseCases {
    pub fn new(player: PlayerCrud) -> Self {
        Self { player }
    }
}
