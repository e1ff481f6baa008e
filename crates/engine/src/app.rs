//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::PlayerRepo;
use crate::use_cases;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state. The store is only reachable
/// through the use cases.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub management: use_cases::ManagementUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(player_repo: Arc<dyn PlayerRepo>) -> Self {
        let management = use_cases::ManagementUseCases::new(
            use_cases::management::PlayerCrud::new(player_repo),
        );

        Self {
            use_cases: UseCases { management },
        }
    }
}
