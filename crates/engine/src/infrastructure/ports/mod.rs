//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Player storage (in-memory for tests and demos, SQLite for persistence)

mod error;
mod repos;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::PlayerRepo;

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockPlayerRepo;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
