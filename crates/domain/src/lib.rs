//! Roster Domain - the player aggregate and the pure logic around it.
//!
//! Nothing in this crate performs I/O. Persistence and transport live in
//! `roster-engine`.

pub mod aggregates;
pub mod error;
pub mod ids;
pub mod leveling;
pub mod query;
pub mod types;
pub mod value_objects;

pub use aggregates::{Player, PlayerPatch, PlayerProfile};
pub use error::DomainError;
pub use ids::PlayerId;
pub use leveling::{compute_level, compute_until_next, Leveling};
pub use query::{PageRequest, PlayerCriteria, PlayerOrder};
pub use types::{Profession, Race};
pub use value_objects::{Birthday, Experience, PlayerName, PlayerTitle};
