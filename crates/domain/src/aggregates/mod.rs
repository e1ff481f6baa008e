//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//!
//! | Concern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Newtypes valid by construction |
//! | Immutable snapshots | `#[derive(Clone)]` + `apply` returns a new value |
//! | Factory pattern | `::new()` + builder pattern |

pub mod player;

pub use player::{Player, PlayerPatch, PlayerProfile};
