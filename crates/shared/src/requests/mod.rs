//! Request bodies and query strings accepted by the engine.

mod player;

pub use player::{CreatePlayerRequest, PlayerQueryParams, UpdatePlayerRequest};
