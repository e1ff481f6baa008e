//! Roster Shared - wire-format types for the player REST API
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Raw primitives** - enum names, timestamps and numbers stay unparsed so
//!    the engine can report every invalid value as a bad request

pub mod requests;

pub use requests::{CreatePlayerRequest, PlayerQueryParams, UpdatePlayerRequest};
