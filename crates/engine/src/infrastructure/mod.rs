//! Infrastructure layer - port traits and their adapters.
//!
//! - `ports` - the store boundary and its error type
//! - `memory` / `sqlite` - player store adapters
//! - `config` - environment-driven server configuration

pub mod config;
pub mod memory;
pub mod ports;
pub mod sqlite;
