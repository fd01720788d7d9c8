//! Caddie: course geometry, setups and layered setup sheets for golf-style simulation games.
//!
//! - [`model`] - Serializable DTOs handed to callers, and their display names
//! - [`server`] - Configuration, persistence, validation and the services implementing every
//!   operation

pub mod model;
pub mod server;
