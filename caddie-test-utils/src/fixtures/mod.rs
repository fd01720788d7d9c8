//! Test fixture modules.
//!
//! - `factory` - in-memory models that never touch the database
//! - `geometry` - games, holes, pins and courses
//! - `setup` - setups, groups, sheets and layers
//! - `user` - users

pub mod factory;
pub mod geometry;
pub mod setup;
pub mod user;
