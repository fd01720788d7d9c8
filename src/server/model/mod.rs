//! Server domain models and type definitions.
//!
//! This module contains the types the services speak in: application state, database model
//! type aliases, the acting identity, validated handles, the hole order policy, and the
//! situation tuple that setups target and sheets resolve against.

pub mod actor;
pub mod app;
pub mod db;
pub mod handle;
pub mod policy;
pub mod situation;
