//! Service layer for business logic.
//!
//! Services validate input, check the acting identity against the creator of whatever is being
//! changed, and coordinate repositories, running multi-step writes inside a single transaction.
//! They take a database connection per instance and are cheap to construct per operation.

pub mod geometry;
pub mod group;
pub mod setup;
pub mod sheet;
pub mod user;
