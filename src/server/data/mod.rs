//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table (or one table and its ordered child rows)
//! and are generic over [`sea_orm::ConnectionTrait`] so services can run them either against
//! the connection pool or inside a transaction. They perform no validation or authorization;
//! that belongs to the service layer.

pub mod geometry;
pub mod setup;
pub mod user;
