//! Test harness for Caddie.
//!
//! Provides an in-memory SQLite database with the production migrations applied, fixtures
//! for inserting geometry, users, setups, groups and sheets, and in-memory model factories
//! for tests that never touch the database.

pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures::{factory, geometry::MockSituation},
        test_setup_with_tables, TestError, TestSetup,
    };
}
