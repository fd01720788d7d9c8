use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{
    error::TestError,
    fixtures::{geometry::GeometryFixtures, setup::SetupFixtures, user::UserFixtures},
};

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    /// Connects to a fresh in-memory SQLite database without creating any tables.
    ///
    /// The pool is limited to a single connection so every query and transaction in a test
    /// sees the same database.
    pub async fn new() -> Result<Self, TestError> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Database::connect(opt).await?;

        Ok(TestSetup {
            state: TestAppState { db },
        })
    }

    /// Creates every table by running the production migrations.
    pub async fn with_tables(&self) -> Result<(), TestError> {
        Migrator::up(&self.state.db, None).await?;

        Ok(())
    }

    /// Fixtures for inserting users.
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures::new(&self.state.db)
    }

    /// Fixtures for inserting games, holes, pins and courses.
    pub fn geometry(&self) -> GeometryFixtures<'_> {
        GeometryFixtures::new(&self.state.db)
    }

    /// Fixtures for inserting setups, groups, sheets and layers.
    pub fn setups(&self) -> SetupFixtures<'_> {
        SetupFixtures::new(&self.state.db)
    }
}

/// Creates a [`TestSetup`] with every table created.
///
/// Must be used inside an async function returning `Result<_, TestError>`.
///
/// ```no_run
/// use caddie_test_utils::prelude::*;
///
/// # async fn example() -> Result<(), TestError> {
/// let test = test_setup_with_tables!()?;
/// let user = test.user().insert_user("golfer").await?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        async {
            let setup = $crate::TestSetup::new().await?;
            setup.with_tables().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
