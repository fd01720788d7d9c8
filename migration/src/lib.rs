pub use sea_orm_migration::prelude::*;

mod m20251018_000001_caddie_user;
mod m20251018_000002_game;
mod m20251018_000003_hole;
mod m20251018_000004_pin;
mod m20251018_000005_course;
mod m20251018_000006_setup;
mod m20251018_000007_setup_group;
mod m20251018_000008_setup_sheet;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_caddie_user::Migration),
            Box::new(m20251018_000002_game::Migration),
            Box::new(m20251018_000003_hole::Migration),
            Box::new(m20251018_000004_pin::Migration),
            Box::new(m20251018_000005_course::Migration),
            Box::new(m20251018_000006_setup::Migration),
            Box::new(m20251018_000007_setup_group::Migration),
            Box::new(m20251018_000008_setup_sheet::Migration),
        ]
    }
}
