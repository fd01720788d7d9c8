use sea_orm::DatabaseConnection;

use crate::server::{
    model::policy::HoleOrderPolicy,
    service::{
        geometry::GeometryService, group::GroupService, setup::SetupService,
        sheet::SheetService, user::UserService,
    },
};

/// Shared state handed to whatever drives the services.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub hole_order_policy: HoleOrderPolicy,
}

impl AppState {
    pub fn users(&self) -> UserService<'_> {
        UserService::new(&self.db)
    }

    pub fn geometry(&self) -> GeometryService<'_> {
        GeometryService::new(&self.db, self.hole_order_policy)
    }

    pub fn setups(&self) -> SetupService<'_> {
        SetupService::new(&self.db)
    }

    pub fn groups(&self) -> GroupService<'_> {
        GroupService::new(&self.db)
    }

    pub fn sheets(&self) -> SheetService<'_> {
        SheetService::new(&self.db)
    }
}
