use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a user with the provided handle and all capability flags unset.
    ///
    /// The handle is inserted as-is without validation.
    pub async fn insert_user(&self, handle: &str) -> Result<entity::caddie_user::Model, TestError> {
        let now = Utc::now().naive_utc();
        let user = entity::caddie_user::ActiveModel {
            handle: ActiveValue::Set(handle.to_string()),
            verified: ActiveValue::Set(false),
            trusted: ActiveValue::Set(false),
            admin: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }
}
