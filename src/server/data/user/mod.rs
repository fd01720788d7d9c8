use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::handle::Handle;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with all capability flags unset
    ///
    /// Fails with a unique constraint violation if the handle is taken.
    pub async fn create(&self, handle: &Handle) -> Result<entity::caddie_user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::caddie_user::ActiveModel {
            handle: ActiveValue::Set(handle.as_str().to_string()),
            verified: ActiveValue::Set(false),
            trusted: ActiveValue::Set(false),
            admin: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::caddie_user::Model>, DbErr> {
        entity::prelude::CaddieUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<entity::caddie_user::Model>, DbErr> {
        entity::prelude::CaddieUser::find()
            .filter(entity::caddie_user::Column::Handle.eq(handle))
            .one(self.db)
            .await
    }

    /// Replaces the verified/trusted/admin flags of a user
    ///
    /// Returns `Ok(None)` if the user does not exist.
    pub async fn update_capabilities(
        &self,
        user_id: i32,
        verified: bool,
        trusted: bool,
        admin: bool,
    ) -> Result<Option<entity::caddie_user::Model>, DbErr> {
        let user = match entity::prelude::CaddieUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.verified = ActiveValue::Set(verified);
        user_am.trusted = ActiveValue::Set(trusted);
        user_am.admin = ActiveValue::Set(admin);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user, cascading to the setups, groups and sheets they created
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::CaddieUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
