use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::setup::SetupFields, server::model::situation::Situation};

pub struct SetupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SetupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a setup owned by `creator_id`
    ///
    /// `game_id` must be the game of `fields.hole_id`. Fails with a unique constraint violation
    /// if the creator already has a setup with the same name.
    pub async fn create(
        &self,
        creator_id: i32,
        game_id: i32,
        fields: SetupFields,
    ) -> Result<entity::setup::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let setup = entity::setup::ActiveModel {
            creator_id: ActiveValue::Set(creator_id),
            name: ActiveValue::Set(fields.name),
            game_id: ActiveValue::Set(game_id),
            hole_id: ActiveValue::Set(fields.hole_id),
            pin_id: ActiveValue::Set(fields.pin_id),
            wind_speed: ActiveValue::Set(fields.wind_speed),
            objective: ActiveValue::Set(fields.objective),
            text: ActiveValue::Set(fields.text),
            image_url: ActiveValue::Set(fields.image_url),
            video_url: ActiveValue::Set(fields.video_url),
            time_ms: ActiveValue::Set(fields.time_ms),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        setup.insert(self.db).await
    }

    pub async fn get(&self, setup_id: i32) -> Result<Option<entity::setup::Model>, DbErr> {
        entity::prelude::Setup::find_by_id(setup_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_creator(
        &self,
        creator_id: i32,
    ) -> Result<Vec<entity::setup::Model>, DbErr> {
        entity::prelude::Setup::find()
            .filter(entity::setup::Column::CreatorId.eq(creator_id))
            .order_by_asc(entity::setup::Column::Id)
            .all(self.db)
            .await
    }

    /// Get every setup targeting `situation`, regardless of creator
    pub async fn get_by_situation(
        &self,
        situation: Situation,
    ) -> Result<Vec<entity::setup::Model>, DbErr> {
        entity::prelude::Setup::find()
            .filter(entity::setup::Column::HoleId.eq(situation.hole_id))
            .filter(entity::setup::Column::PinId.eq(situation.pin_id))
            .filter(entity::setup::Column::WindSpeed.eq(situation.wind_speed))
            .order_by_asc(entity::setup::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every caller-provided field of a setup
    ///
    /// Returns `Ok(None)` if the setup does not exist.
    pub async fn update(
        &self,
        setup_id: i32,
        game_id: i32,
        fields: SetupFields,
    ) -> Result<Option<entity::setup::Model>, DbErr> {
        let Some(setup) = self.get(setup_id).await? else {
            return Ok(None);
        };

        let mut setup_am = setup.into_active_model();
        setup_am.name = ActiveValue::Set(fields.name);
        setup_am.game_id = ActiveValue::Set(game_id);
        setup_am.hole_id = ActiveValue::Set(fields.hole_id);
        setup_am.pin_id = ActiveValue::Set(fields.pin_id);
        setup_am.wind_speed = ActiveValue::Set(fields.wind_speed);
        setup_am.objective = ActiveValue::Set(fields.objective);
        setup_am.text = ActiveValue::Set(fields.text);
        setup_am.image_url = ActiveValue::Set(fields.image_url);
        setup_am.video_url = ActiveValue::Set(fields.video_url);
        setup_am.time_ms = ActiveValue::Set(fields.time_ms);
        setup_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(setup_am.update(self.db).await?))
    }

    /// Deletes a setup, removing it from every group it belongs to
    pub async fn delete(&self, setup_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Setup::delete_by_id(setup_id)
            .exec(self.db)
            .await
    }
}
