use chrono::Utc;
use entity::sea_orm_active_enums::Objective;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct SetupFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SetupFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a `score` setup for the situation (hole, wind speed, pin) without media.
    ///
    /// No validation is performed, pins and wind speeds are stored as given.
    pub async fn insert_setup(
        &self,
        creator_id: i32,
        name: &str,
        hole: &entity::hole::Model,
        pin_id: i32,
        wind_speed: i32,
    ) -> Result<entity::setup::Model, TestError> {
        let now = Utc::now().naive_utc();
        let setup = entity::setup::ActiveModel {
            creator_id: ActiveValue::Set(creator_id),
            name: ActiveValue::Set(name.to_string()),
            game_id: ActiveValue::Set(hole.game_id),
            hole_id: ActiveValue::Set(hole.id),
            pin_id: ActiveValue::Set(pin_id),
            wind_speed: ActiveValue::Set(wind_speed),
            objective: ActiveValue::Set(Objective::Score),
            text: ActiveValue::Set(None),
            image_url: ActiveValue::Set(None),
            video_url: ActiveValue::Set(None),
            time_ms: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(setup.insert(self.db).await?)
    }

    /// Insert a group owned by `creator_id` holding the provided setups.
    pub async fn insert_group(
        &self,
        creator_id: i32,
        name: &str,
        setup_ids: &[i32],
    ) -> Result<entity::setup_group::Model, TestError> {
        let now = Utc::now().naive_utc();
        let group = entity::setup_group::ActiveModel {
            creator_id: ActiveValue::Set(creator_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for setup_id in setup_ids {
            entity::setup_group_member::ActiveModel {
                group_id: ActiveValue::Set(group.id),
                setup_id: ActiveValue::Set(*setup_id),
                created_at: ActiveValue::Set(now),
            }
            .insert(self.db)
            .await?;
        }

        Ok(group)
    }

    pub async fn insert_sheet(
        &self,
        creator_id: i32,
        name: &str,
    ) -> Result<entity::setup_sheet::Model, TestError> {
        let now = Utc::now().naive_utc();
        let sheet = entity::setup_sheet::ActiveModel {
            creator_id: ActiveValue::Set(creator_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(sheet.insert(self.db).await?)
    }

    /// Insert a sheet owned by `creator_id` with one layer per `(group_id, enabled)` entry,
    /// in the order given.
    pub async fn insert_sheet_with_layers(
        &self,
        creator_id: i32,
        name: &str,
        layers: &[(i32, bool)],
    ) -> Result<
        (
            entity::setup_sheet::Model,
            Vec<entity::setup_sheet_layer::Model>,
        ),
        TestError,
    > {
        let sheet = self.insert_sheet(creator_id, name).await?;

        let mut layer_models = Vec::with_capacity(layers.len());
        for (position, (group_id, enabled)) in layers.iter().enumerate() {
            layer_models.push(
                self.insert_layer(sheet.id, *group_id, *enabled, position as i32)
                    .await?,
            );
        }

        Ok((sheet, layer_models))
    }

    pub async fn insert_layer(
        &self,
        sheet_id: i32,
        group_id: i32,
        enabled: bool,
        position: i32,
    ) -> Result<entity::setup_sheet_layer::Model, TestError> {
        let now = Utc::now().naive_utc();
        let layer = entity::setup_sheet_layer::ActiveModel {
            sheet_id: ActiveValue::Set(sheet_id),
            group_id: ActiveValue::Set(group_id),
            enabled: ActiveValue::Set(enabled),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(layer.insert(self.db).await?)
    }
}
