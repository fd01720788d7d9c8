use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct HoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, game_id: i32, name: &str) -> Result<entity::hole::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let hole = entity::hole::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        hole.insert(self.db).await
    }

    pub async fn get(&self, hole_id: i32) -> Result<Option<entity::hole::Model>, DbErr> {
        entity::prelude::Hole::find_by_id(hole_id).one(self.db).await
    }

    /// Get the holes with the provided IDs, in no particular order
    ///
    /// IDs without a matching hole are omitted from the result.
    pub async fn get_many(&self, hole_ids: &[i32]) -> Result<Vec<entity::hole::Model>, DbErr> {
        if hole_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Hole::find()
            .filter(entity::hole::Column::Id.is_in(hole_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get_by_game(&self, game_id: i32) -> Result<Vec<entity::hole::Model>, DbErr> {
        entity::prelude::Hole::find()
            .filter(entity::hole::Column::GameId.eq(game_id))
            .order_by_asc(entity::hole::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a hole, cascading to its pins, its setups and its place in course hole orders
    pub async fn delete(&self, hole_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Hole::delete_by_id(hole_id)
            .exec(self.db)
            .await
    }
}
