use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::game::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let game = entity::game::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        game.insert(self.db).await
    }

    pub async fn get(&self, game_id: i32) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find_by_id(game_id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a game
    ///
    /// Courses, holes, pins and setups of the game are removed by the database through
    /// cascading foreign keys.
    pub async fn delete(&self, game_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Game::delete_by_id(game_id)
            .exec(self.db)
            .await
    }
}
