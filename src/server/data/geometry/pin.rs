use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct PinRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PinRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, hole_id: i32, name: &str) -> Result<entity::pin::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let pin = entity::pin::ActiveModel {
            hole_id: ActiveValue::Set(hole_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        pin.insert(self.db).await
    }

    pub async fn get(&self, pin_id: i32) -> Result<Option<entity::pin::Model>, DbErr> {
        entity::prelude::Pin::find_by_id(pin_id).one(self.db).await
    }

    pub async fn get_by_hole(&self, hole_id: i32) -> Result<Vec<entity::pin::Model>, DbErr> {
        entity::prelude::Pin::find()
            .filter(entity::pin::Column::HoleId.eq(hole_id))
            .order_by_asc(entity::pin::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, pin_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pin::delete_by_id(pin_id).exec(self.db).await
    }
}
