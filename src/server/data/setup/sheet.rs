use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

pub struct SheetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SheetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a sheet without layers
    ///
    /// Fails with a unique constraint violation if the creator already has a sheet with the
    /// same name.
    pub async fn create(
        &self,
        creator_id: i32,
        name: &str,
    ) -> Result<entity::setup_sheet::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let sheet = entity::setup_sheet::ActiveModel {
            creator_id: ActiveValue::Set(creator_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        sheet.insert(self.db).await
    }

    pub async fn get(&self, sheet_id: i32) -> Result<Option<entity::setup_sheet::Model>, DbErr> {
        entity::prelude::SetupSheet::find_by_id(sheet_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_creator(
        &self,
        creator_id: i32,
    ) -> Result<Vec<entity::setup_sheet::Model>, DbErr> {
        entity::prelude::SetupSheet::find()
            .filter(entity::setup_sheet::Column::CreatorId.eq(creator_id))
            .order_by_asc(entity::setup_sheet::Column::Id)
            .all(self.db)
            .await
    }

    /// Renames a sheet
    ///
    /// Returns `Ok(None)` if the sheet does not exist.
    pub async fn rename(
        &self,
        sheet_id: i32,
        name: &str,
    ) -> Result<Option<entity::setup_sheet::Model>, DbErr> {
        let Some(sheet) = self.get(sheet_id).await? else {
            return Ok(None);
        };

        let mut sheet_am = sheet.into_active_model();
        sheet_am.name = ActiveValue::Set(name.to_string());
        sheet_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(sheet_am.update(self.db).await?))
    }

    /// Bumps the sheet's `updated_at` timestamp after a layer change
    pub async fn touch(&self, sheet_id: i32) -> Result<(), DbErr> {
        entity::prelude::SetupSheet::update_many()
            .col_expr(
                entity::setup_sheet::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::setup_sheet::Column::Id.eq(sheet_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a sheet and all of its layers
    pub async fn delete(&self, sheet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SetupSheet::delete_by_id(sheet_id)
            .exec(self.db)
            .await
    }

    /// Get the sheet's layers in priority order, lowest priority first
    pub async fn get_layers(
        &self,
        sheet_id: i32,
    ) -> Result<Vec<entity::setup_sheet_layer::Model>, DbErr> {
        entity::prelude::SetupSheetLayer::find()
            .filter(entity::setup_sheet_layer::Column::SheetId.eq(sheet_id))
            .order_by_asc(entity::setup_sheet_layer::Column::Position)
            .order_by_asc(entity::setup_sheet_layer::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_layer(
        &self,
        layer_id: i32,
    ) -> Result<Option<entity::setup_sheet_layer::Model>, DbErr> {
        entity::prelude::SetupSheetLayer::find_by_id(layer_id)
            .one(self.db)
            .await
    }

    /// Appends a layer referencing `group_id` above every existing layer
    pub async fn append_layer(
        &self,
        sheet_id: i32,
        group_id: i32,
        enabled: bool,
    ) -> Result<entity::setup_sheet_layer::Model, DbErr> {
        let max_position: Option<i32> = entity::prelude::SetupSheetLayer::find()
            .select_only()
            .column_as(entity::setup_sheet_layer::Column::Position.max(), "max_position")
            .filter(entity::setup_sheet_layer::Column::SheetId.eq(sheet_id))
            .into_tuple::<Option<i32>>()
            .one(self.db)
            .await?
            .flatten();

        let now = Utc::now().naive_utc();
        let layer = entity::setup_sheet_layer::ActiveModel {
            sheet_id: ActiveValue::Set(sheet_id),
            group_id: ActiveValue::Set(group_id),
            enabled: ActiveValue::Set(enabled),
            position: ActiveValue::Set(max_position.map_or(0, |position| position + 1)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        layer.insert(self.db).await
    }

    /// Sets whether a layer takes part in resolution
    ///
    /// Returns `Ok(None)` if the layer does not exist.
    pub async fn set_layer_enabled(
        &self,
        layer_id: i32,
        enabled: bool,
    ) -> Result<Option<entity::setup_sheet_layer::Model>, DbErr> {
        let Some(layer) = self.get_layer(layer_id).await? else {
            return Ok(None);
        };

        let mut layer_am = layer.into_active_model();
        layer_am.enabled = ActiveValue::Set(enabled);
        layer_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(layer_am.update(self.db).await?))
    }

    /// Rewrites layer positions so `layer_ids[i]` sits at position `i`
    ///
    /// IDs are not checked against the sheet; should be run inside a transaction after the
    /// caller has verified `layer_ids` is a permutation of the sheet's layers.
    pub async fn set_layer_positions(&self, sheet_id: i32, layer_ids: &[i32]) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();

        for (position, layer_id) in layer_ids.iter().enumerate() {
            entity::prelude::SetupSheetLayer::update_many()
                .col_expr(
                    entity::setup_sheet_layer::Column::Position,
                    Expr::value(position as i32),
                )
                .col_expr(entity::setup_sheet_layer::Column::UpdatedAt, Expr::value(now))
                .filter(entity::setup_sheet_layer::Column::Id.eq(*layer_id))
                .filter(entity::setup_sheet_layer::Column::SheetId.eq(sheet_id))
                .exec(self.db)
                .await?;
        }

        Ok(())
    }

    /// Deletes a single layer, leaving gaps in the remaining positions
    pub async fn delete_layer(&self, layer_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SetupSheetLayer::delete_by_id(layer_id)
            .exec(self.db)
            .await
    }
}
