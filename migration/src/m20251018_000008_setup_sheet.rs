use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000001_caddie_user::CaddieUser;

static IDX_SETUP_SHEET_CREATOR_ID_NAME: &str = "idx-setup_sheet-creator_id-name";
static IDX_SETUP_SHEET_LAYER_SHEET_ID: &str = "idx-setup_sheet_layer-sheet_id";
static FK_SETUP_SHEET_CREATOR_ID: &str = "fk-setup_sheet-creator_id";
static FK_SETUP_SHEET_LAYER_SHEET_ID: &str = "fk-setup_sheet_layer-sheet_id";

/// Creates setup sheets and their layers.
///
/// Layers reference groups by ID only, without a foreign key, so deleting a group
/// leaves any layer pointing at it in place.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SetupSheet::Table)
                    .if_not_exists()
                    .col(pk_auto(SetupSheet::Id))
                    .col(integer(SetupSheet::CreatorId))
                    .col(string_len(SetupSheet::Name, 63))
                    .col(timestamp(SetupSheet::CreatedAt))
                    .col(timestamp(SetupSheet::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SETUP_SHEET_CREATOR_ID)
                            .from(SetupSheet::Table, SetupSheet::CreatorId)
                            .to(CaddieUser::Table, CaddieUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SETUP_SHEET_CREATOR_ID_NAME)
                    .table(SetupSheet::Table)
                    .col(SetupSheet::CreatorId)
                    .col(SetupSheet::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SetupSheetLayer::Table)
                    .if_not_exists()
                    .col(pk_auto(SetupSheetLayer::Id))
                    .col(integer(SetupSheetLayer::SheetId))
                    .col(integer(SetupSheetLayer::GroupId))
                    .col(boolean(SetupSheetLayer::Enabled).default(true))
                    .col(integer(SetupSheetLayer::Position))
                    .col(timestamp(SetupSheetLayer::CreatedAt))
                    .col(timestamp(SetupSheetLayer::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SETUP_SHEET_LAYER_SHEET_ID)
                            .from(SetupSheetLayer::Table, SetupSheetLayer::SheetId)
                            .to(SetupSheet::Table, SetupSheet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SETUP_SHEET_LAYER_SHEET_ID)
                    .table(SetupSheetLayer::Table)
                    .col(SetupSheetLayer::SheetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SETUP_SHEET_LAYER_SHEET_ID)
                    .table(SetupSheetLayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SetupSheetLayer::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SETUP_SHEET_CREATOR_ID_NAME)
                    .table(SetupSheet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SetupSheet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SetupSheet {
    Table,
    Id,
    CreatorId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SetupSheetLayer {
    Table,
    Id,
    SheetId,
    GroupId,
    Enabled,
    Position,
    CreatedAt,
    UpdatedAt,
}
