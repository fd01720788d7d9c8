use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000003_hole::Hole;

static IDX_PIN_HOLE_ID: &str = "idx-pin-hole_id";
static FK_PIN_HOLE_ID: &str = "fk-pin-hole_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pin::Table)
                    .if_not_exists()
                    .col(pk_auto(Pin::Id))
                    .col(integer(Pin::HoleId))
                    .col(string_len(Pin::Name, 63))
                    .col(timestamp(Pin::CreatedAt))
                    .col(timestamp(Pin::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PIN_HOLE_ID)
                            .from(Pin::Table, Pin::HoleId)
                            .to(Hole::Table, Hole::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PIN_HOLE_ID)
                    .table(Pin::Table)
                    .col(Pin::HoleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_PIN_HOLE_ID).table(Pin::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Pin::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Pin {
    Table,
    Id,
    HoleId,
    Name,
    CreatedAt,
    UpdatedAt,
}
