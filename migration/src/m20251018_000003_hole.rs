use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000002_game::Game;

static IDX_HOLE_GAME_ID: &str = "idx-hole-game_id";
static FK_HOLE_GAME_ID: &str = "fk-hole-game_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hole::Table)
                    .if_not_exists()
                    .col(pk_auto(Hole::Id))
                    .col(integer(Hole::GameId))
                    .col(string_len(Hole::Name, 63))
                    .col(timestamp(Hole::CreatedAt))
                    .col(timestamp(Hole::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_HOLE_GAME_ID)
                            .from(Hole::Table, Hole::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HOLE_GAME_ID)
                    .table(Hole::Table)
                    .col(Hole::GameId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_HOLE_GAME_ID)
                    .table(Hole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Hole::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Hole {
    Table,
    Id,
    GameId,
    Name,
    CreatedAt,
    UpdatedAt,
}
