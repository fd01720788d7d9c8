use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251018_000001_caddie_user::CaddieUser, m20251018_000002_game::Game,
    m20251018_000003_hole::Hole, m20251018_000004_pin::Pin,
};

static IDX_SETUP_CREATOR_ID_NAME: &str = "idx-setup-creator_id-name";
static IDX_SETUP_SITUATION: &str = "idx-setup-hole_id-pin_id-wind_speed";
static FK_SETUP_CREATOR_ID: &str = "fk-setup-creator_id";
static FK_SETUP_GAME_ID: &str = "fk-setup-game_id";
static FK_SETUP_HOLE_ID: &str = "fk-setup-hole_id";
static FK_SETUP_PIN_ID: &str = "fk-setup-pin_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Setup::Table)
                    .if_not_exists()
                    .col(pk_auto(Setup::Id))
                    .col(integer(Setup::CreatorId))
                    .col(string_len(Setup::Name, 63))
                    .col(integer(Setup::GameId))
                    .col(integer(Setup::HoleId))
                    .col(integer(Setup::PinId))
                    .col(integer(Setup::WindSpeed))
                    .col(string_len(Setup::Objective, 8))
                    .col(string_len_null(Setup::Text, 255))
                    .col(string_null(Setup::ImageUrl))
                    .col(string_null(Setup::VideoUrl))
                    .col(integer_null(Setup::TimeMs))
                    .col(timestamp(Setup::CreatedAt))
                    .col(timestamp(Setup::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SETUP_CREATOR_ID)
                            .from(Setup::Table, Setup::CreatorId)
                            .to(CaddieUser::Table, CaddieUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SETUP_GAME_ID)
                            .from(Setup::Table, Setup::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SETUP_HOLE_ID)
                            .from(Setup::Table, Setup::HoleId)
                            .to(Hole::Table, Hole::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SETUP_PIN_ID)
                            .from(Setup::Table, Setup::PinId)
                            .to(Pin::Table, Pin::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SETUP_CREATOR_ID_NAME)
                    .table(Setup::Table)
                    .col(Setup::CreatorId)
                    .col(Setup::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SETUP_SITUATION)
                    .table(Setup::Table)
                    .col(Setup::HoleId)
                    .col(Setup::PinId)
                    .col(Setup::WindSpeed)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SETUP_SITUATION)
                    .table(Setup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SETUP_CREATOR_ID_NAME)
                    .table(Setup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Setup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Setup {
    Table,
    Id,
    CreatorId,
    Name,
    GameId,
    HoleId,
    PinId,
    WindSpeed,
    Objective,
    Text,
    ImageUrl,
    VideoUrl,
    TimeMs,
    CreatedAt,
    UpdatedAt,
}
