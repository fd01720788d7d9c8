use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251018_000002_game::Game, m20251018_000003_hole::Hole};

static IDX_COURSE_GAME_ID: &str = "idx-course-game_id";
static IDX_COURSE_HOLE_COURSE_ID: &str = "idx-course_hole-course_id";
static FK_COURSE_GAME_ID: &str = "fk-course-game_id";
static FK_COURSE_HOLE_COURSE_ID: &str = "fk-course_hole-course_id";
static FK_COURSE_HOLE_HOLE_ID: &str = "fk-course_hole-hole_id";
static FK_COURSE_WIND_SPEED_COURSE_ID: &str = "fk-course_wind_speed-course_id";

/// Creates the course table along with its ordered hole list and wind speed set.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(integer(Course::GameId))
                    .col(string_len(Course::Name, 63))
                    .col(timestamp(Course::CreatedAt))
                    .col(timestamp(Course::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COURSE_GAME_ID)
                            .from(Course::Table, Course::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COURSE_GAME_ID)
                    .table(Course::Table)
                    .col(Course::GameId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseHole::Table)
                    .if_not_exists()
                    .col(pk_auto(CourseHole::Id))
                    .col(integer(CourseHole::CourseId))
                    .col(integer(CourseHole::HoleId))
                    .col(integer(CourseHole::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COURSE_HOLE_COURSE_ID)
                            .from(CourseHole::Table, CourseHole::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COURSE_HOLE_HOLE_ID)
                            .from(CourseHole::Table, CourseHole::HoleId)
                            .to(Hole::Table, Hole::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COURSE_HOLE_COURSE_ID)
                    .table(CourseHole::Table)
                    .col(CourseHole::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseWindSpeed::Table)
                    .if_not_exists()
                    .col(integer(CourseWindSpeed::CourseId))
                    .col(integer(CourseWindSpeed::WindSpeed))
                    .primary_key(
                        Index::create()
                            .col(CourseWindSpeed::CourseId)
                            .col(CourseWindSpeed::WindSpeed),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COURSE_WIND_SPEED_COURSE_ID)
                            .from(CourseWindSpeed::Table, CourseWindSpeed::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseWindSpeed::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COURSE_HOLE_COURSE_ID)
                    .table(CourseHole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CourseHole::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COURSE_GAME_ID)
                    .table(Course::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    GameId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseHole {
    Table,
    Id,
    CourseId,
    HoleId,
    Position,
}

#[derive(DeriveIden)]
enum CourseWindSpeed {
    Table,
    CourseId,
    WindSpeed,
}
