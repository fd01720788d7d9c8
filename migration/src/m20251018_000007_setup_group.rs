use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251018_000001_caddie_user::CaddieUser, m20251018_000006_setup::Setup};

static IDX_SETUP_GROUP_CREATOR_ID_NAME: &str = "idx-setup_group-creator_id-name";
static FK_SETUP_GROUP_CREATOR_ID: &str = "fk-setup_group-creator_id";
static FK_SETUP_GROUP_MEMBER_GROUP_ID: &str = "fk-setup_group_member-group_id";
static FK_SETUP_GROUP_MEMBER_SETUP_ID: &str = "fk-setup_group_member-setup_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SetupGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(SetupGroup::Id))
                    .col(integer(SetupGroup::CreatorId))
                    .col(string_len(SetupGroup::Name, 63))
                    .col(timestamp(SetupGroup::CreatedAt))
                    .col(timestamp(SetupGroup::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SETUP_GROUP_CREATOR_ID)
                            .from(SetupGroup::Table, SetupGroup::CreatorId)
                            .to(CaddieUser::Table, CaddieUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SETUP_GROUP_CREATOR_ID_NAME)
                    .table(SetupGroup::Table)
                    .col(SetupGroup::CreatorId)
                    .col(SetupGroup::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SetupGroupMember::Table)
                    .if_not_exists()
                    .col(integer(SetupGroupMember::GroupId))
                    .col(integer(SetupGroupMember::SetupId))
                    .col(timestamp(SetupGroupMember::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(SetupGroupMember::GroupId)
                            .col(SetupGroupMember::SetupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SETUP_GROUP_MEMBER_GROUP_ID)
                            .from(SetupGroupMember::Table, SetupGroupMember::GroupId)
                            .to(SetupGroup::Table, SetupGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SETUP_GROUP_MEMBER_SETUP_ID)
                            .from(SetupGroupMember::Table, SetupGroupMember::SetupId)
                            .to(Setup::Table, Setup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SetupGroupMember::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SETUP_GROUP_CREATOR_ID_NAME)
                    .table(SetupGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SetupGroup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SetupGroup {
    Table,
    Id,
    CreatorId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SetupGroupMember {
    Table,
    GroupId,
    SetupId,
    CreatedAt,
}
