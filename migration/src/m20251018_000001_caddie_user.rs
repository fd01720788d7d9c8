use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaddieUser::Table)
                    .if_not_exists()
                    .col(pk_auto(CaddieUser::Id))
                    .col(string_len_uniq(CaddieUser::Handle, 32))
                    .col(boolean(CaddieUser::Verified).default(false))
                    .col(boolean(CaddieUser::Trusted).default(false))
                    .col(boolean(CaddieUser::Admin).default(false))
                    .col(timestamp(CaddieUser::CreatedAt))
                    .col(timestamp(CaddieUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CaddieUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CaddieUser {
    Table,
    Id,
    Handle,
    Verified,
    Trusted,
    Admin,
    CreatedAt,
    UpdatedAt,
}
