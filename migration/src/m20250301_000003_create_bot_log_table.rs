use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BotLog::Table)
                    .if_not_exists()
                    .col(pk_auto(BotLog::Id))
                    .col(timestamp(BotLog::CreatedAt))
                    .col(string(BotLog::Module))
                    .col(string_null(BotLog::GuildId))
                    .col(text(BotLog::Text))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BotLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BotLog {
    Table,
    Id,
    CreatedAt,
    Module,
    GuildId,
    Text,
}
