use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StreamWatch::Table)
                    .if_not_exists()
                    .col(pk_auto(StreamWatch::Id))
                    .col(string(StreamWatch::GuildId))
                    .col(string(StreamWatch::ChannelId))
                    .col(string(StreamWatch::Login))
                    .col(boolean(StreamWatch::IsOnline).default(false))
                    .col(string_null(StreamWatch::CustomMessage))
                    .col(string_null(StreamWatch::CustomImageUrl))
                    .to_owned(),
            )
            .await?;

        // A login may only be watched once per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_stream_watch_guild_login")
                    .table(StreamWatch::Table)
                    .col(StreamWatch::GuildId)
                    .col(StreamWatch::Login)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_stream_watch_guild_login")
                    .table(StreamWatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StreamWatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StreamWatch {
    Table,
    Id,
    GuildId,
    ChannelId,
    Login,
    IsOnline,
    CustomMessage,
    CustomImageUrl,
}
