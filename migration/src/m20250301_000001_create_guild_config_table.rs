use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildConfig::Id))
                    .col(string_uniq(GuildConfig::GuildId))
                    .col(string(GuildConfig::Language))
                    .col(integer(GuildConfig::Timezone))
                    .col(string(GuildConfig::WeatherCity))
                    .col(string(GuildConfig::NewsCountry))
                    .col(integer(GuildConfig::EmbedColor))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildConfig {
    Table,
    Id,
    GuildId,
    Language,
    Timezone,
    WeatherCity,
    NewsCountry,
    EmbedColor,
}
