use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::model::guild::{GuildRecord, GuildSetting};

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the stored configuration of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    ///
    /// # Returns
    /// - `Ok(Some(GuildRecord))` - Configuration found
    /// - `Ok(None)` - The guild has never been persisted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: &str) -> Result<Option<GuildRecord>, DbErr> {
        let entity = entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await?;

        Ok(entity.map(GuildRecord::from_entity))
    }

    /// Inserts a complete guild configuration row.
    ///
    /// # Returns
    /// - `Ok(GuildRecord)` - The persisted record
    /// - `Err(DbErr)` - Database error, including a unique violation if the guild exists
    pub async fn create(&self, record: &GuildRecord) -> Result<GuildRecord, DbErr> {
        let entity = entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(record.guild_id.clone()),
            language: ActiveValue::Set(record.language.clone()),
            timezone: ActiveValue::Set(record.timezone),
            weather_city: ActiveValue::Set(record.weather_city.clone()),
            news_country: ActiveValue::Set(record.news_country.clone()),
            embed_color: ActiveValue::Set(record.embed_color as i32),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GuildRecord::from_entity(entity))
    }

    /// Writes a single setting column for a guild.
    ///
    /// Only the column belonging to the setting is touched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated; zero when the guild has no stored row
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_setting(
        &self,
        guild_id: &str,
        setting: &GuildSetting,
    ) -> Result<u64, DbErr> {
        use entity::guild_config::Column;

        let (column, value) = match setting {
            GuildSetting::Language(v) => (Column::Language, Expr::value(v.clone())),
            GuildSetting::Timezone(v) => (Column::Timezone, Expr::value(*v)),
            GuildSetting::WeatherCity(v) => (Column::WeatherCity, Expr::value(v.clone())),
            GuildSetting::NewsCountry(v) => (Column::NewsCountry, Expr::value(v.clone())),
            GuildSetting::EmbedColor(v) => (Column::EmbedColor, Expr::value(*v as i32)),
        };

        let result = entity::prelude::GuildConfig::update_many()
            .filter(Column::GuildId.eq(guild_id))
            .col_expr(column, value)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
