//! Guild configuration factory for creating test rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configuration rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let guild = GuildConfigFactory::new(&db)
///     .guild_id("987654321")
///     .language("fr")
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    language: String,
    timezone: i32,
    weather_city: String,
    news_country: String,
    embed_color: i32,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented id
    /// - language: `"en"`
    /// - timezone: `0`
    /// - weather_city: `"London"`
    /// - news_country: `"us"`
    /// - embed_color: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            language: "en".to_string(),
            timezone: 0,
            weather_city: "London".to_string(),
            news_country: "us".to_string(),
            embed_color: 0,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn timezone(mut self, timezone: i32) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn weather_city(mut self, weather_city: impl Into<String>) -> Self {
        self.weather_city = weather_city.into();
        self
    }

    pub fn news_country(mut self, news_country: impl Into<String>) -> Self {
        self.news_country = news_country.into();
        self
    }

    pub fn embed_color(mut self, embed_color: i32) -> Self {
        self.embed_color = embed_color;
        self
    }

    /// Builds and inserts the guild configuration row.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            language: ActiveValue::Set(self.language),
            timezone: ActiveValue::Set(self.timezone),
            weather_city: ActiveValue::Set(self.weather_city),
            news_country: ActiveValue::Set(self.news_country),
            embed_color: ActiveValue::Set(self.embed_color),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild configuration row with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}
