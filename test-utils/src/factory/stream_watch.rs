//! Stream watch factory for creating test rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating watched stream rows.
///
/// The guild is required; channel and login default to unique generated values.
pub struct StreamWatchFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    login: String,
    is_online: bool,
    custom_message: Option<String>,
    custom_image_url: Option<String>,
}

impl<'a> StreamWatchFactory<'a> {
    /// Creates a new StreamWatchFactory for the given guild.
    ///
    /// Defaults:
    /// - channel_id: auto-incremented id
    /// - login: `"streamer_{id}"`
    /// - is_online: `false`
    /// - no custom notification
    pub fn new(db: &'a DatabaseConnection, guild_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.to_string(),
            channel_id: id.to_string(),
            login: format!("streamer_{}", id),
            is_online: false,
            custom_message: None,
            custom_image_url: None,
        }
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = login.into();
        self
    }

    pub fn online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    pub fn custom_message(mut self, message: Option<String>) -> Self {
        self.custom_message = message;
        self
    }

    pub fn custom_image_url(mut self, url: Option<String>) -> Self {
        self.custom_image_url = url;
        self
    }

    /// Builds and inserts the stream watch row.
    pub async fn build(self) -> Result<entity::stream_watch::Model, DbErr> {
        entity::stream_watch::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            login: ActiveValue::Set(self.login),
            is_online: ActiveValue::Set(self.is_online),
            custom_message: ActiveValue::Set(self.custom_message),
            custom_image_url: ActiveValue::Set(self.custom_image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an offline stream watch with a generated login in the given guild.
pub async fn create_stream_watch(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::stream_watch::Model, DbErr> {
    StreamWatchFactory::new(db, guild_id).build().await
}
