use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};

use crate::model::log::LogEntry;

pub struct BotLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an audit entry stamped with the current time.
    ///
    /// # Arguments
    /// - `module` - Component writing the entry, e.g. `"Message"`
    /// - `guild_id` - Guild the entry relates to, if any
    /// - `text` - Free-form description
    pub async fn create(
        &self,
        module: &str,
        guild_id: Option<&str>,
        text: &str,
    ) -> Result<LogEntry, DbErr> {
        let entity = entity::bot_log::ActiveModel {
            created_at: ActiveValue::Set(Utc::now()),
            module: ActiveValue::Set(module.to_string()),
            guild_id: ActiveValue::Set(guild_id.map(str::to_string)),
            text: ActiveValue::Set(text.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(LogEntry::from_entity(entity))
    }

    /// Gets the most recent audit entries, newest first.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<LogEntry>, DbErr> {
        let entities = entity::prelude::BotLog::find()
            .order_by_desc(entity::bot_log::Column::CreatedAt)
            .order_by_desc(entity::bot_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(LogEntry::from_entity).collect())
    }
}
