use chrono::{DateTime, Utc};

/// Audit module name used when the bot refuses to handle a message.
pub const MESSAGE_MODULE: &str = "Message";

/// One row of the audit log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub created_at: DateTime<Utc>,
    pub module: String,
    pub guild_id: Option<String>,
    pub text: String,
}

impl LogEntry {
    pub fn from_entity(entity: entity::bot_log::Model) -> Self {
        Self {
            created_at: entity.created_at,
            module: entity.module,
            guild_id: entity.guild_id,
            text: entity.text,
        }
    }
}
