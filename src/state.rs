//! Application state shared by the event handler, the commands and the scheduler.
//!
//! Built once in `main`. Every field is cheap to clone: the database handle is a pool
//! and the registries and counters are reference counted.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::service::{
    guild_registry::GuildRegistry, stats::BotStats, stream_registry::StreamRegistry,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly for the audit log.
    pub db: DatabaseConnection,

    pub guilds: Arc<GuildRegistry>,
    pub streams: Arc<StreamRegistry>,
    pub stats: Arc<BotStats>,

    /// Discord user allowed to run bot-admin commands.
    pub bot_admin_id: Option<String>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        guilds: Arc<GuildRegistry>,
        streams: Arc<StreamRegistry>,
        stats: Arc<BotStats>,
        bot_admin_id: Option<u64>,
    ) -> Self {
        Self {
            db,
            guilds,
            streams,
            stats,
            bot_admin_id: bot_admin_id.map(|id| id.to_string()),
        }
    }

    pub fn is_bot_admin(&self, user_id: &str) -> bool {
        self.bot_admin_id.as_deref() == Some(user_id)
    }
}
