pub use super::bot_log::Entity as BotLog;
pub use super::guild_config::Entity as GuildConfig;
pub use super::stream_watch::Entity as StreamWatch;
