use serenity::async_trait;
use tracing::warn;

use crate::{
    bot::{command::Command, context::CommandContext},
    data::bot_log::BotLogRepository,
    error::{guild::GuildSettingError, AppError},
    model::guild::GuildSetting,
};

const DEFAULT_LOG_COUNT: u64 = 10;
const MAX_LOG_COUNT: u64 = 50;

/// `!b`, the bot management command.
pub struct SettingsCommand;

#[async_trait]
impl Command for SettingsCommand {
    fn name(&self) -> &'static str {
        "!b"
    }

    fn usage(&self) -> &'static str {
        "!b setconf <key> <value> | conflist | logs [n] | stats"
    }

    fn description(&self) -> &'static str {
        "Shows and changes the bot configuration of this server"
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), AppError> {
        match ctx.arg(0).map(str::to_lowercase).as_deref() {
            Some("setconf") => set_config(ctx).await,
            Some("conflist") => list_config(ctx).await,
            Some("logs") => show_logs(ctx).await,
            Some("stats") => show_stats(ctx).await,
            _ => ctx.reply(format!("Usage: `{}`", self.usage())).await,
        }
    }
}

async fn set_config(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.is_guild_admin().await? {
        return ctx
            .reply("Only server administrators can change the configuration")
            .await;
    }
    let (Some(key), Some(value)) = (ctx.arg(1), ctx.rest(2)) else {
        return ctx.reply("Usage: `!b setconf <key> <value>`").await;
    };

    let setting = match GuildSetting::parse(key, &value) {
        Ok(setting) => setting,
        Err(GuildSettingError::UnknownSetting(key)) => {
            return ctx
                .reply(format!(
                    "Unknown setting {}, available: {}",
                    key,
                    GuildSetting::KEYS.join(", ")
                ))
                .await;
        }
        Err(e) => return ctx.reply(e.to_string()).await,
    };

    match ctx.state.guilds.update(&ctx.guild_id, setting.clone()).await {
        Ok(_) => {
            ctx.log("Config", &format!("Set {}", setting)).await;
            ctx.reply(format!("Set {}", setting)).await
        }
        Err(e) => {
            warn!("Setting {} for guild {} not persisted: {}", setting, ctx.guild_id, e);
            ctx.reply(format!(
                "Set {} for now, but it could not be saved and will be lost on restart",
                setting
            ))
            .await
        }
    }
}

async fn list_config(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let lines: Vec<String> = ctx
        .guild
        .settings()
        .into_iter()
        .map(|(key, value)| format!("`{}` = {}", key, value))
        .collect();

    ctx.reply(lines.join("\n")).await
}

async fn show_logs(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.state.is_bot_admin(&ctx.user_id) {
        return ctx.reply("Only the bot administrator can read the logs").await;
    }

    let count = match ctx.arg(1) {
        None => DEFAULT_LOG_COUNT,
        Some(raw) => match raw.parse::<u64>() {
            Ok(count) => count.clamp(1, MAX_LOG_COUNT),
            Err(_) => return ctx.reply("Usage: `!b logs [n]`").await,
        },
    };

    let entries = BotLogRepository::new(&ctx.state.db)
        .get_recent(count)
        .await?;

    if entries.is_empty() {
        return ctx.reply("The log is empty").await;
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "`{}` [{}] {}{}",
                entry.created_at.format("%Y-%m-%d %H:%M:%S"),
                entry.module,
                entry
                    .guild_id
                    .as_deref()
                    .map(|id| format!("({}) ", id))
                    .unwrap_or_default(),
                entry.text
            )
        })
        .collect();

    ctx.reply(lines.join("\n")).await
}

async fn show_stats(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.state.is_bot_admin(&ctx.user_id) {
        return ctx.reply("Only the bot administrator can read the stats").await;
    }

    let stats = ctx.state.stats.snapshot();
    ctx.reply(format!(
        "Guilds: {}\nStreams: {}\nMessages this minute: {}\nMessages total: {}\nDenied: {}",
        ctx.state.guilds.len().await,
        ctx.state.streams.len().await,
        stats.window_messages,
        stats.total_messages,
        stats.denied_messages
    ))
    .await
}
