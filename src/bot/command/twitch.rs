use serenity::async_trait;

use crate::{
    bot::{command::Command, context::CommandContext},
    error::{stream::StreamError, AppError},
    model::stream::CustomNotification,
};

const MODULE: &str = "Twitch";

/// `!twitch add|remove|list`, managing the streams announced in a guild.
pub struct TwitchCommand;

#[async_trait]
impl Command for TwitchCommand {
    fn name(&self) -> &'static str {
        "!twitch"
    }

    fn usage(&self) -> &'static str {
        "!twitch add <login> [message] | remove <login> | list"
    }

    fn description(&self) -> &'static str {
        "Announces when Twitch streams go live in this channel"
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), AppError> {
        match ctx.arg(0).map(str::to_lowercase).as_deref() {
            Some("add") => add(ctx).await,
            Some("remove") => remove(ctx).await,
            Some("list") => list(ctx).await,
            _ => ctx.reply(format!("Usage: `{}`", self.usage())).await,
        }
    }
}

async fn add(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.is_guild_admin().await? {
        return ctx.reply("Only server administrators can add streams").await;
    }
    let Some(login) = ctx.arg(1) else {
        return ctx.reply("Usage: `!twitch add <login> [message]`").await;
    };

    let custom = CustomNotification {
        message: ctx.rest(2),
        image_url: None,
    };

    match ctx
        .state
        .streams
        .add_stream(&ctx.guild_id, &ctx.channel_id, login, custom)
        .await
    {
        Ok(display_name) => {
            ctx.log(MODULE, &format!("Added stream {}", login)).await;
            ctx.reply(format!(
                "Stream {} will be announced in this channel",
                display_name
            ))
            .await
        }
        Err(e) => ctx.reply(stream_error_reply(&e)).await,
    }
}

async fn remove(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !ctx.is_guild_admin().await? {
        return ctx.reply("Only server administrators can remove streams").await;
    }
    let Some(login) = ctx.arg(1) else {
        return ctx.reply("Usage: `!twitch remove <login>`").await;
    };

    match ctx.state.streams.remove_stream(&ctx.guild_id, login).await {
        Ok(_) => {
            ctx.log(MODULE, &format!("Removed stream {}", login)).await;
            ctx.reply(format!("Stream {} removed", login)).await
        }
        Err(e) => ctx.reply(stream_error_reply(&e)).await,
    }
}

async fn list(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let streams = ctx.state.streams.guild_streams(&ctx.guild_id).await;

    if streams.is_empty() {
        return ctx.reply("No streams are watched in this server").await;
    }

    let lines: Vec<String> = streams
        .iter()
        .map(|watch| {
            format!(
                "{} in <#{}>{}",
                watch.login,
                watch.channel_id,
                if watch.is_online() { " (live)" } else { "" }
            )
        })
        .collect();

    ctx.reply(lines.join("\n")).await
}

fn stream_error_reply(error: &StreamError) -> String {
    match error {
        StreamError::AlreadyExists { login, .. } => {
            format!("Stream {} is already watched in this server", login)
        }
        StreamError::NotFound { login, .. } => {
            format!("Stream {} is not watched in this server", login)
        }
        StreamError::UnknownLogin(login) => format!("Twitch user {} does not exist", login),
        StreamError::ExternalService(_) => {
            "Twitch did not answer, please try again later".to_string()
        }
        StreamError::Persistence(_) => "Failed to save the change, please try again".to_string(),
    }
}
