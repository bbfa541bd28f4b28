use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use tracing::info;

use crate::{
    bot::{dispatch::DispatchGate, handler::Handler},
    config::Config,
    error::AppError,
};

/// Builds the Discord client without connecting.
///
/// The returned client exposes the HTTP client and cache the rest of the bot shares,
/// so it is built before the scheduler and started afterwards.
///
/// # Arguments
/// - `config` - Application configuration
/// - `gate` - Dispatch gate receiving every inbound message
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, gate: Arc<DispatchGate>) -> Result<Client, AppError> {
    // MESSAGE_CONTENT and GUILD_MEMBERS are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(gate, config.bot_activity.clone(), config.gateway_timeout);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot, blocking until all shards shut down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
