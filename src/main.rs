mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use tracing::{error, info};

use crate::{
    bot::{command::CommandRegistry, dispatch::DispatchGate},
    config::Config,
    error::AppError,
    service::{
        gateway::DiscordGateway, guild_registry::GuildRegistry, presence::PresenceWatcher,
        stats::BotStats, stream_registry::StreamRegistry, twitch::TwitchClient,
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let twitch = Arc::new(TwitchClient::new(http_client, &config.twitch));

    let guilds = Arc::new(GuildRegistry::new(
        db.clone(),
        config.guild_defaults.clone(),
    ));
    let streams = Arc::new(StreamRegistry::new(
        db.clone(),
        twitch.clone(),
        config.twitch.request_timeout,
    ));
    let stats = Arc::new(BotStats::new());

    let state = AppState::new(
        db.clone(),
        guilds.clone(),
        streams.clone(),
        stats.clone(),
        config.bot_admin_id,
    );
    let gate = Arc::new(DispatchGate::new(state, CommandRegistry::with_builtin()));

    let client = bot::start::init_bot(&config, gate).await?;
    let shard_manager = client.shard_manager.clone();

    let gateway = Arc::new(DiscordGateway::new(
        client.http.clone(),
        client.cache.clone(),
        config.gateway_timeout,
    ));
    let watcher = Arc::new(PresenceWatcher::new(
        streams,
        guilds,
        twitch,
        gateway,
        config.twitch.request_timeout,
    ));

    let mut scheduler =
        scheduler::start_scheduler(&config.stream_sweep_schedule, watcher, stats.clone()).await?;

    let bot = tokio::spawn(bot::start::start_bot(client));

    tokio::select! {
        result = bot => {
            match result {
                Ok(Ok(())) => info!("Discord bot stopped"),
                Ok(Err(e)) => error!("Discord bot error: {}", e),
                Err(e) => error!("Discord bot task failed: {}", e),
            }
        }
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutting down");
            shard_manager.shutdown_all().await;
        }
    }

    if let Err(e) = scheduler.shutdown().await {
        error!("Failed to stop scheduler: {}", e);
    }

    let snapshot = stats.snapshot();
    info!(
        "Handled {} messages ({} denied)",
        snapshot.total_messages, snapshot.denied_messages
    );

    db.close().await?;

    Ok(())
}
