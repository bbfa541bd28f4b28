//! Ready event handler for bot initialization.
//!
//! The ready event carries the IDs of every guild the bot is in. Both registries are
//! hydrated from the store for those guilds before the bot starts answering commands
//! there.

use serenity::all::{ActivityData, Context, Ready};
use tracing::info;

use crate::state::AppState;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared registries to hydrate
/// - `activity` - Custom status to show, if configured
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information and guild IDs
pub async fn handle_ready(state: &AppState, activity: Option<&str>, ctx: Context, ready: Ready) {
    info!("{} is connected to Discord", ready.user.name);

    if let Some(activity) = activity {
        ctx.set_activity(Some(ActivityData::custom(activity)));
    }

    let guild_ids: Vec<String> = ready.guilds.iter().map(|g| g.id.to_string()).collect();

    let summary = state.guilds.hydrate(&guild_ids).await;
    let streams = state.streams.hydrate(&guild_ids).await;

    info!(
        "Ready in {} guilds ({} configs loaded, {} initiated, {} streams watched)",
        guild_ids.len(),
        summary.loaded,
        summary.created,
        streams
    );
}
