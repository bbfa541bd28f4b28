use serenity::all::Guild;
use tracing::info;

use crate::state::AppState;

/// Handles guild availability and guild joins.
///
/// Makes sure the guild has a configuration record and a stream group. Both calls are
/// no-ops for guilds already hydrated at ready.
pub async fn handle_guild_create(state: &AppState, guild: Guild, is_new: Option<bool>) {
    let guild_id = guild.id.to_string();

    if is_new == Some(true) {
        info!("Joined guild {} ({})", guild.name, guild_id);
    }

    state.guilds.get_or_create(&guild_id).await;
    state.streams.hydrate(&[guild_id]).await;
}
