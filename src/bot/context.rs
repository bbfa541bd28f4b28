use std::sync::Arc;

use tracing::error;

use crate::{
    bot::command::CommandRegistry,
    data::bot_log::BotLogRepository,
    error::AppError,
    model::guild::GuildRecord,
    service::gateway::MessagingGateway,
    state::AppState,
};

/// Everything a command handler needs for one invocation.
pub struct CommandContext<'a> {
    pub state: &'a AppState,
    pub gateway: &'a dyn MessagingGateway,
    pub commands: &'a CommandRegistry,
    pub guild_id: String,
    /// Snapshot of the guild's configuration taken when the message arrived.
    pub guild: Arc<GuildRecord>,
    pub channel_id: String,
    pub user_id: String,
    /// Whitespace-split tokens after the command token.
    pub args: Vec<String>,
}

impl CommandContext<'_> {
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Arguments from `index` onwards joined by single spaces.
    pub fn rest(&self, index: usize) -> Option<String> {
        let rest = self.args.get(index..)?;
        if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        }
    }

    pub async fn reply(&self, text: impl AsRef<str>) -> Result<(), AppError> {
        self.gateway
            .send_message(&self.channel_id, text.as_ref())
            .await?;
        Ok(())
    }

    /// Appends an audit entry for this guild; failures are only logged.
    pub async fn log(&self, module: &str, text: &str) {
        if let Err(e) = BotLogRepository::new(&self.state.db)
            .create(module, Some(&self.guild_id), text)
            .await
        {
            error!("Failed to write {} audit entry: {:?}", module, e);
        }
    }

    pub async fn is_guild_admin(&self) -> Result<bool, AppError> {
        Ok(self
            .gateway
            .is_guild_admin(&self.guild_id, &self.user_id)
            .await?)
    }
}
