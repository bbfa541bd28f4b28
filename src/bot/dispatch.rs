//! Routes inbound messages to commands.
//!
//! The gate filters messages the bot must not answer, checks that it can reply in
//! the channel, and invokes the matched command with a fresh `CommandContext`.

use tracing::{debug, error, trace, warn};

use crate::{
    bot::{command::CommandRegistry, context::CommandContext},
    data::bot_log::BotLogRepository,
    model::{log::MESSAGE_MODULE, message::InboundMessage},
    service::gateway::{ensure_can_reply, MessagingGateway},
    state::AppState,
};

/// What the gate did with a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Sent by the bot itself.
    IgnoredSelf,
    /// Sent by another automated account.
    IgnoredBot,
    /// Direct message outside any guild.
    IgnoredDirect,
    /// The first token matches no registered command.
    UnknownCommand,
    /// The bot cannot reply in the channel; the command was not run.
    Denied,
    /// The command ran to completion.
    Handled(&'static str),
    /// The command returned an error, which was logged.
    Failed(&'static str),
}

pub struct DispatchGate {
    state: AppState,
    commands: CommandRegistry,
}

impl DispatchGate {
    pub fn new(state: AppState, commands: CommandRegistry) -> Self {
        Self { state, commands }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn dispatch(
        &self,
        gateway: &dyn MessagingGateway,
        message: InboundMessage,
    ) -> DispatchOutcome {
        self.state.stats.record_message();

        if message.from_self {
            return DispatchOutcome::IgnoredSelf;
        }
        if message.author_is_bot {
            return DispatchOutcome::IgnoredBot;
        }
        let Some(guild_id) = message.guild_id else {
            return DispatchOutcome::IgnoredDirect;
        };

        let mut tokens = message.content.split_whitespace();
        let Some(command) = tokens.next().and_then(|token| self.commands.get(token)) else {
            trace!("Ignoring message without command in guild {}", guild_id);
            return DispatchOutcome::UnknownCommand;
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();

        if let Err(e) = ensure_can_reply(gateway, &guild_id, &message.channel_id).await {
            warn!(
                "Not handling {} in channel {} of guild {}: {}",
                command.name(),
                message.channel_id,
                guild_id,
                e
            );
            self.state.stats.record_denied();

            if let Err(e) = BotLogRepository::new(&self.state.db)
                .create(
                    MESSAGE_MODULE,
                    Some(&guild_id),
                    &format!("Cannot reply in channel {}: {}", message.channel_id, e),
                )
                .await
            {
                error!("Failed to write {} audit entry: {:?}", MESSAGE_MODULE, e);
            }

            return DispatchOutcome::Denied;
        }

        let guild = self.state.guilds.get_or_create(&guild_id).await;
        let ctx = CommandContext {
            state: &self.state,
            gateway,
            commands: &self.commands,
            guild_id,
            guild,
            channel_id: message.channel_id,
            user_id: message.author_id,
            args,
        };

        debug!(
            "Running {} for user {} in guild {}",
            command.name(),
            ctx.user_id,
            ctx.guild_id
        );

        match command.execute(&ctx).await {
            Ok(()) => DispatchOutcome::Handled(command.name()),
            Err(e) => {
                error!(
                    "Command {} failed in guild {}: {}",
                    command.name(),
                    ctx.guild_id,
                    e
                );
                DispatchOutcome::Failed(command.name())
            }
        }
    }
}
