//! Chat commands and the registry that routes tokens to them.

pub mod help;
pub mod settings;
pub mod twitch;

use std::{collections::HashMap, sync::Arc};

use serenity::async_trait;

use crate::{bot::context::CommandContext, error::AppError};

#[async_trait]
pub trait Command: Send + Sync {
    /// Token that invokes the command, including its prefix.
    fn name(&self) -> &'static str;

    fn usage(&self) -> &'static str;

    fn description(&self) -> &'static str;

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), AppError>;
}

/// Immutable token to command mapping, built once at startup.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
    order: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every built-in command.
    pub fn with_builtin() -> Self {
        Self::new()
            .register(help::HelpCommand)
            .register(twitch::TwitchCommand)
            .register(settings::SettingsCommand)
    }

    pub fn register(mut self, command: impl Command + 'static) -> Self {
        let command: Arc<dyn Command> = Arc::new(command);
        self.commands
            .insert(command.name().to_lowercase(), command.clone());
        self.order.push(command);
        self
    }

    /// Looks a command up by token, ignoring case.
    pub fn get(&self, token: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(&token.to_lowercase()).cloned()
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.order.iter()
    }
}

#[cfg(test)]
pub(crate) mod test {
    //! Shared setup for command tests.

    use std::{sync::Arc, time::Duration};

    use sea_orm::DatabaseConnection;
    use test_utils::builder::TestBuilder;

    use crate::{
        bot::{command::CommandRegistry, context::CommandContext},
        model::guild::GuildDefaults,
        service::{
            fake::{FakeGateway, FakeTwitch},
            guild_registry::GuildRegistry,
            stats::BotStats,
            stream_registry::StreamRegistry,
        },
        state::AppState,
    };

    pub const GUILD: &str = "G1";
    pub const CHANNEL: &str = "C1";
    pub const USER: &str = "U1";
    pub const BOT_ADMIN: &str = "99";

    pub struct Fixture {
        pub db: DatabaseConnection,
        pub state: AppState,
        pub gateway: FakeGateway,
        pub twitch: Arc<FakeTwitch>,
        pub commands: CommandRegistry,
    }

    impl Fixture {
        pub async fn new() -> Self {
            let mut test = TestBuilder::new().with_bot_tables().build().await.unwrap();
            let db = test.db_handle().await.unwrap();

            let twitch = Arc::new(FakeTwitch::new());
            let guilds = Arc::new(GuildRegistry::new(db.clone(), GuildDefaults::default()));
            let streams = Arc::new(StreamRegistry::new(
                db.clone(),
                twitch.clone(),
                Duration::from_secs(1),
            ));
            let state = AppState::new(
                db.clone(),
                guilds,
                streams,
                Arc::new(BotStats::new()),
                Some(99),
            );

            Self {
                db,
                state,
                gateway: FakeGateway::new(),
                twitch,
                commands: CommandRegistry::with_builtin(),
            }
        }

        pub async fn context(&self, user_id: &str, args: &[&str]) -> CommandContext<'_> {
            CommandContext {
                state: &self.state,
                gateway: &self.gateway,
                commands: &self.commands,
                guild_id: GUILD.to_string(),
                guild: self.state.guilds.get_or_create(GUILD).await,
                channel_id: CHANNEL.to_string(),
                user_id: user_id.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
            }
        }

        /// Text of every reply sent so far.
        pub fn replies(&self) -> Vec<String> {
            self.gateway
                .sent_messages()
                .into_iter()
                .map(|(_, text)| text)
                .collect()
        }
    }
}
