use std::{sync::Arc, time::Duration};

use serenity::all::{Context, EventHandler, Guild, Message, Ready};
use serenity::async_trait;

use crate::{bot::dispatch::DispatchGate, service::gateway::DiscordGateway};

pub mod guild;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub gate: Arc<DispatchGate>,
    pub activity: Option<String>,
    pub gateway_timeout: Duration,
}

impl Handler {
    pub fn new(gate: Arc<DispatchGate>, activity: Option<String>, gateway_timeout: Duration) -> Self {
        Self {
            gate,
            activity,
            gateway_timeout,
        }
    }

    /// Gateway adapter over the context's shared HTTP client and cache.
    fn gateway(&self, ctx: &Context) -> DiscordGateway {
        DiscordGateway::new(ctx.http.clone(), ctx.cache.clone(), self.gateway_timeout)
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self.gate.state(), self.activity.as_deref(), ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, _ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(self.gate.state(), guild, is_new).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        let gateway = self.gateway(&ctx);
        message::handle_message(&self.gate, &gateway, &ctx, message).await;
    }
}
