use std::{future::Future, sync::Arc, time::Duration};

use serenity::{
    all::{
        Cache, ChannelId, CreateEmbed, CreateMessage, GuildId, Http, Member, Permissions, UserId,
    },
    async_trait,
};

use crate::{
    error::gateway::GatewayError, model::notification::Notification, util::parse::parse_snowflake,
};

/// Permissions the bot needs in a channel before it answers a command there.
pub fn required_permissions() -> Permissions {
    Permissions::SEND_MESSAGES | Permissions::ATTACH_FILES
}

/// Permissions inside a thread, given those in its parent channel.
///
/// Posting in a thread is governed by `SEND_MESSAGES_IN_THREADS` rather than
/// `SEND_MESSAGES`.
pub fn thread_permissions(parent: Permissions) -> Permissions {
    let mut granted = parent - Permissions::SEND_MESSAGES;
    if parent.send_messages_in_threads() {
        granted |= Permissions::SEND_MESSAGES;
    }
    granted
}

/// Outbound interface to the chat platform.
///
/// IDs are passed as the string snowflakes stored in the registries.
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    /// Effective permissions of the bot's own account in a channel.
    async fn bot_permissions(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> Result<Permissions, GatewayError>;

    /// Whether a member holds the administrator permission in a guild.
    async fn is_guild_admin(&self, guild_id: &str, user_id: &str) -> Result<bool, GatewayError>;

    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), GatewayError>;

    async fn send_notification(
        &self,
        channel_id: &str,
        notification: &Notification,
    ) -> Result<(), GatewayError>;
}

/// Checks that the bot holds every permission in `required_permissions`.
pub async fn ensure_can_reply(
    gateway: &dyn MessagingGateway,
    guild_id: &str,
    channel_id: &str,
) -> Result<(), GatewayError> {
    let granted = gateway.bot_permissions(guild_id, channel_id).await?;
    let missing = required_permissions() - granted;

    if missing.is_empty() {
        Ok(())
    } else {
        Err(GatewayError::PermissionDenied { missing })
    }
}

/// Discord implementation backed by the serenity cache and HTTP client.
pub struct DiscordGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
    timeout: Duration,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>, timeout: Duration) -> Self {
        Self {
            http,
            cache,
            timeout,
        }
    }

    async fn with_timeout<T, F>(&self, request: F) -> Result<T, GatewayError>
    where
        F: Future<Output = Result<T, serenity::Error>>,
    {
        tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| GatewayError::Timeout(self.timeout))?
            .map_err(GatewayError::from)
    }

    /// Member from the cache, falling back to the API when the cache has not seen them.
    async fn member(&self, guild_id: GuildId, user_id: UserId) -> Result<Member, GatewayError> {
        let cached = self
            .cache
            .guild(guild_id)
            .and_then(|guild| guild.members.get(&user_id).cloned());

        match cached {
            Some(member) => Ok(member),
            None => {
                self.with_timeout(self.http.get_member(guild_id, user_id))
                    .await
            }
        }
    }

    async fn send(&self, channel_id: &str, message: CreateMessage) -> Result<(), GatewayError> {
        let channel_id = ChannelId::new(parse_snowflake(channel_id)?);

        self.with_timeout(channel_id.send_message(&self.http, message))
            .await?;

        Ok(())
    }
}

#[async_trait]
impl MessagingGateway for DiscordGateway {
    async fn bot_permissions(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> Result<Permissions, GatewayError> {
        let guild_id = GuildId::new(parse_snowflake(guild_id)?);
        let channel_id = ChannelId::new(parse_snowflake(channel_id)?);
        let bot_id = self.cache.current_user().id;

        let member = self.member(guild_id, bot_id).await?;

        // Cache guards must not be held across an await.
        let guild = self
            .cache
            .guild(guild_id)
            .ok_or_else(|| GatewayError::NotCached {
                kind: "Guild",
                id: guild_id.to_string(),
            })?;

        if let Some(channel) = guild.channels.get(&channel_id) {
            return Ok(guild.user_permissions_in(channel, &member));
        }

        // Threads are not in the channel map; they inherit from their parent.
        let parent = guild
            .threads
            .iter()
            .find(|thread| thread.id == channel_id)
            .and_then(|thread| thread.parent_id)
            .and_then(|parent_id| guild.channels.get(&parent_id))
            .ok_or_else(|| GatewayError::NotCached {
                kind: "Channel",
                id: channel_id.to_string(),
            })?;

        Ok(thread_permissions(guild.user_permissions_in(parent, &member)))
    }

    async fn is_guild_admin(&self, guild_id: &str, user_id: &str) -> Result<bool, GatewayError> {
        let guild_id = GuildId::new(parse_snowflake(guild_id)?);
        let user_id = UserId::new(parse_snowflake(user_id)?);

        let member = self.member(guild_id, user_id).await?;

        let guild = self
            .cache
            .guild(guild_id)
            .ok_or_else(|| GatewayError::NotCached {
                kind: "Guild",
                id: guild_id.to_string(),
            })?;

        Ok(guild.member_permissions(&member).administrator())
    }

    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), GatewayError> {
        self.send(channel_id, CreateMessage::new().content(text))
            .await
    }

    async fn send_notification(
        &self,
        channel_id: &str,
        notification: &Notification,
    ) -> Result<(), GatewayError> {
        let mut embed = CreateEmbed::new().color(notification.color);

        if let Some(title) = &notification.title {
            embed = embed.title(title);
        }
        if let Some(url) = &notification.url {
            embed = embed.url(url);
        }
        for field in &notification.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }
        if let Some(image_url) = &notification.image_url {
            embed = embed.image(image_url);
        }

        let message = CreateMessage::new()
            .content(&notification.content)
            .embed(embed);

        self.send(channel_id, message).await
    }
}
