use serenity::all::{Message, UserId};

/// Transport-independent view of an inbound chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundMessage {
    pub guild_id: Option<String>,
    pub channel_id: String,
    pub author_id: String,
    pub author_is_bot: bool,
    /// Set when the author is the bot's own account.
    pub from_self: bool,
    pub content: String,
}

impl InboundMessage {
    pub fn from_message(message: &Message, bot_user_id: UserId) -> Self {
        Self {
            guild_id: message.guild_id.map(|id| id.to_string()),
            channel_id: message.channel_id.to_string(),
            author_id: message.author.id.to_string(),
            author_is_bot: message.author.bot,
            from_self: message.author.id == bot_user_id,
            content: message.content.clone(),
        }
    }
}
