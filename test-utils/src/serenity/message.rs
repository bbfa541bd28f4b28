//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Fields of a test message that tests commonly vary.
#[derive(Debug, Clone)]
pub struct TestMessage<'a> {
    pub message_id: u64,
    pub channel_id: u64,
    /// `None` produces a direct message.
    pub guild_id: Option<u64>,
    pub author_id: u64,
    pub author_is_bot: bool,
    pub content: &'a str,
}

impl Default for TestMessage<'_> {
    fn default() -> Self {
        Self {
            message_id: 900000000000000001,
            channel_id: 300000000000000001,
            guild_id: Some(200000000000000001),
            author_id: 100000000000000001,
            author_is_bot: false,
            content: "",
        }
    }
}

/// Creates a test Serenity Message.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(message: TestMessage<'_>) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message.message_id.to_string(),
        "channel_id": message.channel_id.to_string(),
        "guild_id": message.guild_id.map(|id| id.to_string()),
        "author": {
            "id": message.author_id.to_string(),
            "username": "tester",
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": message.author_is_bot,
        },
        "content": message.content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
