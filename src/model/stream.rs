use std::sync::atomic::{AtomicBool, Ordering};

const TWITCH_CHANNEL_URL: &str = "https://www.twitch.tv";

/// Optional per-watch replacement for the default live notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomNotification {
    /// Message template; may reference `{name}`, `{login}`, `{title}`, `{game}` and `{url}`.
    pub message: Option<String>,
    pub image_url: Option<String>,
}

/// One watched (guild, login) pair.
///
/// Shared between the flat sequence and the guild group of the stream registry.
/// The online flag is only written while the registry's write guard is held.
#[derive(Debug)]
pub struct StreamWatch {
    pub guild_id: String,
    pub channel_id: String,
    pub login: String,
    pub custom: CustomNotification,
    online: AtomicBool,
}

impl StreamWatch {
    pub fn new(
        guild_id: &str,
        channel_id: &str,
        login: &str,
        online: bool,
        custom: CustomNotification,
    ) -> Self {
        Self {
            guild_id: guild_id.to_string(),
            channel_id: channel_id.to_string(),
            login: login.to_lowercase(),
            custom,
            online: AtomicBool::new(online),
        }
    }

    pub fn from_entity(entity: entity::stream_watch::Model) -> Self {
        Self::new(
            &entity.guild_id,
            &entity.channel_id,
            &entity.login,
            entity.is_online,
            CustomNotification {
                message: entity.custom_message,
                image_url: entity.custom_image_url,
            },
        )
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    pub(crate) fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Release);
    }

    pub fn matches(&self, guild_id: &str, login: &str) -> bool {
        self.guild_id == guild_id && self.login.eq_ignore_ascii_case(login)
    }

    pub fn stream_url(&self) -> String {
        format!("{}/{}", TWITCH_CHANNEL_URL, self.login)
    }
}
