use serde::Deserialize;

/// Envelope wrapping every Helix response body.
#[derive(Debug, Deserialize)]
pub struct HelixResponse<T> {
    pub data: Vec<T>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TwitchUser {
    pub id: String,
    pub login: String,
    pub display_name: String,
}

/// A live broadcast; Helix omits the entry entirely when the channel is offline.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct StreamStatus {
    pub user_login: String,
    pub user_name: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub viewer_count: u64,
    #[serde(default)]
    pub thumbnail_url: String,
}

impl StreamStatus {
    /// Thumbnail URL with the `{width}`/`{height}` placeholders filled in.
    pub fn thumbnail(&self, width: u32, height: u32) -> String {
        self.thumbnail_url
            .replace("{width}", &width.to_string())
            .replace("{height}", &height.to_string())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub id: String,
    pub name: String,
}
