use thiserror::Error;

/// Failures talking to the Twitch Helix API.
#[derive(Error, Debug)]
pub enum TwitchError {
    /// The request exceeded its per-call timeout.
    #[error("Twitch API request timed out")]
    Timeout,

    /// The API answered with a non-success status code.
    #[error("Twitch API responded with status {0}")]
    Status(u16),

    /// The request could not be sent.
    #[error("Twitch API request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The response body was not the expected Helix envelope.
    #[error("Malformed Twitch API response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for TwitchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TwitchError::Timeout
        } else {
            TwitchError::Request(err)
        }
    }
}
