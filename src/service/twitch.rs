use std::time::Duration;

use serde::de::DeserializeOwned;
use serenity::async_trait;

use crate::{
    config::TwitchConfig,
    error::twitch::TwitchError,
    model::twitch::{Game, HelixResponse, StreamStatus, TwitchUser},
};

/// Lookup interface to the streaming service.
#[async_trait]
pub trait StreamingStatus: Send + Sync {
    /// Resolves an account by login; `Ok(None)` when no such account exists.
    async fn get_user(&self, login: &str) -> Result<Option<TwitchUser>, TwitchError>;

    /// Current broadcast of a login; `Ok(None)` when the channel is offline.
    async fn get_stream(&self, login: &str) -> Result<Option<StreamStatus>, TwitchError>;

    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, TwitchError>;
}

/// Twitch Helix client.
pub struct TwitchClient {
    http: reqwest::Client,
    api_url: String,
    client_id: String,
    access_token: Option<String>,
    timeout: Duration,
}

impl TwitchClient {
    pub fn new(http: reqwest::Client, config: &TwitchConfig) -> Self {
        Self {
            http,
            api_url: config.api_url.clone(),
            client_id: config.client_id.clone(),
            access_token: config.access_token.clone(),
            timeout: config.request_timeout,
        }
    }

    /// Issues a GET against a Helix endpoint and returns the first `data` element.
    async fn fetch_first<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, TwitchError> {
        let mut request = self
            .http
            .get(format!("{}/{}", self.api_url, path))
            .query(query)
            .header("Client-ID", &self.client_id)
            .timeout(self.timeout);

        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TwitchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: HelixResponse<T> =
            serde_json::from_str(&body).map_err(|e| TwitchError::Malformed(e.to_string()))?;

        Ok(envelope.data.into_iter().next())
    }
}

#[async_trait]
impl StreamingStatus for TwitchClient {
    async fn get_user(&self, login: &str) -> Result<Option<TwitchUser>, TwitchError> {
        self.fetch_first("users", &[("login", login)]).await
    }

    async fn get_stream(&self, login: &str) -> Result<Option<StreamStatus>, TwitchError> {
        self.fetch_first("streams", &[("user_login", login)]).await
    }

    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, TwitchError> {
        self.fetch_first("games", &[("id", game_id)]).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    fn client(server: &mockito::ServerGuard, token: Option<&str>) -> TwitchClient {
        TwitchClient::new(
            reqwest::Client::new(),
            &TwitchConfig {
                api_url: server.url(),
                client_id: "test-client".to_string(),
                access_token: token.map(str::to_string),
                request_timeout: Duration::from_secs(2),
            },
        )
    }

    #[tokio::test]
    async fn resolves_user_by_login() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users")
            .match_query(Matcher::UrlEncoded("login".into(), "somestreamer".into()))
            .match_header("Client-ID", "test-client")
            .match_header("Authorization", "Bearer secret")
            .with_status(200)
            .with_body(
                r#"{"data":[{"id":"42","login":"somestreamer","display_name":"SomeStreamer"}]}"#,
            )
            .create_async()
            .await;

        let user = client(&server, Some("secret"))
            .get_user("somestreamer")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, "42");
        assert_eq!(user.display_name, "SomeStreamer");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn returns_none_for_unknown_user() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .create_async()
            .await;

        let user = client(&server, None).get_user("ghost").await.unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn reads_live_stream() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/streams")
            .match_query(Matcher::UrlEncoded("user_login".into(), "somestreamer".into()))
            .with_status(200)
            .with_body(
                r#"{"data":[{"user_login":"somestreamer","user_name":"SomeStreamer","game_id":"509658","title":"Hello","viewer_count":12,"thumbnail_url":"https://cdn/{width}x{height}.jpg","type":"live"}],"pagination":{}}"#,
            )
            .create_async()
            .await;

        let stream = client(&server, None)
            .get_stream("somestreamer")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(stream.title, "Hello");
        assert_eq!(stream.game_id, "509658");
        assert_eq!(stream.thumbnail(720, 480), "https://cdn/720x480.jpg");
    }

    #[tokio::test]
    async fn reports_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/streams")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"error":"Unauthorized","status":401}"#)
            .create_async()
            .await;

        let result = client(&server, None).get_stream("somestreamer").await;

        assert!(matches!(result, Err(TwitchError::Status(401))));
    }

    #[tokio::test]
    async fn reports_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/games")
            .match_query(Matcher::UrlEncoded("id".into(), "1".into()))
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let result = client(&server, None).get_game("1").await;

        assert!(matches!(result, Err(TwitchError::Malformed(_))));
    }
}
