//! In-process stand-ins for the messaging gateway and the streaming service.

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
    time::Duration,
};

use serenity::{all::Permissions, async_trait};

use crate::{
    error::{gateway::GatewayError, twitch::TwitchError},
    model::{
        notification::Notification,
        twitch::{Game, StreamStatus, TwitchUser},
    },
    service::{gateway::MessagingGateway, twitch::StreamingStatus},
};

/// Longer than any timeout used in tests.
const STALL: Duration = Duration::from_secs(30);

pub struct FakeGateway {
    permissions: Mutex<Permissions>,
    admins: Mutex<HashSet<String>>,
    fail_sends: Mutex<bool>,
    pub messages: Mutex<Vec<(String, String)>>,
    pub notifications: Mutex<Vec<(String, Notification)>>,
}

impl FakeGateway {
    /// A gateway granting every permission with no admins.
    pub fn new() -> Self {
        Self {
            permissions: Mutex::new(Permissions::all()),
            admins: Mutex::new(HashSet::new()),
            fail_sends: Mutex::new(false),
            messages: Mutex::new(Vec::new()),
            notifications: Mutex::new(Vec::new()),
        }
    }

    pub fn set_permissions(&self, permissions: Permissions) {
        *self.permissions.lock().unwrap() = permissions;
    }

    pub fn add_admin(&self, user_id: &str) {
        self.admins.lock().unwrap().insert(user_id.to_string());
    }

    pub fn fail_sends(&self, fail: bool) {
        *self.fail_sends.lock().unwrap() = fail;
    }

    pub fn sent_messages(&self) -> Vec<(String, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn sent_notifications(&self) -> Vec<(String, Notification)> {
        self.notifications.lock().unwrap().clone()
    }

    fn check_send(&self) -> Result<(), GatewayError> {
        if *self.fail_sends.lock().unwrap() {
            Err(GatewayError::Timeout(Duration::from_secs(5)))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MessagingGateway for FakeGateway {
    async fn bot_permissions(
        &self,
        _guild_id: &str,
        _channel_id: &str,
    ) -> Result<Permissions, GatewayError> {
        Ok(*self.permissions.lock().unwrap())
    }

    async fn is_guild_admin(&self, _guild_id: &str, user_id: &str) -> Result<bool, GatewayError> {
        Ok(self.admins.lock().unwrap().contains(user_id))
    }

    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), GatewayError> {
        self.check_send()?;
        self.messages
            .lock()
            .unwrap()
            .push((channel_id.to_string(), text.to_string()));
        Ok(())
    }

    async fn send_notification(
        &self,
        channel_id: &str,
        notification: &Notification,
    ) -> Result<(), GatewayError> {
        self.check_send()?;
        self.notifications
            .lock()
            .unwrap()
            .push((channel_id.to_string(), notification.clone()));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeTwitch {
    users: Mutex<HashMap<String, TwitchUser>>,
    live: Mutex<HashMap<String, StreamStatus>>,
    games: Mutex<HashMap<String, Game>>,
    stalled: Mutex<HashSet<String>>,
    failing: Mutex<HashSet<String>>,
}

impl FakeTwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, login: &str, display_name: &str) {
        self.users.lock().unwrap().insert(
            login.to_string(),
            TwitchUser {
                id: format!("id-{}", login),
                login: login.to_string(),
                display_name: display_name.to_string(),
            },
        );
    }

    pub fn add_game(&self, id: &str, name: &str) {
        self.games.lock().unwrap().insert(
            id.to_string(),
            Game {
                id: id.to_string(),
                name: name.to_string(),
            },
        );
    }

    /// Marks a login live with the given title and game.
    pub fn go_live(&self, login: &str, title: &str, game_id: &str) {
        self.live.lock().unwrap().insert(
            login.to_string(),
            StreamStatus {
                user_login: login.to_string(),
                user_name: login.to_uppercase(),
                game_id: game_id.to_string(),
                title: title.to_string(),
                viewer_count: 1,
                thumbnail_url: format!("https://cdn/{}-{{width}}x{{height}}.jpg", login),
            },
        );
    }

    pub fn go_offline(&self, login: &str) {
        self.live.lock().unwrap().remove(login);
    }

    /// Every request for this login hangs past any test timeout.
    pub fn stall(&self, login: &str) {
        self.stalled.lock().unwrap().insert(login.to_string());
    }

    /// Every request for this login fails with a server error.
    pub fn fail(&self, login: &str) {
        self.failing.lock().unwrap().insert(login.to_string());
    }

    async fn gate(&self, login: &str) -> Result<(), TwitchError> {
        let stalled = self.stalled.lock().unwrap().contains(login);
        if stalled {
            tokio::time::sleep(STALL).await;
        }
        if self.failing.lock().unwrap().contains(login) {
            return Err(TwitchError::Status(500));
        }
        Ok(())
    }
}

#[async_trait]
impl StreamingStatus for FakeTwitch {
    async fn get_user(&self, login: &str) -> Result<Option<TwitchUser>, TwitchError> {
        self.gate(login).await?;
        Ok(self.users.lock().unwrap().get(login).cloned())
    }

    async fn get_stream(&self, login: &str) -> Result<Option<StreamStatus>, TwitchError> {
        self.gate(login).await?;
        Ok(self.live.lock().unwrap().get(login).cloned())
    }

    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, TwitchError> {
        Ok(self.games.lock().unwrap().get(game_id).cloned())
    }
}
