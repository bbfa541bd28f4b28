//! Watched streams, indexed both as one flat sequence and grouped per guild.
//!
//! Both indexes hold the same `Arc<StreamWatch>` instances and are only changed
//! together while the write guard is held.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    time::Duration,
};

use sea_orm::{DatabaseConnection, DbErr};
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::{
    data::stream_watch::StreamWatchRepository,
    error::{stream::StreamError, twitch::TwitchError},
    model::stream::{CustomNotification, StreamWatch},
    service::twitch::StreamingStatus,
};

#[derive(Default)]
struct StreamIndex {
    all: Vec<Arc<StreamWatch>>,
    by_guild: HashMap<String, Vec<Arc<StreamWatch>>>,
    /// Guilds whose stored watches have been merged into the indexes.
    loaded: HashSet<String>,
}

impl StreamIndex {
    fn contains(&self, guild_id: &str, login: &str) -> bool {
        self.by_guild
            .get(guild_id)
            .is_some_and(|group| group.iter().any(|w| w.matches(guild_id, login)))
    }

    /// Merges stored watches for a guild, skipping logins already indexed.
    fn merge(&mut self, guild_id: &str, watches: Vec<StreamWatch>) -> usize {
        let mut merged = 0;

        for watch in watches {
            if self.contains(guild_id, &watch.login) {
                continue;
            }

            let watch = Arc::new(watch);
            self.all.push(watch.clone());
            self.by_guild
                .entry(guild_id.to_string())
                .or_default()
                .push(watch);
            merged += 1;
        }

        self.by_guild.entry(guild_id.to_string()).or_default();
        self.loaded.insert(guild_id.to_string());

        merged
    }
}

pub struct StreamRegistry {
    db: DatabaseConnection,
    twitch: Arc<dyn StreamingStatus>,
    lookup_timeout: Duration,
    index: RwLock<StreamIndex>,
}

impl StreamRegistry {
    pub fn new(
        db: DatabaseConnection,
        twitch: Arc<dyn StreamingStatus>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            db,
            twitch,
            lookup_timeout,
            index: RwLock::new(StreamIndex::default()),
        }
    }

    /// Loads the stored watches of every listed guild not loaded yet.
    ///
    /// A guild that already has a group (because a watch was added before its
    /// stored watches were read) is merged rather than skipped.
    ///
    /// Returns the number of watches loaded.
    pub async fn hydrate(&self, guild_ids: &[String]) -> usize {
        let mut loaded = 0;

        for guild_id in guild_ids {
            match self.load_guild(guild_id).await {
                Ok(count) => loaded += count,
                Err(e) => error!("Failed to load streams for guild {}: {:?}", guild_id, e),
            }
        }

        info!("Loaded {} watched streams", loaded);

        loaded
    }

    async fn load_guild(&self, guild_id: &str) -> Result<usize, DbErr> {
        if self.index.read().await.loaded.contains(guild_id) {
            return Ok(0);
        }

        let watches = StreamWatchRepository::new(&self.db)
            .get_by_guild(guild_id)
            .await?;

        let mut index = self.index.write().await;
        if index.loaded.contains(guild_id) {
            return Ok(0);
        }

        Ok(index.merge(guild_id, watches))
    }

    /// Starts watching a login in a guild.
    ///
    /// The login is resolved through the streaming service before anything is stored.
    ///
    /// # Returns
    /// - `Ok(String)` - Display name of the watched account
    /// - `Err(StreamError::AlreadyExists)` - The login is already watched in this guild
    /// - `Err(StreamError::UnknownLogin)` - The streaming service has no such account
    /// - `Err(StreamError::ExternalService)` - The lookup failed or timed out
    /// - `Err(StreamError::Persistence)` - The guild's stored watches could not be
    ///   read, or the store rejected the watch
    pub async fn add_stream(
        &self,
        guild_id: &str,
        channel_id: &str,
        login: &str,
        custom: CustomNotification,
    ) -> Result<String, StreamError> {
        let login = login.trim().to_lowercase();
        self.load_guild(guild_id).await?;

        let already_exists = || StreamError::AlreadyExists {
            guild_id: guild_id.to_string(),
            login: login.clone(),
        };

        if self.index.read().await.contains(guild_id, &login) {
            return Err(already_exists());
        }

        let user = tokio::time::timeout(self.lookup_timeout, self.twitch.get_user(&login))
            .await
            .map_err(|_| TwitchError::Timeout)??
            .ok_or_else(|| StreamError::UnknownLogin(login.clone()))?;

        let mut index = self.index.write().await;
        if index.contains(guild_id, &login) {
            return Err(already_exists());
        }

        let watch = StreamWatch::new(guild_id, channel_id, &login, false, custom);
        let watch = Arc::new(StreamWatchRepository::new(&self.db).create(&watch).await?);

        index.all.push(watch.clone());
        index
            .by_guild
            .entry(guild_id.to_string())
            .or_default()
            .push(watch);

        info!(
            "Watching stream {} in guild {} (channel {})",
            login, guild_id, channel_id
        );

        Ok(user.display_name)
    }

    /// Stops watching a login in a guild.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of watches removed
    /// - `Err(StreamError::NotFound)` - The login is not watched in this guild
    /// - `Err(StreamError::Persistence)` - The guild could not be loaded or the store
    ///   delete failed; nothing was removed
    pub async fn remove_stream(&self, guild_id: &str, login: &str) -> Result<usize, StreamError> {
        let login = login.trim().to_lowercase();
        self.load_guild(guild_id).await?;
        let mut index = self.index.write().await;

        let matching = index
            .by_guild
            .get(guild_id)
            .map_or(0, |group| {
                group.iter().filter(|w| w.matches(guild_id, &login)).count()
            });

        if matching == 0 {
            return Err(StreamError::NotFound {
                guild_id: guild_id.to_string(),
                login,
            });
        }

        StreamWatchRepository::new(&self.db)
            .delete(guild_id, &login)
            .await?;

        index.all.retain(|w| !w.matches(guild_id, &login));
        if let Some(group) = index.by_guild.get_mut(guild_id) {
            group.retain(|w| !w.matches(guild_id, &login));
        }

        info!("Stopped watching stream {} in guild {}", login, guild_id);

        Ok(matching)
    }

    pub async fn guild_streams(&self, guild_id: &str) -> Vec<Arc<StreamWatch>> {
        self.index
            .read()
            .await
            .by_guild
            .get(guild_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Every watch in flat-sequence order.
    pub async fn snapshot(&self) -> Vec<Arc<StreamWatch>> {
        self.index.read().await.all.clone()
    }

    pub async fn len(&self) -> usize {
        self.index.read().await.all.len()
    }

    /// Records a watch's online flag in memory and in the store.
    pub async fn set_online(&self, watch: &StreamWatch, online: bool) -> Result<(), DbErr> {
        {
            let _index = self.index.write().await;
            watch.set_online(online);
        }

        debug!(
            "Stream {} in guild {} is now {}",
            watch.login,
            watch.guild_id,
            if online { "online" } else { "offline" }
        );

        StreamWatchRepository::new(&self.db)
            .set_online(&watch.guild_id, &watch.login, online)
            .await
            .inspect_err(|e| {
                error!(
                    "Failed to store online flag of stream {} in guild {}: {:?}",
                    watch.login, watch.guild_id, e
                )
            })
    }

    #[cfg(test)]
    pub(crate) async fn group_len(&self, guild_id: &str) -> Option<usize> {
        self.index
            .read()
            .await
            .by_guild
            .get(guild_id)
            .map(Vec::len)
    }
}
