//! In-memory cache of per-guild configuration with write-through to the store.
//!
//! Readers take a shared lock and clone an `Arc<GuildRecord>`; they never wait on one
//! another. Creation and updates go through a single-writer section so that concurrent
//! callers for a missing guild agree on one record and the store receives one row.

use std::{collections::HashMap, sync::Arc};

use sea_orm::{DatabaseConnection, DbErr};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info};

use crate::{
    data::guild_config::GuildConfigRepository,
    error::guild::GuildSettingError,
    model::guild::{GuildDefaults, GuildRecord, GuildSetting},
};

/// Outcome of hydrating the registry from the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HydrateSummary {
    /// Records read back from the store.
    pub loaded: usize,
    /// Records synthesized from defaults and persisted.
    pub created: usize,
}

pub struct GuildRegistry {
    db: DatabaseConnection,
    defaults: GuildDefaults,
    guilds: RwLock<HashMap<String, Arc<GuildRecord>>>,
    writer: Mutex<()>,
}

impl GuildRegistry {
    pub fn new(db: DatabaseConnection, defaults: GuildDefaults) -> Self {
        Self {
            db,
            defaults,
            guilds: RwLock::new(HashMap::new()),
            writer: Mutex::new(()),
        }
    }

    /// Loads or creates the record of every listed guild that is not resident yet.
    ///
    /// A guild whose store lookup or insert fails is logged and left out, so a later
    /// `get_or_create` retries it.
    pub async fn hydrate(&self, guild_ids: &[String]) -> HydrateSummary {
        let mut summary = HydrateSummary::default();
        let repo = GuildConfigRepository::new(&self.db);

        for guild_id in guild_ids {
            let _writer = self.writer.lock().await;

            if self.guilds.read().await.contains_key(guild_id) {
                continue;
            }

            let record = match repo.find_by_guild_id(guild_id).await {
                Ok(Some(record)) => {
                    summary.loaded += 1;
                    record
                }
                Ok(None) => {
                    let record = GuildRecord::with_defaults(guild_id, &self.defaults);
                    if let Err(e) = repo.create(&record).await {
                        error!("Failed to persist default config for guild {}: {:?}", guild_id, e);
                        continue;
                    }
                    summary.created += 1;
                    record
                }
                Err(e) => {
                    error!("Failed to load config for guild {}: {:?}", guild_id, e);
                    continue;
                }
            };

            self.guilds
                .write()
                .await
                .insert(guild_id.clone(), Arc::new(record));
        }

        info!(
            "Guild configs hydrated: {} loaded, {} initiated",
            summary.loaded, summary.created
        );

        summary
    }

    /// Returns the record of a guild, creating it from defaults when unknown.
    ///
    /// Never fails: if the store cannot be reached the default record is still cached
    /// and the next successful update writes the full row.
    pub async fn get_or_create(&self, guild_id: &str) -> Arc<GuildRecord> {
        if let Some(record) = self.get(guild_id).await {
            return record;
        }

        let _writer = self.writer.lock().await;
        self.get_or_create_locked(guild_id).await
    }

    pub async fn get(&self, guild_id: &str) -> Option<Arc<GuildRecord>> {
        self.guilds.read().await.get(guild_id).cloned()
    }

    /// Applies a setting change in memory and writes the affected column to the store.
    ///
    /// The new record stays in memory even when the store write fails; the failure is
    /// reported as `GuildSettingError::Persistence`.
    pub async fn update(
        &self,
        guild_id: &str,
        setting: GuildSetting,
    ) -> Result<Arc<GuildRecord>, GuildSettingError> {
        let _writer = self.writer.lock().await;

        let current = self.get_or_create_locked(guild_id).await;
        let mut updated = GuildRecord::clone(&current);
        updated.apply(&setting);
        let updated = Arc::new(updated);

        self.guilds
            .write()
            .await
            .insert(guild_id.to_string(), updated.clone());

        if let Err(e) = self.persist_setting(&updated, &setting).await {
            error!(
                "Failed to persist {} for guild {}: {:?}",
                setting.key(),
                guild_id,
                e
            );
            return Err(GuildSettingError::Persistence(e));
        }

        debug!("Updated guild {} setting {}", guild_id, setting);

        Ok(updated)
    }

    pub async fn len(&self) -> usize {
        self.guilds.read().await.len()
    }

    /// Must be called with the writer section held.
    async fn get_or_create_locked(&self, guild_id: &str) -> Arc<GuildRecord> {
        if let Some(record) = self.get(guild_id).await {
            return record;
        }

        let repo = GuildConfigRepository::new(&self.db);
        let record = match repo.find_by_guild_id(guild_id).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                let record = GuildRecord::with_defaults(guild_id, &self.defaults);
                match repo.create(&record).await {
                    Ok(_) => info!("Initiated config for guild {}", guild_id),
                    Err(e) => error!(
                        "Failed to persist default config for guild {}: {:?}",
                        guild_id, e
                    ),
                }
                record
            }
            Err(e) => {
                error!("Failed to load config for guild {}: {:?}", guild_id, e);
                GuildRecord::with_defaults(guild_id, &self.defaults)
            }
        };

        let record = Arc::new(record);
        self.guilds
            .write()
            .await
            .insert(guild_id.to_string(), record.clone());

        record
    }

    /// Writes the changed column, inserting the whole row if the guild was never stored.
    async fn persist_setting(
        &self,
        record: &GuildRecord,
        setting: &GuildSetting,
    ) -> Result<(), DbErr> {
        let repo = GuildConfigRepository::new(&self.db);

        if repo.update_setting(&record.guild_id, setting).await? == 0 {
            repo.create(record).await?;
        }

        Ok(())
    }
}
