//! Periodic live/offline detection for watched streams.
//!
//! A sweep walks a snapshot of the stream registry and compares each stream's live
//! status against the last known flag. Only offline to online transitions produce a
//! notification.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use tracing::{debug, error, warn};

use crate::{
    model::{notification::Notification, stream::StreamWatch, twitch::StreamStatus},
    service::{
        gateway::MessagingGateway, guild_registry::GuildRegistry,
        stream_registry::StreamRegistry, twitch::StreamingStatus,
    },
};

const THUMBNAIL_WIDTH: u32 = 720;
const THUMBNAIL_HEIGHT: u32 = 480;

/// Counters describing one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Set when the sweep did not run because another one was in flight.
    pub skipped: bool,
    pub checked: usize,
    pub failed: usize,
    pub went_online: usize,
    pub went_offline: usize,
    pub notified: usize,
    /// Transitions applied in memory whose flag the store did not accept.
    pub unsaved: usize,
}

impl SweepReport {
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Default::default()
        }
    }
}

/// Clears the in-flight flag when the sweep ends, including on panic.
struct SweepGuard<'a>(&'a AtomicBool);

impl Drop for SweepGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct PresenceWatcher {
    streams: Arc<StreamRegistry>,
    guilds: Arc<GuildRegistry>,
    twitch: Arc<dyn StreamingStatus>,
    gateway: Arc<dyn MessagingGateway>,
    timeout: Duration,
    running: AtomicBool,
}

impl PresenceWatcher {
    pub fn new(
        streams: Arc<StreamRegistry>,
        guilds: Arc<GuildRegistry>,
        twitch: Arc<dyn StreamingStatus>,
        gateway: Arc<dyn MessagingGateway>,
        timeout: Duration,
    ) -> Self {
        Self {
            streams,
            guilds,
            twitch,
            gateway,
            timeout,
            running: AtomicBool::new(false),
        }
    }

    /// Runs one pass over every watched stream.
    ///
    /// Returns immediately with a skipped report if a sweep is already running.
    pub async fn sweep(&self) -> SweepReport {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Previous stream sweep still running, skipping");
            return SweepReport::skipped();
        }
        let _guard = SweepGuard(&self.running);

        let mut report = SweepReport::default();

        for watch in self.streams.snapshot().await {
            report.checked += 1;

            let status =
                match tokio::time::timeout(self.timeout, self.twitch.get_stream(&watch.login))
                    .await
                {
                    Ok(Ok(status)) => status,
                    Ok(Err(e)) => {
                        warn!("Failed to get stream status of {}: {}", watch.login, e);
                        report.failed += 1;
                        continue;
                    }
                    Err(_) => {
                        warn!(
                            "Stream status of {} timed out after {:?}",
                            watch.login, self.timeout
                        );
                        report.failed += 1;
                        continue;
                    }
                };

            match (watch.is_online(), status) {
                (false, Some(status)) => {
                    report.went_online += 1;
                    if self.announce(&watch, &status).await {
                        report.notified += 1;
                    }
                    if self.streams.set_online(&watch, true).await.is_err() {
                        report.unsaved += 1;
                    }
                }
                (true, None) => {
                    report.went_offline += 1;
                    if self.streams.set_online(&watch, false).await.is_err() {
                        report.unsaved += 1;
                    }
                }
                _ => {}
            }
        }

        debug!("Stream sweep finished: {:?}", report);

        report
    }

    /// Sends the live notification; returns whether it was delivered.
    async fn announce(&self, watch: &StreamWatch, status: &StreamStatus) -> bool {
        let game = self.game_name(&status.game_id).await;
        let color = self.guilds.get_or_create(&watch.guild_id).await.embed_color;
        let notification = compose_notification(watch, status, &game, color);

        match self
            .gateway
            .send_notification(&watch.channel_id, &notification)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                error!(
                    "Failed to announce stream {} in channel {}: {}",
                    watch.login, watch.channel_id, e
                );
                false
            }
        }
    }

    /// Best-effort game lookup; empty when unknown or unavailable.
    async fn game_name(&self, game_id: &str) -> String {
        if game_id.is_empty() {
            return String::new();
        }

        match tokio::time::timeout(self.timeout, self.twitch.get_game(game_id)).await {
            Ok(Ok(Some(game))) => game.name,
            Ok(Ok(None)) => String::new(),
            Ok(Err(e)) => {
                debug!("Failed to look up game {}: {}", game_id, e);
                String::new()
            }
            Err(_) => {
                debug!("Game lookup {} timed out", game_id);
                String::new()
            }
        }
    }
}

/// Builds the notification for a stream that just went live.
pub fn compose_notification(
    watch: &StreamWatch,
    status: &StreamStatus,
    game: &str,
    color: u32,
) -> Notification {
    let url = watch.stream_url();
    let name = if status.user_name.is_empty() {
        watch.login.as_str()
    } else {
        status.user_name.as_str()
    };

    let content = match &watch.custom.message {
        Some(template) => template
            .replace("{name}", name)
            .replace("{login}", &watch.login)
            .replace("{title}", &status.title)
            .replace("{game}", game)
            .replace("{url}", &url),
        None => format!("Hey @here {} is now live on {}", name, url),
    };

    let image = watch
        .custom
        .image_url
        .clone()
        .unwrap_or_else(|| status.thumbnail(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT));

    Notification::new(content)
        .title(name)
        .url(url)
        .color(color)
        .field("Stream", &status.title, true)
        .field("Game", game, true)
        .image(image)
}
