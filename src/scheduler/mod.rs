//! Cron jobs: the stream presence sweep and the message stats window.

pub mod stats;
pub mod stream_sweep;

use std::sync::Arc;

use tokio_cron_scheduler::JobScheduler;
use tracing::info;

use crate::{error::AppError, service::presence::PresenceWatcher, service::stats::BotStats};

/// Creates and starts the scheduler with every job registered.
///
/// The scheduler is returned so the caller can shut it down.
pub async fn start_scheduler(
    sweep_schedule: &str,
    watcher: Arc<PresenceWatcher>,
    stats: Arc<BotStats>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler
        .add(stream_sweep::job(sweep_schedule, watcher)?)
        .await?;
    scheduler.add(stats::job(stats)?).await?;

    scheduler.start().await?;

    info!("Scheduler started (stream sweep: {})", sweep_schedule);

    Ok(scheduler)
}
