use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobSchedulerError};
use tracing::info;

use crate::service::stats::BotStats;

const STATS_SCHEDULE: &str = "0 * * * * *";

/// Job logging and resetting the per-minute message counter.
pub fn job(stats: Arc<BotStats>) -> Result<Job, JobSchedulerError> {
    Job::new_async(STATS_SCHEDULE, move |_uuid, _lock| {
        let stats = stats.clone();

        Box::pin(async move {
            let messages = stats.take_window();
            info!("Messages in the last minute: {}", messages);
        })
    })
}
