use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobSchedulerError};
use tracing::info;

use crate::service::presence::PresenceWatcher;

/// Job running one presence sweep per tick.
///
/// Ticks that fire while a sweep is still running are skipped by the watcher itself.
pub fn job(schedule: &str, watcher: Arc<PresenceWatcher>) -> Result<Job, JobSchedulerError> {
    Job::new_async(schedule, move |_uuid, _lock| {
        let watcher = watcher.clone();

        Box::pin(async move {
            let report = watcher.sweep().await;

            if report.went_online > 0 || report.went_offline > 0 || report.failed > 0 {
                info!(
                    "Stream sweep: {} checked, {} online, {} offline, {} notified, {} failed, {} unsaved",
                    report.checked,
                    report.went_online,
                    report.went_offline,
                    report.notified,
                    report.failed,
                    report.unsaved
                );
            }
        })
    })
}
