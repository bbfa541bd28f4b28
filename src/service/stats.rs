use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide message counters.
///
/// The window counter is reset by the stats job; the totals live for the process.
#[derive(Debug, Default)]
pub struct BotStats {
    window_messages: AtomicU64,
    total_messages: AtomicU64,
    denied_messages: AtomicU64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub window_messages: u64,
    pub total_messages: u64,
    pub denied_messages: u64,
}

impl BotStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_message(&self) {
        self.window_messages.fetch_add(1, Ordering::Relaxed);
        self.total_messages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_denied(&self) {
        self.denied_messages.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the messages seen since the last call and starts a new window.
    pub fn take_window(&self) -> u64 {
        self.window_messages.swap(0, Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            window_messages: self.window_messages.load(Ordering::Relaxed),
            total_messages: self.total_messages.load(Ordering::Relaxed),
            denied_messages: self.denied_messages.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_window_resets_only_window() {
        let stats = BotStats::new();
        stats.record_message();
        stats.record_message();
        stats.record_denied();

        assert_eq!(stats.take_window(), 2);
        assert_eq!(
            stats.snapshot(),
            StatsSnapshot {
                window_messages: 0,
                total_messages: 2,
                denied_messages: 1,
            }
        );
    }
}
