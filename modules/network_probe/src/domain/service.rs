//! Ping status reporting

use crate::config::Config;
use crate::contract::{PingOptions, ProbeSender};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

pub const PING_SENT: &str = "Success: Ping sent!";
pub const PING_NOT_SENT: &str = "Failed: Ping not sent!";

#[derive(Default)]
struct PingLog {
    last_ping_at: Option<DateTime<Utc>>,
    recent: VecDeque<PingOptions>,
}

/// Sends pings through a [`ProbeSender`] and remembers the latest ones
pub struct PingService {
    sender: Arc<dyn ProbeSender>,
    options: PingOptions,
    history_len: usize,
    log: Mutex<PingLog>,
}

impl PingService {
    pub fn new(sender: Arc<dyn ProbeSender>, config: &Config) -> Self {
        Self {
            sender,
            options: config.ping_options(),
            history_len: config.history_len,
            log: Mutex::new(PingLog::default()),
        }
    }

    /// Send one probe and describe the outcome
    pub async fn send_ping(&self) -> String {
        let sent = self.sender.send_probe().await;
        self.record(Utc::now());

        if sent {
            tracing::info!(ttl = self.options.ttl, "Ping sent");
            PING_SENT.to_string()
        } else {
            tracing::warn!(ttl = self.options.ttl, "Ping not sent");
            PING_NOT_SENT.to_string()
        }
    }

    fn record(&self, at: DateTime<Utc>) {
        let mut log = self.log.lock();
        log.last_ping_at = Some(at);
        if self.history_len == 0 {
            return;
        }
        log.recent.push_front(self.options);
        log.recent.truncate(self.history_len);
    }

    /// When the last ping was attempted; `None` before the first one
    pub fn last_ping_at(&self) -> Option<DateTime<Utc>> {
        self.log.lock().last_ping_at
    }

    pub fn ping_options(&self) -> PingOptions {
        self.options
    }

    /// Options of the latest pings, newest first
    pub fn most_recent_pings(&self) -> Vec<PingOptions> {
        self.log.lock().recent.iter().copied().collect()
    }

    /// Total time allowed for connecting and waiting for a reply
    pub fn timeout_budget(connect: Duration, reply: Duration) -> Duration {
        connect.saturating_add(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_budget_adds_and_saturates() {
        let one = Duration::from_secs(1);
        assert_eq!(PingService::timeout_budget(one, one), Duration::from_secs(2));
        assert_eq!(
            PingService::timeout_budget(Duration::MAX, one),
            Duration::MAX
        );
    }
}
