//! Probe sender backed by a name lookup

use crate::config::Config;
use crate::contract::ProbeSender;
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;
use tokio::time::timeout;

/// Resolves `host:port`; the probe counts as sent when an address comes back
#[derive(Debug, Clone)]
pub struct LookupProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl LookupProbe {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.host.clone(), config.port, config.timeout)
    }
}

#[async_trait]
impl ProbeSender for LookupProbe {
    async fn send_probe(&self) -> bool {
        let target = (self.host.as_str(), self.port);
        match timeout(self.timeout, lookup_host(target)).await {
            Ok(Ok(mut addrs)) => match addrs.next() {
                Some(addr) => {
                    tracing::debug!(host = %self.host, %addr, "Probe target resolved");
                    true
                }
                None => {
                    tracing::debug!(host = %self.host, "Probe target has no addresses");
                    false
                }
            },
            Ok(Err(err)) => {
                tracing::debug!(host = %self.host, error = %err, "Probe lookup failed");
                false
            }
            Err(_) => {
                tracing::debug!(host = %self.host, timeout = ?self.timeout, "Probe lookup timed out");
                false
            }
        }
    }
}
