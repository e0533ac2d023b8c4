//! Configuration for the network probe module

use crate::contract::PingOptions;
use serde::Deserialize;
use std::time::Duration;

/// Network probe configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Host the lookup probe resolves
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound for a single probe
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Number of pings remembered by `most_recent_pings`
    #[serde(default = "default_history_len")]
    pub history_len: usize,

    #[serde(default = "default_dont_fragment")]
    pub dont_fragment: bool,

    #[serde(default = "default_ttl")]
    pub ttl: u8,
}

impl Config {
    pub fn ping_options(&self) -> PingOptions {
        PingOptions {
            dont_fragment: self.dont_fragment,
            ttl: self.ttl,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout: default_timeout(),
            history_len: default_history_len(),
            dont_fragment: default_dont_fragment(),
            ttl: default_ttl(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    80
}

fn default_timeout() -> Duration {
    Duration::from_secs(2)
}

fn default_history_len() -> usize {
    4
}

fn default_dont_fragment() -> bool {
    true
}

fn default_ttl() -> u8 {
    1
}
