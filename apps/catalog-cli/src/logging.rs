//! Tracing subscriber setup

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber; logs go to stderr so stdout carries results
///
/// Filter precedence: `--log-level`, then `RUST_LOG`, then `logging.level`.
pub fn init(cfg: &LoggingConfig, cli_level: Option<&str>) -> Result<()> {
    let env_level = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(cli_level, env_level.as_deref(), &cfg.level);
    let env_filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log level '{}'", directive))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = if cfg.json {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
    };
    installed.context("failed to install tracing subscriber")
}

fn filter_directive<'a>(
    cli_level: Option<&'a str>,
    env_level: Option<&'a str>,
    config_level: &'a str,
) -> &'a str {
    let set = |level: &&str| !level.trim().is_empty();
    cli_level
        .filter(set)
        .or_else(|| env_level.filter(set))
        .unwrap_or(config_level)
}
