//! Module wiring: probe sender and ping service

use crate::config::Config;
use crate::contract::ProbeSender;
use crate::domain::PingService;
use crate::infra::LookupProbe;
use std::sync::Arc;

/// Network probe module
pub struct NetworkProbeModule {
    service: Arc<PingService>,
}

impl NetworkProbeModule {
    /// Build the ping service over a lookup probe of the configured host
    pub fn init(config: &Config) -> Self {
        let sender: Arc<dyn ProbeSender> = Arc::new(LookupProbe::from_config(config));
        tracing::info!(
            host = %config.host,
            port = config.port,
            history_len = config.history_len,
            "Network probe module initialized"
        );
        Self::with_sender(sender, config)
    }

    pub fn with_sender(sender: Arc<dyn ProbeSender>, config: &Config) -> Self {
        Self {
            service: Arc::new(PingService::new(sender, config)),
        }
    }

    pub fn service(&self) -> Arc<PingService> {
        self.service.clone()
    }
}
