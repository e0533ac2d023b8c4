//! Network Probe Module
//!
//! Reports whether a probe could be sent and keeps a short history of the
//! options used. The probe itself sits behind [`ProbeSender`]; the bundled
//! [`LookupProbe`] treats a successful name resolution as a sent probe.

pub mod contract;
pub use contract::{PingOptions, ProbeSender};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::NetworkProbeModule;

#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

pub use domain::PingService;
pub use infra::LookupProbe;
