//! Domain layer

pub mod service;

pub use service::PingService;
