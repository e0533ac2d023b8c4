//! Shared database plumbing for catalog modules
//!
//! Every module that persists data goes through this crate for three things:
//! - [`DbConfig`] and [`connect`] to open a SeaORM connection
//! - [`StoreError`] as the error type of repository traits
//! - [`Outcome`] to collapse a result into a success flag at a boundary

pub mod config;
pub mod connect;
pub mod error;
pub mod outcome;

pub use config::DbConfig;
pub use connect::connect;
pub use error::{StoreError, StoreResult};
pub use outcome::Outcome;
