//! Run Clubs Module
//!
//! Running clubs, each owning one street address, persisted through SeaORM.
//! Clubs can be listed page by page, filtered by state, city or category.

// Public exports
pub mod contract;
pub use contract::{
    client::RunClubsApi, error::ClubError, Address, Club, ClubCategory, ClubUpdate, NewAddress,
    NewClub,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::RunClubsModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
