//! Contract layer - public API for inter-module communication

pub mod client;
pub mod error;
pub mod model;

pub use client::RunClubsApi;
pub use error::ClubError;
pub use model::{Address, Club, ClubCategory, ClubUpdate, NewAddress, NewClub};
