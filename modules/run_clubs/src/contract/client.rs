//! Native client trait for inter-module communication
//!
//! NO HTTP - direct function calls into the run clubs module.

use super::{
    error::ClubError,
    model::{Club, ClubCategory, ClubUpdate, NewClub},
};
use async_trait::async_trait;

/// Run clubs API for inter-module communication
#[async_trait]
pub trait RunClubsApi: Send + Sync {
    // ===== Club Operations =====

    /// List every club in insertion order
    async fn list_clubs(&self) -> Result<Vec<Club>, ClubError>;

    /// One page of clubs; `limit` falls back to the configured page size
    async fn list_clubs_page(&self, offset: u64, limit: Option<u64>)
        -> Result<Vec<Club>, ClubError>;

    /// Get a club by id
    async fn get_club(&self, id: i32) -> Result<Club, ClubError>;

    /// Get a club by title (trimmed, case-insensitive)
    async fn get_club_by_title(&self, title: &str) -> Result<Club, ClubError>;

    /// Check whether a club id is present
    async fn club_exists(&self, id: i32) -> Result<bool, ClubError>;

    /// Create a club together with its address
    async fn create_club(&self, club: NewClub) -> Result<Club, ClubError>;

    /// Replace a club's fields and edit its address in place
    async fn update_club(&self, id: i32, update: ClubUpdate) -> Result<Club, ClubError>;

    /// Delete a club and the address it owns
    async fn delete_club(&self, id: i32) -> Result<(), ClubError>;

    /// Number of stored clubs
    async fn count_clubs(&self) -> Result<u64, ClubError>;

    // ===== Address Queries =====

    /// Distinct state codes with at least one club, sorted
    async fn list_states(&self) -> Result<Vec<String>, ClubError>;

    /// Clubs located in a state
    async fn get_clubs_by_state(&self, state: &str) -> Result<Vec<Club>, ClubError>;

    /// Clubs located in a city
    async fn get_clubs_by_city(&self, city: &str) -> Result<Vec<Club>, ClubError>;

    // ===== Category Queries =====

    /// One page of clubs of a category
    async fn get_clubs_by_category(
        &self,
        category: ClubCategory,
        offset: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Club>, ClubError>;

    /// Number of clubs of a category
    async fn count_clubs_by_category(&self, category: ClubCategory) -> Result<u64, ClubError>;
}
