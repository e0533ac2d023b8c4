//! Repository trait for data access
//!
//! Implementation is in infra/storage/repositories.rs

use crate::contract::{Club, ClubCategory, ClubUpdate, NewClub};
use async_trait::async_trait;
use catalog_db::StoreResult;

/// Repository for clubs and their addresses
#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Find a club by id
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Club>>;

    /// Find a club by trimmed, case-insensitive title; lowest id wins on duplicates
    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Club>>;

    /// List all clubs ordered by id
    async fn list_all(&self) -> StoreResult<Vec<Club>>;

    /// List a window of clubs ordered by id
    async fn list_slice(&self, offset: u64, limit: u64) -> StoreResult<Vec<Club>>;

    /// Insert a club and its address in one transaction
    async fn insert(&self, club: &NewClub) -> StoreResult<Club>;

    /// Update a club and its address in one transaction
    async fn update(&self, id: i32, update: &ClubUpdate) -> StoreResult<Club>;

    /// Delete a club and its address
    async fn delete(&self, id: i32) -> StoreResult<()>;

    /// Count stored clubs
    async fn count(&self) -> StoreResult<u64>;

    /// Check if a club exists
    async fn exists(&self, id: i32) -> StoreResult<bool>;

    /// Distinct state codes, sorted
    async fn list_states(&self) -> StoreResult<Vec<String>>;

    /// Clubs whose address is in `state`
    async fn find_by_state(&self, state: &str) -> StoreResult<Vec<Club>>;

    /// Clubs whose address is in `city` (case-insensitive)
    async fn find_by_city(&self, city: &str) -> StoreResult<Vec<Club>>;

    /// A window of clubs of one category ordered by id
    async fn find_by_category(
        &self,
        category: ClubCategory,
        offset: u64,
        limit: u64,
    ) -> StoreResult<Vec<Club>>;

    /// Count clubs of one category
    async fn count_by_category(&self, category: ClubCategory) -> StoreResult<u64>;
}
