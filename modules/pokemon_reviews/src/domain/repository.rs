//! Repository trait for data access
//!
//! This trait is the storage port of the module. The SeaORM implementation
//! lives in infra/storage/repositories.rs.

use crate::contract::{NewPokemon, Pokemon, PokemonUpdate, Review};
use async_trait::async_trait;
use catalog_db::StoreResult;
use rust_decimal::Decimal;

/// Repository for Pokemon and everything they own
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Find a Pokemon by id
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Pokemon>>;

    /// Find a Pokemon by trimmed, case-insensitive name; lowest id wins on duplicates
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Pokemon>>;

    /// List all Pokemon ordered by id
    async fn list_all(&self) -> StoreResult<Vec<Pokemon>>;

    /// Insert a Pokemon, its category links and reviews in one transaction
    async fn insert(&self, pokemon: &NewPokemon) -> StoreResult<Pokemon>;

    /// Update name and birth date
    async fn update(&self, id: i32, update: &PokemonUpdate) -> StoreResult<Pokemon>;

    /// Delete a Pokemon with its reviews and category links
    async fn delete(&self, id: i32) -> StoreResult<()>;

    /// Count stored Pokemon
    async fn count(&self) -> StoreResult<u64>;

    /// Check if a Pokemon exists
    async fn exists(&self, id: i32) -> StoreResult<bool>;

    /// Mean review rating, zero without reviews
    async fn average_rating(&self, id: i32) -> StoreResult<Decimal>;

    /// Distinct category names, sorted
    async fn list_category_names(&self) -> StoreResult<Vec<String>>;

    /// Pokemon linked to a category, ordered by id
    async fn find_by_category(&self, category: &str) -> StoreResult<Vec<Pokemon>>;

    /// Reviews of one Pokemon, ordered by id
    async fn reviews_of(&self, id: i32) -> StoreResult<Vec<Review>>;
}
