//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the
//! Pokemon reviews module. NO HTTP - direct function calls.

use super::{
    error::PokemonError,
    model::{NewPokemon, Pokemon, PokemonUpdate, Review},
};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Pokemon reviews API for inter-module communication
#[async_trait]
pub trait PokemonReviewsApi: Send + Sync {
    // ===== Pokemon Operations =====

    /// List every Pokemon in insertion order
    async fn list_pokemon(&self) -> Result<Vec<Pokemon>, PokemonError>;

    /// Get a Pokemon by id
    async fn get_pokemon(&self, id: i32) -> Result<Pokemon, PokemonError>;

    /// Get a Pokemon by name (trimmed, case-insensitive)
    async fn get_pokemon_by_name(&self, name: &str) -> Result<Pokemon, PokemonError>;

    /// Check whether a Pokemon id is present
    async fn pokemon_exists(&self, id: i32) -> Result<bool, PokemonError>;

    /// Create a Pokemon with its categories and reviews
    async fn create_pokemon(&self, pokemon: NewPokemon) -> Result<Pokemon, PokemonError>;

    /// Update name and birth date
    async fn update_pokemon(&self, id: i32, update: PokemonUpdate)
        -> Result<Pokemon, PokemonError>;

    /// Delete a Pokemon together with its reviews and category links
    async fn delete_pokemon(&self, id: i32) -> Result<(), PokemonError>;

    /// Number of stored Pokemon
    async fn count_pokemon(&self) -> Result<u64, PokemonError>;

    /// Average review rating, zero when unreviewed
    async fn get_pokemon_rating(&self, id: i32) -> Result<Decimal, PokemonError>;

    // ===== Category Operations =====

    /// Distinct category names, sorted
    async fn list_categories(&self) -> Result<Vec<String>, PokemonError>;

    /// Pokemon linked to the named category
    async fn get_pokemon_by_category(&self, category: &str) -> Result<Vec<Pokemon>, PokemonError>;

    // ===== Review Operations =====

    /// Reviews of one Pokemon
    async fn get_reviews_of_pokemon(&self, id: i32) -> Result<Vec<Review>, PokemonError>;
}
