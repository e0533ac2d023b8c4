//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{NewPokemon, Pokemon, PokemonError, PokemonReviewsApi, PokemonUpdate, Review};
use crate::domain::Service;
use async_trait::async_trait;
use catalog_db::Outcome;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }

    /// Create a Pokemon, reporting only whether it was stored
    pub async fn add(&self, pokemon: NewPokemon) -> bool {
        self.service.create_pokemon(pokemon).await.succeeded("add_pokemon")
    }

    /// Delete a Pokemon, reporting only whether it was removed
    pub async fn delete(&self, id: i32) -> bool {
        self.service.delete_pokemon(id).await.succeeded("delete_pokemon")
    }

    /// Update a Pokemon, reporting only whether it was saved
    pub async fn update(&self, id: i32, update: PokemonUpdate) -> bool {
        self.service
            .update_pokemon(id, update)
            .await
            .succeeded("update_pokemon")
    }
}

#[async_trait]
impl PokemonReviewsApi for NativeClient {
    async fn list_pokemon(&self) -> Result<Vec<Pokemon>, PokemonError> {
        self.service.list_pokemon().await
    }

    async fn get_pokemon(&self, id: i32) -> Result<Pokemon, PokemonError> {
        self.service.get_pokemon(id).await
    }

    async fn get_pokemon_by_name(&self, name: &str) -> Result<Pokemon, PokemonError> {
        self.service.get_pokemon_by_name(name).await
    }

    async fn pokemon_exists(&self, id: i32) -> Result<bool, PokemonError> {
        self.service.pokemon_exists(id).await
    }

    async fn create_pokemon(&self, pokemon: NewPokemon) -> Result<Pokemon, PokemonError> {
        self.service.create_pokemon(pokemon).await
    }

    async fn update_pokemon(
        &self,
        id: i32,
        update: PokemonUpdate,
    ) -> Result<Pokemon, PokemonError> {
        self.service.update_pokemon(id, update).await
    }

    async fn delete_pokemon(&self, id: i32) -> Result<(), PokemonError> {
        self.service.delete_pokemon(id).await
    }

    async fn count_pokemon(&self) -> Result<u64, PokemonError> {
        self.service.count_pokemon().await
    }

    async fn get_pokemon_rating(&self, id: i32) -> Result<Decimal, PokemonError> {
        self.service.get_pokemon_rating(id).await
    }

    async fn list_categories(&self) -> Result<Vec<String>, PokemonError> {
        self.service.list_categories().await
    }

    async fn get_pokemon_by_category(&self, category: &str) -> Result<Vec<Pokemon>, PokemonError> {
        self.service.get_pokemon_by_category(category).await
    }

    async fn get_reviews_of_pokemon(&self, id: i32) -> Result<Vec<Review>, PokemonError> {
        self.service.get_reviews_of_pokemon(id).await
    }
}
