//! Domain service - business logic orchestration

use super::repository::PokemonRepository;
use super::validation;
use crate::config::Config;
use crate::contract::{NewPokemon, Pokemon, PokemonError, PokemonUpdate, Review};
use catalog_db::StoreError;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Domain service for Pokemon and reviews
pub struct Service {
    repo: Arc<dyn PokemonRepository>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn PokemonRepository>, config: Config) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ===== Pokemon Operations =====

    pub async fn list_pokemon(&self) -> Result<Vec<Pokemon>, PokemonError> {
        self.repo.list_all().await.map_err(|e| store_failure("list_pokemon", e))
    }

    pub async fn get_pokemon(&self, id: i32) -> Result<Pokemon, PokemonError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| store_failure("get_pokemon", e))?
            .ok_or_else(|| PokemonError::not_found("pokemon", id))
    }

    pub async fn get_pokemon_by_name(&self, name: &str) -> Result<Pokemon, PokemonError> {
        self.repo
            .find_by_name(name)
            .await
            .map_err(|e| store_failure("get_pokemon_by_name", e))?
            .ok_or_else(|| PokemonError::not_found("pokemon", name.trim()))
    }

    pub async fn pokemon_exists(&self, id: i32) -> Result<bool, PokemonError> {
        self.repo
            .exists(id)
            .await
            .map_err(|e| store_failure("pokemon_exists", e))
    }

    /// Create a Pokemon after validating it and checking the name is free
    pub async fn create_pokemon(&self, pokemon: NewPokemon) -> Result<Pokemon, PokemonError> {
        validation::validate_new_pokemon(&pokemon, &self.config)?;

        if self.config.reject_duplicate_names {
            let existing = self
                .repo
                .find_by_name(&pokemon.name)
                .await
                .map_err(|e| store_failure("create_pokemon", e))?;
            if let Some(existing) = existing {
                tracing::debug!(id = existing.id, name = %existing.name, "Duplicate Pokemon name");
                return Err(PokemonError::Conflict {
                    reason: "Pokemon already exists".to_string(),
                });
            }
        }

        let created = self
            .repo
            .insert(&pokemon)
            .await
            .map_err(|e| store_failure("create_pokemon", e))?;

        tracing::info!(
            id = created.id,
            name = %created.name,
            reviews = created.reviews.len(),
            "Pokemon created"
        );
        Ok(created)
    }

    pub async fn update_pokemon(
        &self,
        id: i32,
        update: PokemonUpdate,
    ) -> Result<Pokemon, PokemonError> {
        validation::validate_update(&update, &self.config)?;

        if self.config.reject_duplicate_names {
            let clash = self
                .repo
                .find_by_name(&update.name)
                .await
                .map_err(|e| store_failure("update_pokemon", e))?;
            if clash.is_some_and(|other| other.id != id) {
                return Err(PokemonError::Conflict {
                    reason: "Pokemon already exists".to_string(),
                });
            }
        }

        let updated = self
            .repo
            .update(id, &update)
            .await
            .map_err(|e| store_failure("update_pokemon", e))?;
        tracing::info!(id, name = %updated.name, "Pokemon updated");
        Ok(updated)
    }

    pub async fn delete_pokemon(&self, id: i32) -> Result<(), PokemonError> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| store_failure("delete_pokemon", e))?;
        tracing::info!(id, "Pokemon deleted");
        Ok(())
    }

    pub async fn count_pokemon(&self) -> Result<u64, PokemonError> {
        self.repo
            .count()
            .await
            .map_err(|e| store_failure("count_pokemon", e))
    }

    /// Average rating of a Pokemon's reviews; zero when it has none
    pub async fn get_pokemon_rating(&self, id: i32) -> Result<Decimal, PokemonError> {
        if !self.pokemon_exists(id).await? {
            return Err(PokemonError::not_found("pokemon", id));
        }
        self.repo
            .average_rating(id)
            .await
            .map_err(|e| store_failure("get_pokemon_rating", e))
    }

    // ===== Category Operations =====

    pub async fn list_categories(&self) -> Result<Vec<String>, PokemonError> {
        self.repo
            .list_category_names()
            .await
            .map_err(|e| store_failure("list_categories", e))
    }

    pub async fn get_pokemon_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Pokemon>, PokemonError> {
        self.repo
            .find_by_category(category.trim())
            .await
            .map_err(|e| store_failure("get_pokemon_by_category", e))
    }

    // ===== Review Operations =====

    pub async fn get_reviews_of_pokemon(&self, id: i32) -> Result<Vec<Review>, PokemonError> {
        if !self.pokemon_exists(id).await? {
            return Err(PokemonError::not_found("pokemon", id));
        }
        self.repo
            .reviews_of(id)
            .await
            .map_err(|e| store_failure("get_reviews_of_pokemon", e))
    }
}

/// Log the storage failure with its kind and convert it for callers
fn store_failure(operation: &'static str, err: StoreError) -> PokemonError {
    match &err {
        StoreError::Persistence(_) => {
            tracing::error!(operation, kind = err.kind(), error = %err, "Store operation failed")
        }
        _ => tracing::debug!(operation, kind = err.kind(), error = %err, "Store operation refused"),
    }
    err.into()
}
