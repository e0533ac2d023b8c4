//! Domain service - business logic orchestration

use super::repository::ClubRepository;
use super::validation;
use crate::config::Config;
use crate::contract::{Club, ClubCategory, ClubError, ClubUpdate, NewClub};
use catalog_db::StoreError;
use std::sync::Arc;

/// Domain service for run clubs
pub struct Service {
    repo: Arc<dyn ClubRepository>,
    config: Config,
}

impl Service {
    pub fn new(repo: Arc<dyn ClubRepository>, config: Config) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ===== Club Operations =====

    pub async fn list_clubs(&self) -> Result<Vec<Club>, ClubError> {
        self.repo.list_all().await.map_err(|e| store_failure("list_clubs", e))
    }

    pub async fn list_clubs_page(
        &self,
        offset: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Club>, ClubError> {
        let limit = validation::resolve_limit(limit, &self.config)?;
        self.repo
            .list_slice(offset, limit)
            .await
            .map_err(|e| store_failure("list_clubs_page", e))
    }

    pub async fn get_club(&self, id: i32) -> Result<Club, ClubError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| store_failure("get_club", e))?
            .ok_or_else(|| ClubError::not_found(id))
    }

    pub async fn get_club_by_title(&self, title: &str) -> Result<Club, ClubError> {
        self.repo
            .find_by_title(title)
            .await
            .map_err(|e| store_failure("get_club_by_title", e))?
            .ok_or_else(|| ClubError::not_found(title.trim()))
    }

    pub async fn club_exists(&self, id: i32) -> Result<bool, ClubError> {
        self.repo
            .exists(id)
            .await
            .map_err(|e| store_failure("club_exists", e))
    }

    pub async fn create_club(&self, club: NewClub) -> Result<Club, ClubError> {
        let club = validation::prepare_club(club, &self.config)?;
        let created = self
            .repo
            .insert(&club)
            .await
            .map_err(|e| store_failure("create_club", e))?;
        tracing::info!(
            id = created.id,
            title = %created.title,
            state = %created.address.state,
            "Club created"
        );
        Ok(created)
    }

    pub async fn update_club(&self, id: i32, update: ClubUpdate) -> Result<Club, ClubError> {
        let update = validation::prepare_club(update, &self.config)?;
        let updated = self
            .repo
            .update(id, &update)
            .await
            .map_err(|e| store_failure("update_club", e))?;
        tracing::info!(id, title = %updated.title, "Club updated");
        Ok(updated)
    }

    pub async fn delete_club(&self, id: i32) -> Result<(), ClubError> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| store_failure("delete_club", e))?;
        tracing::info!(id, "Club deleted");
        Ok(())
    }

    pub async fn count_clubs(&self) -> Result<u64, ClubError> {
        self.repo
            .count()
            .await
            .map_err(|e| store_failure("count_clubs", e))
    }

    // ===== Address Queries =====

    pub async fn list_states(&self) -> Result<Vec<String>, ClubError> {
        self.repo
            .list_states()
            .await
            .map_err(|e| store_failure("list_states", e))
    }

    pub async fn get_clubs_by_state(&self, state: &str) -> Result<Vec<Club>, ClubError> {
        let state = validation::normalize_state(state)?;
        self.repo
            .find_by_state(&state)
            .await
            .map_err(|e| store_failure("get_clubs_by_state", e))
    }

    pub async fn get_clubs_by_city(&self, city: &str) -> Result<Vec<Club>, ClubError> {
        self.repo
            .find_by_city(city)
            .await
            .map_err(|e| store_failure("get_clubs_by_city", e))
    }

    // ===== Category Queries =====

    pub async fn get_clubs_by_category(
        &self,
        category: ClubCategory,
        offset: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Club>, ClubError> {
        let limit = validation::resolve_limit(limit, &self.config)?;
        self.repo
            .find_by_category(category, offset, limit)
            .await
            .map_err(|e| store_failure("get_clubs_by_category", e))
    }

    pub async fn count_clubs_by_category(&self, category: ClubCategory) -> Result<u64, ClubError> {
        self.repo
            .count_by_category(category)
            .await
            .map_err(|e| store_failure("count_clubs_by_category", e))
    }
}

fn store_failure(operation: &'static str, err: StoreError) -> ClubError {
    match &err {
        StoreError::Persistence(_) => {
            tracing::error!(operation, kind = err.kind(), error = %err, "Store operation failed")
        }
        _ => tracing::debug!(operation, kind = err.kind(), error = %err, "Store operation refused"),
    }
    err.into()
}
