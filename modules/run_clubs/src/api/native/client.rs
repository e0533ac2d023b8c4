//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Club, ClubCategory, ClubError, ClubUpdate, NewClub, RunClubsApi};
use crate::domain::Service;
use async_trait::async_trait;
use catalog_db::Outcome;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }

    /// Create a club, reporting only whether it was stored
    pub async fn add(&self, club: NewClub) -> bool {
        self.service.create_club(club).await.succeeded("add_club")
    }

    /// Delete a club, reporting only whether it was removed
    pub async fn delete(&self, id: i32) -> bool {
        self.service.delete_club(id).await.succeeded("delete_club")
    }

    /// Update a club, reporting only whether it was saved
    pub async fn update(&self, id: i32, update: ClubUpdate) -> bool {
        self.service
            .update_club(id, update)
            .await
            .succeeded("update_club")
    }
}

#[async_trait]
impl RunClubsApi for NativeClient {
    async fn list_clubs(&self) -> Result<Vec<Club>, ClubError> {
        self.service.list_clubs().await
    }

    async fn list_clubs_page(
        &self,
        offset: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Club>, ClubError> {
        self.service.list_clubs_page(offset, limit).await
    }

    async fn get_club(&self, id: i32) -> Result<Club, ClubError> {
        self.service.get_club(id).await
    }

    async fn get_club_by_title(&self, title: &str) -> Result<Club, ClubError> {
        self.service.get_club_by_title(title).await
    }

    async fn club_exists(&self, id: i32) -> Result<bool, ClubError> {
        self.service.club_exists(id).await
    }

    async fn create_club(&self, club: NewClub) -> Result<Club, ClubError> {
        self.service.create_club(club).await
    }

    async fn update_club(&self, id: i32, update: ClubUpdate) -> Result<Club, ClubError> {
        self.service.update_club(id, update).await
    }

    async fn delete_club(&self, id: i32) -> Result<(), ClubError> {
        self.service.delete_club(id).await
    }

    async fn count_clubs(&self) -> Result<u64, ClubError> {
        self.service.count_clubs().await
    }

    async fn list_states(&self) -> Result<Vec<String>, ClubError> {
        self.service.list_states().await
    }

    async fn get_clubs_by_state(&self, state: &str) -> Result<Vec<Club>, ClubError> {
        self.service.get_clubs_by_state(state).await
    }

    async fn get_clubs_by_city(&self, city: &str) -> Result<Vec<Club>, ClubError> {
        self.service.get_clubs_by_city(city).await
    }

    async fn get_clubs_by_category(
        &self,
        category: ClubCategory,
        offset: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Club>, ClubError> {
        self.service
            .get_clubs_by_category(category, offset, limit)
            .await
    }

    async fn count_clubs_by_category(&self, category: ClubCategory) -> Result<u64, ClubError> {
        self.service.count_clubs_by_category(category).await
    }
}
