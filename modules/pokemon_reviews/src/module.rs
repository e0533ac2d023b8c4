//! Module wiring: migrations, repository, service and client

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::PokemonReviewsApi;
use crate::domain::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::SeaOrmPokemonRepository;
use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Pokemon reviews module
pub struct PokemonReviewsModule {
    service: Arc<Service>,
}

impl PokemonReviewsModule {
    /// Apply pending migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None)
            .await
            .context("pokemon_reviews migrations failed")?;
        tracing::info!("Pokemon reviews migrations completed");
        Ok(())
    }

    /// Migrate the schema and build the service over `db`
    pub async fn init(db: Arc<DatabaseConnection>, config: Config) -> Result<Self> {
        Self::migrate(&db).await?;

        let repo = Arc::new(SeaOrmPokemonRepository::new(db));
        let service = Arc::new(Service::new(repo, config));

        tracing::info!(
            min_rating = service.config().min_rating,
            max_rating = service.config().max_rating,
            "Pokemon reviews module initialized"
        );
        Ok(Self { service })
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Concrete client, including the boolean convenience calls
    pub fn client(&self) -> NativeClient {
        NativeClient::new(self.service.clone())
    }

    /// Client behind the contract trait
    pub fn api(&self) -> Arc<dyn PokemonReviewsApi> {
        Arc::new(self.client())
    }
}
