//! Module wiring: migrations, repository, service and client

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::RunClubsApi;
use crate::domain::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::SeaOrmClubRepository;
use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Run clubs module
pub struct RunClubsModule {
    service: Arc<Service>,
}

impl RunClubsModule {
    /// Apply pending migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None)
            .await
            .context("run_clubs migrations failed")?;
        tracing::info!("Run clubs migrations completed");
        Ok(())
    }

    pub async fn init(db: Arc<DatabaseConnection>, config: Config) -> Result<Self> {
        Self::migrate(&db).await?;

        let repo = Arc::new(SeaOrmClubRepository::new(db));
        let service = Arc::new(Service::new(repo, config));

        tracing::info!(
            default_page_size = service.config().default_page_size,
            max_page_size = service.config().max_page_size,
            "Run clubs module initialized"
        );
        Ok(Self { service })
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn client(&self) -> NativeClient {
        NativeClient::new(self.service.clone())
    }

    pub fn api(&self) -> Arc<dyn RunClubsApi> {
        Arc::new(self.client())
    }
}
