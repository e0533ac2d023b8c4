//! Database migrations for the Pokemon reviews module

use sea_orm_migration::prelude::*;

mod m20250301_000001_create_pokemon;
mod m20250301_000002_create_reviews;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_pokemon::Migration),
            Box::new(m20250301_000002_create_reviews::Migration),
        ]
    }

    // Modules share one database, each keeps its own history
    fn migration_table_name() -> DynIden {
        Alias::new("pokemon_reviews_migrations").into_iden()
    }
}
