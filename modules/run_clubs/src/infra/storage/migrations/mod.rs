//! Database migrations for the run clubs module

use sea_orm_migration::prelude::*;

mod m20250315_000001_create_clubs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250315_000001_create_clubs::Migration)]
    }

    // Modules share one database, each keeps its own history
    fn migration_table_name() -> DynIden {
        Alias::new("run_clubs_migrations").into_iden()
    }
}
