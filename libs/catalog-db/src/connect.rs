//! Connection setup

use crate::config::DbConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Open a pooled connection described by `cfg`
pub async fn connect(cfg: &DbConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    opts.connect_timeout(cfg.connect_timeout)
        .sqlx_logging(cfg.sqlx_logging);

    if let Some(max) = cfg.max_connections {
        opts.max_connections(max);
    }
    if let Some(min) = cfg.min_connections {
        opts.min_connections(min);
    }

    let conn = Database::connect(opts).await?;
    tracing::info!(backend = cfg.backend(), "Database connection established");
    Ok(conn)
}
