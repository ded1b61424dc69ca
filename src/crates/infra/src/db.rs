use crate::config::DatabaseConfig;
use log::info;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement,
};
use std::time::Duration;

/// Builds the connection pool and probes it once.
///
/// Repositories hold a clone of the returned handle; every statement checks a
/// connection out of the pool and hands it back when the statement finishes,
/// whether it succeeded or not.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(cfg.url());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    db.execute(Statement::from_string(
        DbBackend::Postgres,
        "SELECT 1".to_owned(),
    ))
    .await?;

    info!(
        "Database connection pool initialized successfully ({})",
        cfg.target()
    );
    Ok(db)
}
