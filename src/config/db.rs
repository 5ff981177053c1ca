// src/config/db.rs
// DOCUMENTATION: Postgres storage bootstrap for the album tables
// PURPOSE: Open the pool the map, marker and multimedia repositories share, then migrate

use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Connections idle longer than this are closed
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
/// Connections are recycled after this age
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Pool settings taken from `DB_MAX_CONNECTIONS` and `DB_CONNECTION_TIMEOUT`
pub fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
}

/// Connect to the album database and apply `migrations/`.
/// Runs once from main.rs when `STORAGE=postgres`. The returned pool backs
/// `MapRepository`, `MarkerRepository` and `MultimediaRepository`.
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!(
        "Connecting to Postgres (max {} connections)",
        config.db_max_connections
    );

    let pool = pool_options(config).connect(&config.database_url).await?;

    // Fail at startup rather than on the first request
    sqlx::query("SELECT 1").execute(&pool).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("maps, markers and multimedia tables are up to date");

    Ok(pool)
}
