use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

/// Opens the Postgres connection pool.
///
/// # Errors
///
/// Returns the connection error when the database cannot be reached.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(16)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// # Errors
///
/// Returns the error of the first migration that fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
