//! Record storage for the portfolio collections.
//!
//! Two interchangeable backends implement [`RecordStore`] and
//! [`SettingsStore`]: whole-document JSON files on disk ([`file`]) and
//! Postgres tables ([`pg`]). A deployment picks one and wires it into
//! [`Stores`].

pub mod error;
pub mod file;
pub mod pg;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub use error::StoreError;
pub use store::{RecordStore, SettingsStore, Stored, Stores};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the collection tables and seed the settings row.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
