pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

use std::str::FromStr;

use eyre::{Result, WrapErr};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

pub type DbPool = Pool<Sqlite>;

pub use store::SqliteStore;

/// Opens the clinic database, creating the file on first use.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .wrap_err_with(|| format!("Invalid database URL: {}", database_url))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Round-trips a trivial query to check the database is reachable.
pub async fn ping(pool: &DbPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// A private in-memory database with the schema already applied.
///
/// Every connection to `sqlite::memory:` gets its own database, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn create_memory_pool() -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    schema::initialize_database(&pool).await?;

    Ok(pool)
}
