//! SQLite connection pool initialization.
//!
//! The database URL is read from the `DATABASE_URL` environment variable and
//! defaults to a file next to the binary. `mode=rwc` makes SQLite create the
//! file on first run, matching the original deployment's "first launch
//! creates the database" behavior.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://sweetdelights.db?mode=rwc";

/// Initializes the SQLite connection pool.
///
/// The returned pool is cheaply cloneable and lives in the application state.
///
/// # Panics
///
/// Panics if the database cannot be opened. This runs once at startup, before
/// the server binds.
pub async fn init_db_pool() -> SqlitePool {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
