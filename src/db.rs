//! Database Module
//!
//! SQLite connection pool construction and startup schema creation.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

use crate::error::Result;

/// Customers table. AUTOINCREMENT keeps row ids monotonic so an id is
/// never reused after a delete.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    code TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL
)
"#;

/// Creates a SQLite connection pool with WAL mode enabled.
///
/// # Arguments
/// * `database_url` - SQLite URL (e.g., "sqlite:customers.db")
///
/// # Configuration
/// - Journal mode: WAL
/// - Synchronous: NORMAL
/// - Busy timeout: 5 seconds
/// - Max connections: 10
/// - Creates the database file if missing
pub async fn init_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5))
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Creates the customers table if it does not exist.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}
