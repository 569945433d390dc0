//! Database connection pool management.
//!
//! The pool is the only handle to the store. It is created once at startup
//! and passed explicitly to every handler and service call.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite, Transaction};

/// Type alias for the SQLite connection pool.
pub type DbPool = Pool<Sqlite>;

/// An open atomic unit against the store.
pub type DbTransaction = Transaction<'static, Sqlite>;

/// Create a new SQLite connection pool.
///
/// # Configuration
///
/// - Database file is created if it does not exist
/// - WAL journal so readers do not block the single writer
/// - 5 second busy timeout: a unit waiting on another unit's write lock
///   blocks instead of failing immediately
/// - Maximum connections: 5
///
/// # Errors
///
/// Returns an error if the URL is malformed or the file cannot be opened.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Open an atomic unit that holds the write lock from its first statement.
///
/// A plain `BEGIN` in SQLite defers locking until the first write, so two
/// units could both read the same balance before either writes it.
/// `BEGIN IMMEDIATE` takes the reserved lock up front, which serializes
/// every read-modify-write unit against the store.
pub async fn begin_unit(pool: &DbPool) -> Result<DbTransaction, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

#[cfg(test)]
pub(crate) async fn test_pool() -> (tempfile::TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("bank.db").display());
    let pool = create_pool(&url).await.unwrap();
    crate::services::account_store::initialize(&pool).await.unwrap();
    (dir, pool)
}
