use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Opens the shared connection pool. Callers pass the handle explicitly into
/// the repositories and middleware; there is no process-wide singleton.
pub async fn get_db_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}
