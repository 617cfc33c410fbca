//! Reference backend for the `/tarefa` resource.

mod handler;
pub mod route;

use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Pool, Sqlite};

pub use route::{cors_layer, create_router};

// Struct representing the application state
pub struct AppState {
    pub db: Pool<Sqlite>,
}

/// Opens the pool, creating the database file and the `tarefa` table when
/// missing. In-memory URLs get a single connection so every query sees the
/// same database.
pub async fn connect(database_url: &str) -> Result<Pool<Sqlite>, sqlx::Error> {
    let in_memory = database_url.contains(":memory:");

    if !in_memory && !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        tracing::info!(database_url, "creating database");
        Sqlite::create_database(database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(if in_memory { 1 } else { 10 })
        .connect(database_url)
        .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS tarefa (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        description TEXT NOT NULL,
        completed BOOLEAN NOT NULL DEFAULT 0
    );"#,
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}
