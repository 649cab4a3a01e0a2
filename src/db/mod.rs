use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

pub mod entities;
pub mod schema;
pub mod services;

/// Connects to the database named by `database_url` (Postgres in
/// production, `sqlite::memory:` in tests).
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    if database_url.starts_with("sqlite") {
        // an in-memory SQLite database exists per connection, so the pool
        // must not hand out more than one
        options.max_connections(1);
    }
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Database connection established.");
    Ok(db)
}
