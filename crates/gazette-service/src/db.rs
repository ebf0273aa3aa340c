use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;
use tracing::info;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: ConnectionError,
    },

    #[error("Failed to run migrations: {0}")]
    Migration(String),
}

/// Open the database and bring its schema up to date.
pub fn connect(database_url: &str) -> Result<SqliteConnection, DbError> {
    let mut connection =
        SqliteConnection::establish(database_url).map_err(|source| DbError::Connection {
            url: database_url.to_string(),
            source,
        })?;

    run_migrations(&mut connection)?;
    Ok(connection)
}

pub fn run_migrations(connection: &mut SqliteConnection) -> Result<(), DbError> {
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| DbError::Migration(err.to_string()))?;

    for version in applied {
        info!(%version, "Applied migration");
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn establish_test_connection() -> SqliteConnection {
    connect(":memory:").expect("Failed to create in-memory database")
}
