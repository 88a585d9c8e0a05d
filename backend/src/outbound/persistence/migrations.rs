//! Embedded schema migrations.
//!
//! The SQL under `backend/migrations` is compiled into the binary so a fresh
//! database can be brought up to date at startup. Diesel's migration harness
//! is synchronous, so it runs on a blocking thread with its own connection.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Embedded migrations from the backend/migrations directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be established.
    #[error("failed to connect for migrations: {message}")]
    Connection { message: String },

    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
}

fn apply(database_url: &str) -> Result<usize, MigrationError> {
    let mut conn = PgConnection::establish(database_url).map_err(|err| {
        MigrationError::Connection {
            message: err.to_string(),
        }
    })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(applied.len())
}

/// Apply all pending migrations, returning how many ran.
///
/// # Errors
///
/// Returns [`MigrationError`] when the database is unreachable or a migration
/// fails.
pub async fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || apply(&url))
        .await
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?
}
