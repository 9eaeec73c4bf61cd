//! Embedded schema migrations, applied at startup.

use diesel::Connection;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;
use tracing::info;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying embedded migrations.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    #[error("failed to run migrations: {0}")]
    Run(String),
    #[error("migration task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Apply any pending embedded migrations against the given database.
///
/// The migration harness is synchronous, so the work runs on a blocking
/// thread over an [`AsyncConnectionWrapper`].
pub async fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&url)?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Run(err.to_string()))?;
        info!(count = applied.len(), "applied pending migrations");
        Ok(())
    })
    .await?
}

#[cfg(test)]
mod tests {
    use diesel::pg::Pg;
    use diesel::migration::MigrationSource;

    use super::MIGRATIONS;

    #[test]
    fn embedded_migrations_are_present() {
        let migrations = MigrationSource::<Pg>::migrations(&MIGRATIONS).expect("migrations load");
        assert!(!migrations.is_empty());
    }
}
