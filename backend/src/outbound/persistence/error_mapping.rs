//! Mapping from pool and Diesel failures to the port error.

use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Map pool errors to the connection variant of the port error.
pub(super) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to the query variant, emitting debug context.
pub(super) fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    let message = error.to_string();
    debug!(%message, "diesel operation failed");
    RepositoryError::query(message)
}
