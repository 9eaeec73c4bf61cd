//! Port abstraction for place persistence adapters.

use async_trait::async_trait;

use crate::domain::place::{Place, PlacePayload};

use super::error::RepositoryError;

#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// List every place, ordered by identifier.
    async fn find_all(&self) -> Result<Vec<Place>, RepositoryError>;

    /// Fetch one place by identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, RepositoryError>;

    /// Insert a new place and return the stored record.
    async fn insert(&self, payload: &PlacePayload) -> Result<Place, RepositoryError>;

    /// Persist the given record over its stored counterpart.
    async fn update(&self, place: &Place) -> Result<(), RepositoryError>;

    /// Delete by identifier. Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
