//! Port abstraction for event persistence adapters.

use async_trait::async_trait;

use crate::domain::event::{Event, EventPayload};
use crate::domain::search::EventFilter;

use super::error::RepositoryError;

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// List events matching the filter, ordered by start time then id.
    async fn find_all(&self, filter: &EventFilter) -> Result<Vec<Event>, RepositoryError>;

    /// Fetch one event by identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, RepositoryError>;

    /// Insert a new event and return the stored record.
    async fn insert(&self, payload: &EventPayload) -> Result<Event, RepositoryError>;

    /// Persist the given record over its stored counterpart.
    async fn update(&self, event: &Event) -> Result<(), RepositoryError>;

    /// Delete by identifier. Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
