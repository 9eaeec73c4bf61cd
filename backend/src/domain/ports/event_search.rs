//! Port abstraction for the paginated event search query.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::search::{EventSearchCriteria, EventView};

use super::error::RepositoryError;

#[async_trait]
pub trait EventSearch: Send + Sync {
    /// Run the composed search over events joined with places, returning the
    /// requested page of projections plus the total matching count.
    async fn search(
        &self,
        criteria: &EventSearchCriteria,
        page: &PageRequest,
    ) -> Result<Page<EventView>, RepositoryError>;
}
