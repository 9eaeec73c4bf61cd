//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data`, so they depend
//! only on the domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EventRepository, EventSearch, PlaceRepository};
use crate::domain::{EventService, PlaceService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub places: PlaceService,
    pub events: EventService,
}

impl HttpState {
    /// Wire the domain services from their port implementations.
    pub fn new(
        places: Arc<dyn PlaceRepository>,
        events: Arc<dyn EventRepository>,
        search: Arc<dyn EventSearch>,
    ) -> Self {
        Self {
            places: PlaceService::new(Arc::clone(&places)),
            events: EventService::new(events, places, search),
        }
    }
}
