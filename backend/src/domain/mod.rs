//! Domain entities, error taxonomy, search criteria, and services.
//!
//! Everything here is transport agnostic. Inbound adapters map [`Error`]
//! onto the HTTP envelope; outbound adapters implement the [`ports`] traits
//! over the relational store.

pub mod error;
pub mod event;
pub mod event_service;
pub mod place;
pub mod place_service;
pub mod ports;
pub mod search;

pub use self::error::{Error, ErrorKind};
pub use self::event::{Event, EventDetail, EventPayload, EventStatus};
pub use self::event_service::EventService;
pub use self::place::{Place, PlacePayload, PlaceType};
pub use self::place_service::PlaceService;
pub use self::search::{EventFilter, EventSearchCriteria, EventView};
