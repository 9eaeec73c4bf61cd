//! Storage ports implemented by outbound adapters.

mod error;
mod event_repository;
mod event_search;
pub(crate) mod macros;
mod place_repository;

pub use error::RepositoryError;
pub use event_repository::EventRepository;
pub use event_search::EventSearch;
pub use place_repository::PlaceRepository;
