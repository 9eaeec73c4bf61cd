//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and `bb8`
//! connection pooling.
//!
//! The adapters stay thin: they translate between Diesel row structs
//! (`models.rs`) and domain types, and map every database error into the
//! domain's repository error. Schema definitions and row models are internal
//! implementation details, never exposed to the domain layer.

mod diesel_event_repository;
mod diesel_event_search;
mod diesel_place_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_event_repository::DieselEventRepository;
pub use diesel_event_search::DieselEventSearch;
pub use diesel_place_repository::DieselPlaceRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
