//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod envelope;
pub mod error;
pub mod events;
pub mod fallback;
pub mod health;
pub mod places;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
