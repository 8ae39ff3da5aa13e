//! Application layer
//!
//! Gateways (`services`) talk to the REST API through the typed `Api`
//! wrapper. The `data` layer sits on top of them and owns caching,
//! invalidation, optimistic writes and failure notifications.

pub mod api;
pub mod data;
pub mod dto;
pub mod error;
pub mod query;
pub mod reorder;
pub mod section_editor;
pub mod services;

pub use error::ServiceError;
