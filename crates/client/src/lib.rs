//! Tools for Authors client core.
//!
//! REST gateways, the shared query cache with optimistic mutations, the
//! drag reorder controller, the detail section editor and reducer-backed
//! UI state. Rendering lives elsewhere; this crate is what views call into.

pub mod app;
pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;

// Re-export commonly used entrypoints
pub use app::AuthorTools;
pub use application::ServiceError;
pub use config::ClientConfig;
