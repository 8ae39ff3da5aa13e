//! Infrastructure adapters
//!
//! Concrete implementations of the outbound ports: the reqwest-backed REST
//! client, token identity, toast broadcasting and file-backed storage.

pub mod http_client;
pub mod identity;
pub mod notifications;
pub mod platform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use http_client::HttpApiAdapter;
pub use identity::StaticTokenIdentity;
pub use notifications::BroadcastNotifier;
pub use platform::DesktopStorageProvider;
