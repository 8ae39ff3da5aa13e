//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod api_port;
pub mod identity_port;
pub mod notification_port;
pub mod platform;
pub mod raw_api_port;

pub use api_port::{ApiError, ApiPort};
pub use identity_port::IdentityPort;
pub use notification_port::{NotificationPort, Toast, ToastLevel};
pub use platform::{storage_keys, StorageProvider};
pub use raw_api_port::{MultipartFile, RawApiPort};

#[cfg(any(test, feature = "testing"))]
pub use identity_port::MockIdentityPort;
#[cfg(any(test, feature = "testing"))]
pub use notification_port::MockNotificationPort;
#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
