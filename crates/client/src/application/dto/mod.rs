//! Data transfer objects
//!
//! Request and response shapes that are not domain documents themselves.

pub mod requests;

pub use requests::{CreateEntityRequest, CreateUserSettingRequest, UploadedFile, WorkspaceRequest};
