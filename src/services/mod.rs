//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and infrastructure to fulfill
//! the content use cases. They depend on repository and signer
//! traits, never on concrete stores.

pub mod container;
mod item_service;
mod upload_service;

pub use container::{ServiceContainer, Services};
pub use item_service::{ItemManager, ItemParams, ItemService};
pub use upload_service::{PresignedUpload, UploadManager, UploadService};
