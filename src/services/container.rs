//! Service Container - Centralized service access.
//!
//! Builds every service from its infrastructure collaborators once at
//! startup; handlers only ever see the service traits.

use std::sync::Arc;

use super::{ItemManager, ItemService, UploadManager, UploadService};
use crate::config::StorageConfig;
use crate::infra::{ItemRepository, ItemStore, UrlSigner};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get item service
    fn items(&self) -> Arc<dyn ItemService>;

    /// Get upload service
    fn uploads(&self) -> Arc<dyn UploadService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    item_service: Arc<dyn ItemService>,
    upload_service: Arc<dyn UploadService>,
}

impl Services {
    /// Create a container from already-built services
    pub fn new(item_service: Arc<dyn ItemService>, upload_service: Arc<dyn UploadService>) -> Self {
        Self {
            item_service,
            upload_service,
        }
    }

    /// Wire services over a repository and a signer
    pub fn from_parts(
        items: Arc<dyn ItemRepository>,
        signer: Arc<dyn UrlSigner>,
        storage: StorageConfig,
    ) -> Self {
        Self::new(
            Arc::new(ItemManager::new(items)),
            Arc::new(UploadManager::new(signer, storage)),
        )
    }

    /// Wire services over a database connection and a signer
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        signer: Arc<dyn UrlSigner>,
        storage: StorageConfig,
    ) -> Self {
        Self::from_parts(Arc::new(ItemStore::new(db)), signer, storage)
    }
}

impl ServiceContainer for Services {
    fn items(&self) -> Arc<dyn ItemService> {
        self.item_service.clone()
    }

    fn uploads(&self) -> Arc<dyn UploadService> {
        self.upload_service.clone()
    }
}
