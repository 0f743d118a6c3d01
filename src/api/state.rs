//! Application state - Dependency injection container.
//!
//! Provides handlers with the services and the allow-check policy.

use std::sync::Arc;

use super::middleware::{access_policy, AccessPolicy};
use crate::config::Config;
use crate::infra::HealthCheck;
use crate::services::{ItemService, ServiceContainer, Services, UploadService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Feed and item resolution
    pub item_service: Arc<dyn ItemService>,
    /// Presigned upload URLs
    pub upload_service: Arc<dyn UploadService>,
    /// Allow-check applied to content routes
    pub access: Arc<dyn AccessPolicy>,
    /// Database check for the health endpoint
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Create application state from the service container and config.
    pub fn from_config(services: &Services, health: Arc<dyn HealthCheck>, config: &Config) -> Self {
        Self::new(
            services.items(),
            services.uploads(),
            access_policy(&config.allowed_origins),
            health,
        )
    }

    /// Create application state with manually injected services.
    pub fn new(
        item_service: Arc<dyn ItemService>,
        upload_service: Arc<dyn UploadService>,
        access: Arc<dyn AccessPolicy>,
        health: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            item_service,
            upload_service,
            access,
            health,
        }
    }
}
