//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection, migrations and item repository
//! - Object storage signing (R2 via the S3 API)

pub mod db;
pub mod repositories;
pub mod storage;

pub use db::{Database, HealthCheck, Migrator};
pub use repositories::{
    ItemFilter, ItemPage, ItemQuery, ItemRepository, ItemSnapshot, ItemStore, StatusFilter,
};
pub use storage::{R2Signer, UrlSigner};
