//! Edge Content API - published feed, item resolution and upload signing
//!
//! Serves a content feed backed by a relational store, resolves single
//! items (by id or by slug) together with their neighbours in the
//! published feed, and hands out presigned PUT URLs for direct uploads
//! to an R2 bucket.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Items, slugs and feed navigation
//! - **services**: Feed, item and upload use cases
//! - **infra**: Database, item repository and object storage signing
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, StorageConfig};
pub use domain::{Item, ItemDetail, ItemId, ItemStatus};
pub use errors::{AppError, AppResult};
