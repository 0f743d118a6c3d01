//! Shared types for list endpoints.

mod pagination;
mod response;

pub use pagination::{PaginationMeta, PaginationParams};
pub use response::FeedResponse;
