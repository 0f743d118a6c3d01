//! Response envelopes shared by the content endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use super::PaginationMeta;
use crate::domain::Item;

/// `{ "items": [...] }` feed envelope
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeedResponse {
    pub items: Vec<Item>,
    /// Present only for paginated requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PaginationMeta>,
}

impl FeedResponse {
    /// Whole feed, no pagination metadata
    pub fn all(items: Vec<Item>) -> Self {
        Self { items, meta: None }
    }

    pub fn page(items: Vec<Item>, meta: PaginationMeta) -> Self {
        Self {
            items,
            meta: Some(meta),
        }
    }
}
