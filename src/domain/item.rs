//! Item domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::navigation::NavigationLinks;

/// Opaque item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "472d74ac4df2bedd120dd49dd83c7e44")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Publication status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Listed in the public feed
    Published,
    /// Reachable by direct link, absent from the feed
    Unlisted,
    Draft,
    Archived,
}

impl ItemStatus {
    /// Statuses accepted by single-item resolution unless overridden
    pub const VISIBLE: &'static [ItemStatus] = &[ItemStatus::Published, ItemStatus::Unlisted];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Published => "published",
            ItemStatus::Unlisted => "unlisted",
            ItemStatus::Draft => "draft",
            ItemStatus::Archived => "archived",
        }
    }
}

/// Unknown values fall back to `Draft` so they never reach the public feed.
impl From<&str> for ItemStatus {
    fn from(s: &str) -> Self {
        match s {
            "published" => ItemStatus::Published,
            "unlisted" => ItemStatus::Unlisted,
            "archived" => ItemStatus::Archived,
            _ => ItemStatus::Draft,
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content item as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: ItemId,
    #[schema(example = "hello-world-472d74ac4df2bedd120dd49dd83c7e44")]
    pub slug: String,
    #[schema(example = "Hello, world")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Object key of the cover image, relative to the media base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "images/item-472d74ac4df2bedd120dd49dd83c7e44.png")]
    pub cover_image: Option<String>,
    pub status: ItemStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Single resolved item with links to its feed neighbours.
///
/// Both link fields are always serialized; `null` marks a feed boundary.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ItemDetail {
    #[serde(flatten)]
    pub item: Item,
    #[schema(example = "/items/9a0364b9e99bb480dd25e1f0284c8555")]
    pub next_item_link: Option<String>,
    #[schema(example = "/items/61c88e4c5e8f4ad3aad6cb4b5e7f5d2c")]
    pub prev_item_link: Option<String>,
}

impl ItemDetail {
    pub fn new(item: Item, links: NavigationLinks) -> Self {
        Self {
            item,
            next_item_link: links.next,
            prev_item_link: links.prev,
        }
    }
}
