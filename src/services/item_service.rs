//! Item service - feed listing and single-item resolution.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::{id_from_slug, ItemDetail, ItemId, ItemStatus, NavigationLinks};
use crate::errors::{AppError, AppResult};
use crate::infra::{ItemFilter, ItemQuery, ItemRepository};
use crate::types::{FeedResponse, PaginationMeta, PaginationParams};

/// Route parameters identifying a single item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemParams {
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl ItemParams {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            item_id: Some(id.into()),
            slug: None,
        }
    }

    pub fn by_slug(slug: impl Into<String>) -> Self {
        Self {
            item_id: None,
            slug: Some(slug.into()),
        }
    }

    /// The explicit id if given, otherwise the id encoded in the slug.
    pub fn effective_id(&self) -> Option<ItemId> {
        match self.item_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Some(ItemId::from(id)),
            _ => self.slug.as_deref().and_then(id_from_slug),
        }
    }
}

/// Item service trait for dependency injection.
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Published items in feed order, optionally paginated
    async fn feed(&self, pagination: &PaginationParams) -> AppResult<FeedResponse>;

    /// Resolve one item with its feed neighbours.
    ///
    /// `statuses` overrides the accepted statuses (default: published
    /// or unlisted). The item must also be part of the published feed.
    async fn resolve(
        &self,
        params: &ItemParams,
        statuses: Option<&[ItemStatus]>,
    ) -> AppResult<ItemDetail>;
}

/// Concrete implementation of ItemService over an ItemRepository.
pub struct ItemManager {
    items: Arc<dyn ItemRepository>,
}

impl ItemManager {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ItemService for ItemManager {
    async fn feed(&self, pagination: &PaginationParams) -> AppResult<FeedResponse> {
        let filter = ItemFilter::published();

        if !pagination.is_requested() {
            let items = self.items.find(&ItemQuery::new(filter)).await?;
            return Ok(FeedResponse::all(items));
        }

        let query = ItemQuery::new(filter)
            .limit(pagination.limit())
            .offset(pagination.offset());
        let page = self.items.find_page(&query).await?;

        Ok(FeedResponse::page(
            page.items,
            PaginationMeta::new(pagination.page(), pagination.limit(), page.total),
        ))
    }

    async fn resolve(
        &self,
        params: &ItemParams,
        statuses: Option<&[ItemStatus]>,
    ) -> AppResult<ItemDetail> {
        let Some(id) = params.effective_id() else {
            tracing::info!(?params, "No item id resolvable from request");
            return Err(AppError::NotFound);
        };
        let accepted = statuses.unwrap_or(ItemStatus::VISIBLE);
        tracing::debug!(item_id = %id, ?accepted, "Resolving item");

        let snapshot = self.items.snapshot(&id, accepted).await?;

        let Some(links) = NavigationLinks::locate(&snapshot.published, &id) else {
            tracing::info!(item_id = %id, "Item not found in published feed");
            return Err(AppError::NotFound);
        };

        let Some(item) = snapshot.item else {
            tracing::info!(item_id = %id, "Item status not accepted");
            return Err(AppError::NotFound);
        };

        Ok(ItemDetail::new(item, links))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockItemRepository;
    use crate::infra::{ItemPage, ItemSnapshot, StatusFilter};

    const ID: &str = "472d74ac4df2bedd120dd49dd83c7e44";

    #[test]
    fn test_explicit_id_wins_over_slug() {
        let params = ItemParams {
            item_id: Some("explicit".to_string()),
            slug: Some(format!("post-{ID}")),
        };
        assert_eq!(params.effective_id(), Some(ItemId::from("explicit")));
    }

    #[test]
    fn test_blank_id_falls_back_to_slug() {
        let params = ItemParams {
            item_id: Some("  ".to_string()),
            slug: Some(format!("post-{ID}")),
        };
        assert_eq!(params.effective_id(), Some(ItemId::from(ID)));
    }

    #[test]
    fn test_nothing_resolvable() {
        assert_eq!(ItemParams::default().effective_id(), None);
        assert_eq!(ItemParams::by_slug("trailing-dash-").effective_id(), None);
    }

    #[tokio::test]
    async fn test_unresolvable_id_issues_no_query() {
        // No expectations: any repository call panics
        let repo = MockItemRepository::new();
        let service = ItemManager::new(Arc::new(repo));

        let result = service.resolve(&ItemParams::by_slug("untitled-"), None).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_status_override_reaches_repository() {
        let mut repo = MockItemRepository::new();
        repo.expect_snapshot()
            .withf(|id, statuses| id.as_str() == ID && statuses == [ItemStatus::Draft])
            .times(1)
            .returning(|_, _| Ok(ItemSnapshot::default()));
        let service = ItemManager::new(Arc::new(repo));

        let result = service
            .resolve(&ItemParams::by_id(ID), Some(&[ItemStatus::Draft]))
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_unpaginated_feed_queries_published_without_window() {
        let mut repo = MockItemRepository::new();
        repo.expect_find()
            .withf(|query| {
                query.filter.status == StatusFilter::Is(ItemStatus::Published)
                    && query.filter.id.is_none()
                    && query.limit.is_none()
                    && query.offset.is_none()
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));
        repo.expect_find_page().never();
        let service = ItemManager::new(Arc::new(repo));

        let feed = service.feed(&PaginationParams::default()).await.unwrap();

        assert!(feed.items.is_empty());
        assert!(feed.meta.is_none());
    }

    #[tokio::test]
    async fn test_paginated_feed_reads_page_and_total_together() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_page()
            .withf(|query| {
                query.filter.status == StatusFilter::Is(ItemStatus::Published)
                    && query.limit == Some(10)
                    && query.offset == Some(10)
            })
            .times(1)
            .returning(|_| {
                Ok(ItemPage {
                    items: Vec::new(),
                    total: 25,
                })
            });
        repo.expect_find().never();
        let service = ItemManager::new(Arc::new(repo));

        let feed = service.feed(&PaginationParams::new(2, 10)).await.unwrap();

        assert_eq!(feed.meta, Some(PaginationMeta::new(2, 10, 25)));
        assert_eq!(feed.meta.unwrap().total_pages, 3);
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut repo = MockItemRepository::new();
        repo.expect_snapshot()
            .returning(|_, _| Err(AppError::internal("connection reset")));
        let service = ItemManager::new(Arc::new(repo));

        let result = service.resolve(&ItemParams::by_id(ID), None).await;

        tokio_test::assert_err!(&result);
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
