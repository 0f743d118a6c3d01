//! Item repository - read access to the content store.

use async_trait::async_trait;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    AccessMode, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IsolationLevel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Select, TransactionTrait,
};

use super::entities::item::{self, Entity as ItemEntity};
use crate::domain::{Item, ItemId, ItemStatus};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Status condition of an item query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    Any,
    Is(ItemStatus),
    In(Vec<ItemStatus>),
}

/// Field conditions of an item query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub id: Option<ItemId>,
    pub status: StatusFilter,
}

impl ItemFilter {
    /// Every published item.
    pub fn published() -> Self {
        Self {
            id: None,
            status: StatusFilter::Is(ItemStatus::Published),
        }
    }

    /// The item with `id`, if its status is one of `statuses`.
    pub fn by_id(id: ItemId, statuses: &[ItemStatus]) -> Self {
        Self {
            id: Some(id),
            status: StatusFilter::In(statuses.to_vec()),
        }
    }
}

/// Filter plus an optional result window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuery {
    pub filter: ItemFilter,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl ItemQuery {
    pub fn new(filter: ItemFilter) -> Self {
        Self {
            filter,
            limit: None,
            offset: None,
        }
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// One window of matching items with the total match count, read together.
#[derive(Debug, Clone, Default)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub total: u64,
}

/// One consistent read of a single item and the published feed order.
#[derive(Debug, Clone, Default)]
pub struct ItemSnapshot {
    /// The requested item, if it exists with an accepted status
    pub item: Option<Item>,
    /// Ids of all published items in feed order
    pub published: Vec<ItemId>,
}

/// Item repository trait for dependency injection.
///
/// Results are always in feed order: newest `published_at` first,
/// ties broken by id.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find items matching the query
    async fn find(&self, query: &ItemQuery) -> AppResult<Vec<Item>>;

    /// Find one window of items and the total count from the same snapshot
    async fn find_page(&self, query: &ItemQuery) -> AppResult<ItemPage>;

    /// Read an item and the published ordering from the same snapshot
    async fn snapshot(&self, id: &ItemId, statuses: &[ItemStatus]) -> AppResult<ItemSnapshot>;
}

/// SeaORM implementation of ItemRepository
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn read_only(&self) -> AppResult<DatabaseTransaction> {
        self.db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await
            .map_err(AppError::from)
    }
}

/// Read-only work is never committed
async fn finish(txn: DatabaseTransaction) {
    if let Err(e) = txn.rollback().await {
        tracing::warn!("Snapshot rollback failed: {}", e);
    }
}

#[async_trait]
impl ItemRepository for ItemStore {
    async fn find(&self, query: &ItemQuery) -> AppResult<Vec<Item>> {
        find_in(&self.db, query).await
    }

    async fn find_page(&self, query: &ItemQuery) -> AppResult<ItemPage> {
        let txn = self.read_only().await?;

        let result: AppResult<ItemPage> = async {
            let items = find_in(&txn, query).await?;
            let total = filtered(ItemEntity::find(), &query.filter)
                .count(&txn)
                .await
                .map_err(AppError::from)?;
            Ok(ItemPage { items, total })
        }
        .await;

        finish(txn).await;
        result
    }

    async fn snapshot(&self, id: &ItemId, statuses: &[ItemStatus]) -> AppResult<ItemSnapshot> {
        let txn = self.read_only().await?;
        let result = read_snapshot(&txn, id, statuses).await;
        finish(txn).await;
        result
    }
}

async fn find_in<C: ConnectionTrait>(conn: &C, query: &ItemQuery) -> AppResult<Vec<Item>> {
    let mut select = ordered(filtered(ItemEntity::find(), &query.filter));
    if let Some(limit) = query.limit {
        select = select.limit(limit);
    }
    if let Some(offset) = query.offset {
        select = select.offset(offset);
    }

    let models = select.all(conn).await.map_err(AppError::from)?;
    Ok(models.into_iter().map(Item::from).collect())
}

async fn read_snapshot<C: ConnectionTrait>(
    conn: &C,
    id: &ItemId,
    statuses: &[ItemStatus],
) -> AppResult<ItemSnapshot> {
    let filter = ItemFilter::by_id(id.clone(), statuses);
    let item = filtered(ItemEntity::find(), &filter)
        .one(conn)
        .await
        .map_err(AppError::from)?;

    let published = published_ids()
        .into_tuple::<String>()
        .all(conn)
        .await
        .map_err(AppError::from)?;

    Ok(ItemSnapshot {
        item: item.map(Item::from),
        published: published.into_iter().map(ItemId::new).collect(),
    })
}

fn filtered(select: Select<ItemEntity>, filter: &ItemFilter) -> Select<ItemEntity> {
    let select = match &filter.id {
        Some(id) => select.filter(item::Column::Id.eq(id.as_str())),
        None => select,
    };

    match &filter.status {
        StatusFilter::Any => select,
        StatusFilter::Is(status) => select.filter(item::Column::Status.eq(status.as_str())),
        StatusFilter::In(statuses) => {
            select.filter(item::Column::Status.is_in(statuses.iter().map(ItemStatus::as_str)))
        }
    }
}

/// Ids of published items in feed order.
fn published_ids() -> Select<ItemEntity> {
    ordered(filtered(ItemEntity::find(), &ItemFilter::published()))
        .select_only()
        .column(item::Column::Id)
}

fn ordered(select: Select<ItemEntity>) -> Select<ItemEntity> {
    select
        .order_by_with_nulls(item::Column::PublishedAt, Order::Desc, NullOrdering::Last)
        .order_by_asc(item::Column::Id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    fn sql(select: Select<ItemEntity>) -> String {
        select.build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn test_published_filter_pins_status() {
        assert_eq!(
            ItemFilter::published().status,
            StatusFilter::Is(ItemStatus::Published)
        );
    }

    #[test]
    fn test_by_id_filter_uses_status_set() {
        let filter = ItemFilter::by_id(ItemId::from("abc"), ItemStatus::VISIBLE);
        assert_eq!(filter.id, Some(ItemId::from("abc")));
        assert_eq!(
            filter.status,
            StatusFilter::In(vec![ItemStatus::Published, ItemStatus::Unlisted])
        );
    }

    #[test]
    fn test_query_builder_sets_window() {
        let query = ItemQuery::new(ItemFilter::published()).limit(10).offset(20);
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.offset, Some(20));
    }

    #[test]
    fn test_feed_order_is_newest_first_with_undated_last() {
        let statement = sql(ordered(ItemEntity::find()));

        assert!(statement.ends_with(
            r#"ORDER BY "items"."published_at" DESC NULLS LAST, "items"."id" ASC"#
        ));
    }

    #[test]
    fn test_published_filter_renders_status_equality() {
        let statement = sql(filtered(ItemEntity::find(), &ItemFilter::published()));

        assert!(statement.ends_with(r#"WHERE "items"."status" = 'published'"#));
    }

    #[test]
    fn test_by_id_filter_renders_id_and_status_set() {
        let filter = ItemFilter::by_id(ItemId::from("abc"), ItemStatus::VISIBLE);
        let statement = sql(filtered(ItemEntity::find(), &filter));

        assert!(statement.contains(r#""items"."id" = 'abc'"#));
        assert!(statement.contains(r#""items"."status" IN ('published', 'unlisted')"#));
    }

    #[test]
    fn test_unfiltered_query_has_no_where_clause() {
        let statement = sql(filtered(ItemEntity::find(), &ItemFilter::default()));

        assert!(!statement.contains("WHERE"));
    }

    #[test]
    fn test_published_ids_projects_only_id_in_feed_order() {
        assert_eq!(
            sql(published_ids()),
            r#"SELECT "items"."id" FROM "items" WHERE "items"."status" = 'published' ORDER BY "items"."published_at" DESC NULLS LAST, "items"."id" ASC"#
        );
    }
}
