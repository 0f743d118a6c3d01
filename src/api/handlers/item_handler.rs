//! Content handlers: feed and single item.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::ItemDetail;
use crate::errors::AppResult;
use crate::services::ItemParams;
use crate::types::{FeedResponse, PaginationParams};

/// Create content routes
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/feed", get(get_feed))
        .route("/items/:item_id", get(get_item))
        .route("/items/by-slug/:slug", get(get_item_by_slug))
}

/// Published feed
#[utoipa::path(
    get,
    path = "/api/feed",
    tag = "Content",
    params(PaginationParams),
    responses(
        (status = 200, description = "Published items in feed order", body = FeedResponse),
        (status = 403, description = "Rejected by allow-check")
    )
)]
pub async fn get_feed(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<FeedResponse>> {
    let feed = state.item_service.feed(&pagination).await?;
    Ok(Json(feed))
}

/// Item by id, with next/previous links
#[utoipa::path(
    get,
    path = "/api/items/{item_id}",
    tag = "Content",
    params(
        ("item_id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item with navigation links", body = ItemDetail),
        (status = 403, description = "Rejected by allow-check"),
        (status = 404, description = "Item not found or not in the published feed")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(params): Path<ItemParams>,
) -> AppResult<Json<ItemDetail>> {
    resolve(&state, &params).await
}

/// Item by slug, with next/previous links
#[utoipa::path(
    get,
    path = "/api/items/by-slug/{slug}",
    tag = "Content",
    params(
        ("slug" = String, Path, description = "Slug ending in the item ID")
    ),
    responses(
        (status = 200, description = "Item with navigation links", body = ItemDetail),
        (status = 403, description = "Rejected by allow-check"),
        (status = 404, description = "Slug unresolvable, item not found or not in the published feed")
    )
)]
pub async fn get_item_by_slug(
    State(state): State<AppState>,
    Path(params): Path<ItemParams>,
) -> AppResult<Json<ItemDetail>> {
    resolve(&state, &params).await
}

async fn resolve(state: &AppState, params: &ItemParams) -> AppResult<Json<ItemDetail>> {
    let item = state.item_service.resolve(params, None).await?;
    Ok(Json(item))
}
