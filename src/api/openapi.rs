//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{item_handler, upload_handler};
use crate::domain::{Item, ItemDetail, ItemId, ItemStatus};
use crate::services::PresignedUpload;
use crate::types::{FeedResponse, PaginationMeta};

/// OpenAPI documentation for the content API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Edge Content API",
        version = "0.1.0",
        description = "Published feed, item resolution with feed navigation, and presigned uploads",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        item_handler::get_feed,
        item_handler::get_item,
        item_handler::get_item_by_slug,
        upload_handler::create_presigned_url,
    ),
    components(
        schemas(
            ItemId,
            ItemStatus,
            Item,
            ItemDetail,
            FeedResponse,
            PaginationMeta,
            PresignedUpload,
            upload_handler::PresignRequest,
        )
    ),
    tags(
        (name = "Content", description = "Feed and item reads"),
        (name = "Uploads", description = "Direct-to-bucket uploads")
    )
)]
pub struct ApiDoc;
