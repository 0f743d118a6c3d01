//! Upload handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::PresignedUpload;

/// Presigned upload request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PresignRequest {
    /// Object key relative to the project prefix
    #[validate(length(min = 1, message = "key is required"))]
    #[schema(example = "images/item-472d74ac4df2bedd120dd49dd83c7e44.png")]
    pub key: String,
}

/// Create upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/uploads/presigned-url", post(create_presigned_url))
}

/// Issue a presigned PUT URL for direct upload
#[utoipa::path(
    post,
    path = "/api/uploads/presigned-url",
    tag = "Uploads",
    request_body = PresignRequest,
    responses(
        (status = 200, description = "Presigned URL issued", body = PresignedUpload),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Signing failed")
    )
)]
pub async fn create_presigned_url(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PresignRequest>,
) -> AppResult<Json<PresignedUpload>> {
    let upload = state.upload_service.presign(&payload.key).await?;
    Ok(Json(upload))
}
