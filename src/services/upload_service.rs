//! Upload service - presigned URLs for direct uploads to the public bucket.
//!
//! Keys follow the conventions agreed with upload clients:
//! - Cover image: `images/item-<uuid>.<ext>`
//! - Media image: `media/image-<uuid>.<ext>`
//! - Media audio: `media/audio-<uuid>.<ext>`
//! - Media video: `media/video-<uuid>.<ext>`
//! - Media document: `media/document-<uuid>.<ext>`
//!
//! The format is not checked here; every key is namespaced under the
//! project prefix before signing.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use utoipa::ToSchema;

use crate::config::{StorageConfig, PRESIGNED_URL_EXPIRY_SECONDS};
use crate::errors::AppResult;
use crate::infra::UrlSigner;

/// Presigned upload returned to the client
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUpload {
    /// PUT target, valid for one hour
    #[schema(example = "https://<account>.r2.cloudflarestorage.com/bucket/blog/production/images/item-1.png?X-Amz-Expires=3600&...")]
    pub presigned_url: String,
    /// Prefix under which the uploaded object becomes public
    #[schema(example = "blog/production")]
    pub media_base_url: String,
}

/// Upload service trait for dependency injection.
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Presign a PUT for `key` under the project prefix
    async fn presign(&self, key: &str) -> AppResult<PresignedUpload>;
}

/// Concrete implementation of UploadService over a UrlSigner.
pub struct UploadManager {
    signer: Arc<dyn UrlSigner>,
    storage: StorageConfig,
}

impl UploadManager {
    pub fn new(signer: Arc<dyn UrlSigner>, storage: StorageConfig) -> Self {
        Self { signer, storage }
    }
}

#[async_trait]
impl UploadService for UploadManager {
    async fn presign(&self, key: &str) -> AppResult<PresignedUpload> {
        let prefix = self.storage.project_prefix();
        let object_key = format!("{}/{}", prefix, key);

        let presigned_url = self
            .signer
            .presign_put(
                &self.storage.public_bucket,
                &object_key,
                Duration::from_secs(PRESIGNED_URL_EXPIRY_SECONDS),
            )
            .await?;

        tracing::info!(key = %object_key, "Issued presigned upload URL");

        Ok(PresignedUpload {
            presigned_url,
            media_base_url: prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::storage::MockUrlSigner;

    fn storage() -> StorageConfig {
        StorageConfig::new("acct", "key", "secret", "public-media", "blog", "preview")
    }

    #[tokio::test]
    async fn test_key_is_namespaced_under_project_prefix() {
        let mut signer = MockUrlSigner::new();
        signer
            .expect_presign_put()
            .withf(|bucket, key, expires_in| {
                bucket == "public-media"
                    && key == "blog/preview/images/item-472d74ac4df2bedd120dd49dd83c7e44.png"
                    && *expires_in == Duration::from_secs(3600)
            })
            .times(1)
            .returning(|_, key, _| Ok(format!("https://signed.example/{key}?sig=1")));
        let service = UploadManager::new(Arc::new(signer), storage());

        let upload = service
            .presign("images/item-472d74ac4df2bedd120dd49dd83c7e44.png")
            .await
            .unwrap();

        assert_eq!(upload.media_base_url, "blog/preview");
        assert_eq!(
            upload.presigned_url,
            "https://signed.example/blog/preview/images/item-472d74ac4df2bedd120dd49dd83c7e44.png?sig=1"
        );
    }

    #[tokio::test]
    async fn test_signer_failure_propagates() {
        let mut signer = MockUrlSigner::new();
        signer
            .expect_presign_put()
            .returning(|_, _, _| Err(AppError::storage("credentials rejected")));
        let service = UploadManager::new(Arc::new(signer), storage());

        let result = service.presign("media/audio-1.mp3").await;

        assert!(matches!(result, Err(AppError::Storage(msg)) if msg == "credentials rejected"));
    }

    #[test]
    fn test_response_uses_camel_case() {
        let json = serde_json::to_value(PresignedUpload {
            presigned_url: "u".to_string(),
            media_base_url: "p".to_string(),
        })
        .unwrap();

        assert_eq!(json["presignedUrl"], "u");
        assert_eq!(json["mediaBaseUrl"], "p");
    }
}
