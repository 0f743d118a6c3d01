//! Object storage signing - presigned URLs against R2's S3 API.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;

use crate::config::{StorageConfig, R2_REGION};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Produces time-limited URLs for direct object access.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UrlSigner: Send + Sync {
    /// Presigned PUT URL for `key` in `bucket`, valid for `expires_in`
    async fn presign_put(&self, bucket: &str, key: &str, expires_in: Duration)
        -> AppResult<String>;
}

/// S3 client bound to one R2 account.
#[derive(Clone)]
pub struct R2Signer {
    client: Client,
}

impl R2Signer {
    /// Build the client once from explicit configuration.
    pub async fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            config.secret_access_key(),
            None,
            None,
            "edge-content-api",
        );

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(R2_REGION))
            .credentials_provider(credentials)
            .endpoint_url(config.endpoint())
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(true)
            .build();

        tracing::debug!(endpoint = %config.endpoint(), "R2 client configured");

        Self {
            client: Client::from_conf(s3_config),
        }
    }
}

#[async_trait]
impl UrlSigner for R2Signer {
    async fn presign_put(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> AppResult<String> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| AppError::storage(format!("Invalid presign expiry: {e}")))?;

        let request = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| AppError::storage(format!("Failed to presign PUT {key}: {e}")))?;

        Ok(request.uri().to_string())
    }
}
