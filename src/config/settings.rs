//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_ENVIRONMENT, DEFAULT_PROJECT_NAME, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, R2_ENDPOINT_HOST,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub storage: StorageConfig,
    /// Origins accepted by the allow-check (empty = accept all)
    pub allowed_origins: Vec<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("storage", &self.storage)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            storage: StorageConfig::from_env(),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| parse_list(&v))
                .unwrap_or_default(),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Apply command-line overrides for the listen address.
    pub fn with_listen(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server_host = host;
        }
        if let Some(port) = port {
            self.server_port = port;
        }
        self
    }
}

/// Object storage (R2) settings.
///
/// Built once at startup and handed to the signer; nothing reads
/// these variables at request time.
#[derive(Clone, Default)]
pub struct StorageConfig {
    pub account_id: String,
    pub access_key_id: String,
    secret_access_key: String,
    pub public_bucket: String,
    pub project_name: String,
    pub environment: String,
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("account_id", &self.account_id)
            .field("access_key_id", &"[REDACTED]")
            .field("secret_access_key", &"[REDACTED]")
            .field("public_bucket", &self.public_bucket)
            .field("project_name", &self.project_name)
            .field("environment", &self.environment)
            .finish()
    }
}

impl StorageConfig {
    /// Create storage settings from explicit values.
    pub fn new(
        account_id: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        public_bucket: impl Into<String>,
        project_name: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            public_bucket: public_bucket.into(),
            project_name: project_name.into(),
            environment: environment.into(),
        }
    }

    /// Load storage settings from environment variables.
    ///
    /// Values are not validated; a missing credential surfaces as a
    /// signing failure on first use.
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).unwrap_or_default();

        Self {
            account_id: var("CLOUDFLARE_ACCOUNT_ID"),
            access_key_id: var("R2_ACCESS_KEY_ID"),
            secret_access_key: var("R2_SECRET_ACCESS_KEY"),
            public_bucket: var("R2_PUBLIC_BUCKET"),
            project_name: env::var("PAGES_PROJECT_NAME")
                .unwrap_or_else(|_| DEFAULT_PROJECT_NAME.to_string()),
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string()),
        }
    }

    /// Account-scoped S3 endpoint, e.g. `https://<account>.r2.cloudflarestorage.com`.
    pub fn endpoint(&self) -> String {
        format!("https://{}.{}", self.account_id, R2_ENDPOINT_HOST)
    }

    /// Namespace isolating this deployment's objects within the shared bucket.
    pub fn project_prefix(&self) -> String {
        format!("{}/{}", self.project_name, self.environment)
    }

    /// Secret access key for request signing.
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }
}

/// Split a comma separated list, dropping blanks and trailing slashes.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
