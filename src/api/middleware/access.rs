//! Allow-check middleware for the public content routes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{ORIGIN, REFERER},
        HeaderMap,
    },
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::errors::AppError;

/// Decides whether a request may read content.
pub trait AccessPolicy: Send + Sync {
    fn is_allowed(&self, headers: &HeaderMap) -> bool;
}

/// Accepts every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn is_allowed(&self, _headers: &HeaderMap) -> bool {
        true
    }
}

/// Accepts requests whose `Origin` (or, failing that, `Referer`) belongs
/// to one of the configured sites.
#[derive(Debug, Clone)]
pub struct OriginAllowList {
    origins: Vec<String>,
}

impl OriginAllowList {
    pub fn new(origins: Vec<String>) -> Self {
        Self { origins }
    }

    fn matches(&self, source: &str) -> bool {
        self.origins.iter().any(|origin| {
            source
                .strip_prefix(origin.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

impl AccessPolicy for OriginAllowList {
    fn is_allowed(&self, headers: &HeaderMap) -> bool {
        headers
            .get(ORIGIN)
            .or_else(|| headers.get(REFERER))
            .and_then(|value| value.to_str().ok())
            .is_some_and(|source| self.matches(source))
    }
}

/// Policy for a configured origin list; an empty list allows everything.
pub fn access_policy(origins: &[String]) -> Arc<dyn AccessPolicy> {
    if origins.is_empty() {
        Arc::new(AllowAll)
    } else {
        Arc::new(OriginAllowList::new(origins.to_vec()))
    }
}

/// Rejects requests the configured policy does not allow.
pub async fn allow_check_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !state.access.is_allowed(request.headers()) {
        tracing::warn!(uri = %request.uri(), "Request rejected by allow-check");
        return Err(AppError::Forbidden);
    }

    Ok(next.run(request).await)
}
