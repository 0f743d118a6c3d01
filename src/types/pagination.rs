//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Optional pagination query parameters.
///
/// When neither field is present the caller gets the whole list.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-indexed page number
    pub page: Option<u64>,
    /// Items per page (capped at 100)
    pub per_page: Option<u64>,
}

impl PaginationParams {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Whether the caller asked for a page at all
    pub fn is_requested(&self) -> bool {
        self.page.is_some() || self.per_page.is_some()
    }

    /// Page number, never below 1
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(DEFAULT_PAGE_NUMBER).max(1)
    }

    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        self.per_page
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        (self.page() - 1) * self.limit()
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrequested_by_default() {
        assert!(!PaginationParams::default().is_requested());
    }

    #[test]
    fn test_per_page_is_capped() {
        let params = PaginationParams::new(2, 1_000);
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
        assert_eq!(params.offset(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let params = PaginationParams::new(0, 10);
        assert_eq!(params.page(), 1);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_only_page_uses_default_size() {
        let params = PaginationParams {
            page: Some(3),
            per_page: None,
        };
        assert!(params.is_requested());
        assert_eq!(params.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(params.offset(), 2 * DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PaginationMeta::new(1, 10, 21).total_pages, 3);
        assert_eq!(PaginationMeta::new(1, 10, 0).total_pages, 0);
    }
}
