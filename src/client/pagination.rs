//! Pagination helpers for listing requests

use serde::{Deserialize, Serialize};

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Pagination parameters for listing requests.
///
/// Use the builder pattern to configure:
/// ```ignore
/// let params = PageParams::new().page(2).limit(50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    /// Page number (1-indexed)
    pub page: Option<usize>,
    /// Items per page
    pub limit: Option<usize>,
}

impl PageParams {
    /// Create new pagination params with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Convert to query string parameters.
    ///
    /// Always includes `limit` so responses have a predictable shape; `page`
    /// defaults to the first page server-side when omitted.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        params.push(("limit", limit.to_string()));

        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }

        params
    }
}

/// Paginated listing envelope returned by collection endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,

    /// Total items across all pages
    #[serde(default)]
    pub total: usize,

    /// Total number of pages
    #[serde(default)]
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Check whether more pages exist after the given 1-indexed page.
    pub fn has_more_after(&self, page: usize) -> bool {
        page < self.total_pages
    }
}
