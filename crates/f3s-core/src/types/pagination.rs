//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request, clamping to valid bounds.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of items skipped before this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination block returned by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based).
    #[serde(default)]
    pub page: u64,
    /// Items per page.
    #[serde(default)]
    pub limit: u64,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,
    /// Total number of pages.
    #[serde(default)]
    pub pages: u64,
}

impl Pagination {
    /// Build the pagination block for `total` items.
    pub fn new(request: PageRequest, total: u64) -> Self {
        let pages = if total == 0 {
            1
        } else {
            total.div_ceil(request.limit)
        };
        Self {
            page: request.page,
            limit: request.limit,
            total,
            pages,
        }
    }

    /// Whether a page follows this one.
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}
