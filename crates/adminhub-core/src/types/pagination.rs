//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use super::sorting::SortField;

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 1000;

/// Request parameters for paginated queries.
///
/// Carries the page window plus an optional sort order applied within it.
/// Out-of-range values are normalized on construction and on
/// deserialization, so a caller-supplied window can never be zero-sized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page", deserialize_with = "clamp_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size", deserialize_with = "clamp_page_size")]
    pub page_size: u64,
    /// Sort order applied to the page window.
    #[serde(default)]
    pub sort: Vec<SortField>,
}

impl PageRequest {
    /// Create a new page request with no sort order.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            sort: Vec::new(),
        }
    }

    /// Attach a sort order to this page request.
    pub fn sorted_by(mut self, sort: Vec<SortField>) -> Self {
        self.sort = sort;
        self
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.page_size
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        // A zero page size would divide by zero below.
        let page_size = page_size.max(1);
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(page_size)
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Create an empty response.
    pub fn empty(page_request: &PageRequest) -> Self {
        Self {
            items: Vec::new(),
            page: page_request.page,
            page_size: page_request.page_size,
            total_items: 0,
            total_pages: 1,
            has_next: false,
            has_previous: false,
        }
    }

    /// Map every item on the page, preserving the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn clamp_page<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(|page| page.max(1))
}

fn clamp_page_size<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(|size| size.clamp(1, MAX_PAGE_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let page = PageRequest::new(3, 20);
        assert_eq!(page.offset(), 40);
        assert_eq!(page.limit(), 20);

        // Page numbers below 1 are normalized.
        let page = PageRequest::new(0, 20);
        assert_eq!(page.page, 1);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_size_clamped() {
        let page = PageRequest::new(1, 100_000);
        assert_eq!(page.page_size, 1000);
        let page = PageRequest::new(1, 0);
        assert_eq!(page.page_size, 1);
    }

    #[test]
    fn test_deserialized_window_is_normalized() {
        let req: PageRequest = serde_json::from_str(r#"{"page":0,"page_size":0}"#).unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 1);

        let req: PageRequest = serde_json::from_str(r#"{"page":2,"page_size":100000}"#).unwrap();
        assert_eq!(req.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_zero_page_size_response_does_not_divide_by_zero() {
        let resp = PageResponse::new(vec![1, 2, 3], 1, 0, 3);
        assert_eq!(resp.page_size, 1);
        assert_eq!(resp.total_pages, 3);
        assert!(resp.has_next);
    }

    #[test]
    fn test_page_math() {
        let resp = PageResponse::new(vec![1, 2, 3], 1, 3, 7);
        assert_eq!(resp.total_pages, 3);
        assert!(resp.has_next);
        assert!(!resp.has_previous);

        let resp = PageResponse::new(vec![7], 3, 3, 7);
        assert!(!resp.has_next);
        assert!(resp.has_previous);
    }

    #[test]
    fn test_empty_response() {
        let resp: PageResponse<i64> = PageResponse::empty(&PageRequest::new(2, 10));
        assert!(resp.items.is_empty());
        assert_eq!(resp.total_pages, 1);
        assert!(!resp.has_next);
    }

    #[test]
    fn test_map_preserves_metadata() {
        let resp = PageResponse::new(vec![1, 2], 2, 2, 5).map(|n| n * 10);
        assert_eq!(resp.items, vec![10, 20]);
        assert_eq!(resp.page, 2);
        assert_eq!(resp.total_items, 5);
    }
}
