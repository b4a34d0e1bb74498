//! Pagination Module
//!
//! Slices a complete result list into one page with navigation metadata.
//! The same list and the same request always produce the same page, whether
//! the list came from the cache or straight from the upstream API.

use serde::{Deserialize, Serialize};

/// Page size used when neither the request nor the configuration sets one
pub const DEFAULT_PAGE_SIZE: usize = 10;

// == Page Request ==
/// Requested page position. Values are signed so that out-of-range input
/// can be clamped instead of failing deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,
    /// Items per page
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PageRequest {
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self { page, page_size }
    }
}

// == Pagination ==
/// Position of a page within the full result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

// == Page ==
/// One page of items plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

// == Paginate ==
/// Cuts one page out of `items`.
///
/// Missing values fall back to page 1 and `default_page_size`. Zero or
/// negative values are clamped to 1. A page past the end yields an empty
/// slice with accurate totals.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest, default_page_size: usize) -> Page<T> {
    let page = clamp_to_positive(request.page.unwrap_or(1));
    let page_size = match request.page_size {
        Some(size) => clamp_to_positive(size),
        None => default_page_size.max(1),
    };

    let total = items.len();
    let total_pages = total.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    Page {
        data: items[start..end].to_vec(),
        pagination: Pagination {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        },
    }
}

fn clamp_to_positive(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(usize::MAX)
}
