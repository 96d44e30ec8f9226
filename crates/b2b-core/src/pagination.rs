//! # Pagination
//!
//! Page bookkeeping shared by the company, quotes and approvals slices.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::DEFAULT_PAGE_SIZE;

/// Where a paged list currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        create_pagination_state(1, DEFAULT_PAGE_SIZE, 0)
    }
}

/// Computes pagination flags from a page, a page size and a total count.
///
/// Pages are 1-based. A page size of zero yields zero pages rather than a
/// division by zero.
///
/// ```rust
/// use b2b_core::pagination::create_pagination_state;
///
/// let p = create_pagination_state(2, 20, 45);
/// assert_eq!(p.total_pages, 3);
/// assert!(p.has_next_page);
/// assert!(p.has_previous_page);
/// ```
pub fn create_pagination_state(page: u32, page_size: u32, total_items: u64) -> PaginationState {
    let total_pages = if page_size == 0 {
        0
    } else {
        let pages = total_items.div_ceil(u64::from(page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    };

    PaginationState {
        current_page: page,
        page_size,
        total_items,
        total_pages,
        has_next_page: page < total_pages,
        has_previous_page: page > 1,
    }
}
