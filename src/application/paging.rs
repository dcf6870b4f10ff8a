//! Page envelope returned by list operations.

use serde::Serialize;

/// One page of items plus the numbers a client needs to render paging.
///
/// `items_from` and `items_to` are 1-based positions of the requested page
/// and are not clamped to the total count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_pages: i64,
    pub items_from: i64,
    pub items_to: i64,
    pub total_items_count: i64,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total_count: i64, page_size: i64, page_number: i64) -> Self {
        let items_from = page_size * (page_number - 1) + 1;

        Self {
            items,
            total_pages: (total_count + page_size - 1) / page_size,
            items_from,
            items_to: items_from + page_size - 1,
            total_items_count: total_count,
        }
    }

    /// Converts the items while keeping the paging numbers.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            items_from: self.items_from,
            items_to: self.items_to,
            total_items_count: self.total_items_count,
        }
    }
}
