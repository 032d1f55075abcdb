//! Response envelope types for API handlers.

use filmcat_core::pagination::PageWindow;
use serde::Serialize;

/// Paginated list envelope:
/// `{ "count", "total_pages", "prev", "next", "results" }`.
///
/// `prev` and `next` serialize as `null` on the first and last page.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub count: i64,
    pub total_pages: i64,
    pub prev: Option<i64>,
    pub next: Option<i64>,
    pub results: Vec<T>,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(window: &PageWindow, results: Vec<T>) -> Self {
        Self {
            count: window.count,
            total_pages: window.total_pages,
            prev: window.prev(),
            next: window.next(),
            results,
        }
    }
}
