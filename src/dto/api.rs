//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

/// Standard list envelope: every collection endpoint returns the total
/// match count next to the requested page of rows.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub total: usize,
    pub data: Vec<T>,
}

impl<T> From<crate::listing::ListPage<T>> for ListResponse<T> {
    fn from(page: crate::listing::ListPage<T>) -> Self {
        Self {
            total: page.total,
            data: page.items,
        }
    }
}
