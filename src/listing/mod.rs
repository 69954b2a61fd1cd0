//! Generic list-query pipeline shared by every entity screen.
//!
//! Each administration screen (students, lecturers, rooms, ...) drives its
//! table from the same [`ListQuery`] shape: pagination, an optional sort,
//! a free-text search string and a typed per-entity filter struct. The
//! transition methods encode the interaction rules the screens rely on:
//! search and filter changes always jump back to the first page, while
//! re-sorting by the active key flips the direction in place.

pub mod debounce;
pub mod fetch;
pub mod modal;

use serde::{Deserialize, Serialize};

/// Default page size used by all list screens.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub key: String,
    pub descending: bool,
}

impl Sort {
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            descending: false,
        }
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            descending: true,
        }
    }
}

/// Query state for one entity list, parameterized over the entity's typed
/// filter struct.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
    pub sort: Option<Sort>,
    pub search: String,
    pub filters: F,
}

impl<F: Default> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_ITEMS_PER_PAGE,
            sort: None,
            search: String::new(),
            filters: F::default(),
        }
    }
}

impl<F: Default> ListQuery<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all structured filters and return to the first page.
    pub fn clear_filters(mut self) -> Self {
        self.filters = F::default();
        self.page = 1;
        self
    }
}

impl<F> ListQuery<F> {
    /// Replace the search text. Any change of the search term restarts
    /// pagination from the first page.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self.page = 1;
        self
    }

    /// Atomically replace the filter struct ("Apply" on the filter panel)
    /// and return to the first page.
    pub fn apply_filters(mut self, filters: F) -> Self {
        self.filters = filters;
        self.page = 1;
        self
    }

    /// Sort by `key`: a repeated click on the active column flips the
    /// direction, a new column starts ascending. The page is preserved.
    pub fn toggle_sort(mut self, key: &str) -> Self {
        self.sort = match self.sort.take() {
            Some(mut sort) if sort.key == key => {
                sort.descending = !sort.descending;
                Some(sort)
            }
            _ => Some(Sort::asc(key)),
        };
        self
    }

    pub fn with_sort(mut self, sort: Option<Sort>) -> Self {
        self.sort = sort;
        self
    }

    /// Jump to the given 1-based page; `0` is normalized to 1.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Trimmed search term, or `None` when the box is empty.
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }

    /// SQL OFFSET for the current page.
    pub fn offset(&self) -> i64 {
        ((self.page - 1) * self.per_page) as i64
    }

    /// SQL LIMIT for the current page.
    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

/// One page of results together with the authoritative total row count
/// over the whole filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> ListPage<T> {
    pub fn new(items: Vec<T>, total: usize) -> Self {
        Self { items, total }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    /// Number of pages at the given page size.
    pub fn page_count(&self, per_page: usize) -> usize {
        self.total.div_ceil(per_page.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Filters {
        is_active: Option<bool>,
        year: Option<i32>,
    }

    #[test]
    fn search_change_resets_page() {
        let query = ListQuery::<Filters>::new().with_page(5).with_search("ada");
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "ada");
    }

    #[test]
    fn apply_filters_resets_page() {
        let query = ListQuery::<Filters>::new().with_page(3).apply_filters(Filters {
            is_active: Some(true),
            year: None,
        });
        assert_eq!(query.page, 1);
        assert_eq!(query.filters.is_active, Some(true));
    }

    #[test]
    fn clear_filters_resets_filters_and_page() {
        let query = ListQuery::<Filters>::new()
            .apply_filters(Filters {
                is_active: Some(false),
                year: Some(2024),
            })
            .with_page(2)
            .clear_filters();
        assert_eq!(query.filters, Filters::default());
        assert_eq!(query.page, 1);
    }

    #[test]
    fn toggle_sort_flips_direction_on_same_key() {
        let query = ListQuery::<Filters>::new().toggle_sort("name");
        assert_eq!(query.sort, Some(Sort::asc("name")));

        let query = query.toggle_sort("name");
        assert_eq!(query.sort, Some(Sort::desc("name")));

        let query = query.toggle_sort("name");
        assert_eq!(query.sort, Some(Sort::asc("name")));
    }

    #[test]
    fn toggle_sort_resets_direction_on_new_key() {
        let query = ListQuery::<Filters>::new()
            .toggle_sort("name")
            .toggle_sort("name")
            .toggle_sort("email");
        assert_eq!(query.sort, Some(Sort::asc("email")));
    }

    #[test]
    fn toggle_sort_preserves_page() {
        let query = ListQuery::<Filters>::new().with_page(4).toggle_sort("name");
        assert_eq!(query.page, 4);
    }

    #[test]
    fn page_zero_is_normalized() {
        let query = ListQuery::<Filters>::new().with_page(0);
        assert_eq!(query.page, 1);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn offset_and_limit_follow_page() {
        let query = ListQuery::<Filters>::new().with_per_page(10).with_page(2);
        assert_eq!(query.offset(), 10);
        assert_eq!(query.limit(), 10);
    }

    #[test]
    fn search_term_trims_and_drops_empty() {
        let query = ListQuery::<Filters>::new().with_search("  ");
        assert_eq!(query.search_term(), None);
        let query = query.with_search(" ada ");
        assert_eq!(query.search_term(), Some("ada"));
    }

    #[test]
    fn page_count_rounds_up() {
        let page = ListPage::new(vec![1, 2, 3], 25);
        assert_eq!(page.page_count(10), 3);
        assert_eq!(page.page_count(25), 1);
        assert_eq!(ListPage::<i32>::empty().page_count(10), 0);
    }
}
