//! Windowed page navigation rendered under every table.

use serde::Serialize;

use crate::listing::ListPage;

/// Compute the visible page numbers around `current`, keeping `edge` pages
/// at both ends and `around` pages on each side of the current one. `None`
/// entries mark elided ranges rendered as an ellipsis.
fn page_window(
    total_pages: usize,
    current: usize,
    edge: usize,
    around: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }

    let mut pages = Vec::new();

    let left_end = (1 + edge).min(total_pages + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current.saturating_sub(around));
    let mid_end = (current + around + 1).min(total_pages + 1);
    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(edge) + 1);
    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=total_pages).map(Some));

    pages
}

/// Template-facing page of rows plus the navigation window.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub pages: Vec<Option<usize>>,
}

impl<T> Paginated<T> {
    pub fn new(page: ListPage<T>, current_page: usize, per_page: usize) -> Self {
        let current_page = current_page.max(1);
        let total_pages = page.page_count(per_page);
        let pages = page_window(total_pages, current_page, 2, 3);

        Self {
            items: page.items,
            total: page.total,
            page: current_page,
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lists_have_no_ellipsis() {
        let pages = page_window(4, 2, 2, 3);
        assert_eq!(pages, vec![Some(1), Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn long_lists_elide_the_middle() {
        let pages = page_window(20, 10, 2, 3);
        assert_eq!(
            pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(7),
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn empty_result_has_no_pages() {
        assert!(page_window(0, 1, 2, 3).is_empty());
        let paginated = Paginated::new(ListPage::<i32>::empty(), 1, 10);
        assert!(paginated.pages.is_empty());
        assert_eq!(paginated.total, 0);
    }

    #[test]
    fn twenty_five_rows_at_ten_per_page_is_three_pages() {
        let paginated = Paginated::new(ListPage::new(vec![0; 10], 25), 2, 10);
        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(paginated.page, 2);
    }
}
