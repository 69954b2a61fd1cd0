//! DTOs for the lecturer administration pages.

use serde::Deserialize;

use crate::domain::catalog::Department;
use crate::domain::lecturer::Lecturer;
use crate::listing::Sort;
use crate::pagination::Paginated;
use crate::repository::{LecturerFilters, LecturerListQuery};

/// Query parameters accepted by the lecturers page.
#[derive(Debug, Default, Deserialize)]
pub struct LecturerListParams {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub sort: Option<String>,
    #[serde(default)]
    pub desc: bool,
    pub department_id: Option<i32>,
    pub is_active: Option<bool>,
}

impl LecturerListParams {
    pub fn into_query(self) -> LecturerListQuery {
        let mut query = LecturerListQuery::new().apply_filters(LecturerFilters {
            department_id: self.department_id,
            is_active: self.is_active,
        });
        if let Some(q) = self.q {
            query = query.with_search(q);
        }
        if let Some(key) = self.sort {
            query = query.with_sort(Some(Sort {
                key,
                descending: self.desc,
            }));
        }
        if let Some(page) = self.page {
            query = query.with_page(page);
        }
        query
    }
}

/// Data required to render the lecturers page.
#[derive(Debug)]
pub struct LecturersPageData {
    pub lecturers: Paginated<Lecturer>,
    pub departments: Vec<Department>,
    pub search_query: Option<String>,
    pub sort: Option<Sort>,
    pub filters: LecturerFilters,
}
