//! DTOs for the academic catalogue pages.

use serde::Deserialize;

use crate::domain::catalog::{Course, Department, Major, Semester};
use crate::listing::Sort;
use crate::pagination::Paginated;
use crate::repository::{
    CourseFilters, CourseListQuery, DepartmentFilters, DepartmentListQuery, MajorFilters,
    MajorListQuery, SemesterFilters, SemesterListQuery,
};

/// Query parameters accepted by the departments page.
#[derive(Debug, Default, Deserialize)]
pub struct DepartmentListParams {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub sort: Option<String>,
    #[serde(default)]
    pub desc: bool,
    pub is_active: Option<bool>,
}

impl DepartmentListParams {
    pub fn into_query(self) -> DepartmentListQuery {
        let mut query = DepartmentListQuery::new().apply_filters(DepartmentFilters {
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

/// Data required to render the departments page.
#[derive(Debug)]
pub struct DepartmentsPageData {
    pub departments: Paginated<Department>,
    pub search_query: Option<String>,
    pub sort: Option<Sort>,
    pub filters: DepartmentFilters,
}

/// Query parameters accepted by the majors page.
#[derive(Debug, Default, Deserialize)]
pub struct MajorListParams {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub sort: Option<String>,
    #[serde(default)]
    pub desc: bool,
    pub department_id: Option<i32>,
    pub is_active: Option<bool>,
}

impl MajorListParams {
    pub fn into_query(self) -> MajorListQuery {
        let mut query = MajorListQuery::new().apply_filters(MajorFilters {
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

/// Data required to render the majors page. Departments feed the filter
/// dropdown.
#[derive(Debug)]
pub struct MajorsPageData {
    pub majors: Paginated<Major>,
    pub departments: Vec<Department>,
    pub search_query: Option<String>,
    pub sort: Option<Sort>,
    pub filters: MajorFilters,
}

/// Query parameters accepted by the semesters page.
#[derive(Debug, Default, Deserialize)]
pub struct SemesterListParams {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub sort: Option<String>,
    #[serde(default)]
    pub desc: bool,
    pub is_active: Option<bool>,
}

impl SemesterListParams {
    pub fn into_query(self) -> SemesterListQuery {
        let mut query = SemesterListQuery::new().apply_filters(SemesterFilters {
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

/// Data required to render the semesters page.
#[derive(Debug)]
pub struct SemestersPageData {
    pub semesters: Paginated<Semester>,
    pub search_query: Option<String>,
    pub sort: Option<Sort>,
    pub filters: SemesterFilters,
}

/// Query parameters accepted by the courses page.
#[derive(Debug, Default, Deserialize)]
pub struct CourseListParams {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub sort: Option<String>,
    #[serde(default)]
    pub desc: bool,
    pub department_id: Option<i32>,
    pub credits: Option<i32>,
    pub is_active: Option<bool>,
}

impl CourseListParams {
    pub fn into_query(self) -> CourseListQuery {
        let mut query = CourseListQuery::new().apply_filters(CourseFilters {
            department_id: self.department_id,
            credits: self.credits,
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

/// Data required to render the courses page.
#[derive(Debug)]
pub struct CoursesPageData {
    pub courses: Paginated<Course>,
    pub departments: Vec<Department>,
    pub search_query: Option<String>,
    pub sort: Option<Sort>,
    pub filters: CourseFilters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_build_query_with_filters_and_page() {
        let params = CourseListParams {
            q: Some("algo".to_string()),
            page: Some(3),
            sort: Some("name".to_string()),
            desc: true,
            department_id: Some(7),
            credits: None,
            is_active: Some(true),
        };
        let query = params.into_query();
        assert_eq!(query.page, 3);
        assert_eq!(query.search_term(), Some("algo"));
        assert_eq!(query.sort, Some(Sort::desc("name")));
        assert_eq!(query.filters.department_id, Some(7));
    }
}
