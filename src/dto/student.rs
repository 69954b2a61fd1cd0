//! DTOs for the student administration pages.

use serde::Deserialize;

use crate::domain::catalog::{Course, Major, Semester};
use crate::domain::enrollment::Enrollment;
use crate::domain::student::Student;
use crate::listing::Sort;
use crate::pagination::Paginated;
use crate::repository::{StudentFilters, StudentListQuery};

/// Query parameters accepted by the students page.
#[derive(Debug, Default, Deserialize)]
pub struct StudentListParams {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub sort: Option<String>,
    #[serde(default)]
    pub desc: bool,
    pub major_id: Option<i32>,
    pub enrollment_year: Option<i32>,
    pub is_active: Option<bool>,
}

impl StudentListParams {
    pub fn into_query(self) -> StudentListQuery {
        let mut query = StudentListQuery::new().apply_filters(StudentFilters {
            major_id: self.major_id,
            enrollment_year: self.enrollment_year,
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

/// Data required to render the students page. Majors feed the filter
/// dropdown.
#[derive(Debug)]
pub struct StudentsPageData {
    pub students: Paginated<Student>,
    pub majors: Vec<Major>,
    pub search_query: Option<String>,
    pub sort: Option<Sort>,
    pub filters: StudentFilters,
}

/// Aggregated data required to render the student details page.
#[derive(Debug)]
pub struct StudentPageData {
    pub student: Student,
    pub major: Option<Major>,
    pub enrollments: Vec<(Enrollment, Course, Semester)>,
}

/// Outcome of a bulk CSV import.
#[derive(Debug)]
pub struct StudentImportOutcome {
    pub created: usize,
}
