//! DTOs for the enrollment administration pages.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Course, Semester};
use crate::domain::enrollment::{Enrollment, EnrollmentStatus};
use crate::domain::student::Student;
use crate::listing::Sort;
use crate::pagination::Paginated;
use crate::repository::{EnrollmentFilters, EnrollmentListQuery};

/// Query parameters accepted by the enrollments page. `status` may repeat
/// to select several statuses at once.
#[derive(Debug, Default, Deserialize)]
pub struct EnrollmentListParams {
    pub page: Option<usize>,
    pub sort: Option<String>,
    #[serde(default)]
    pub desc: bool,
    pub student_id: Option<i32>,
    pub course_id: Option<i32>,
    pub semester_id: Option<i32>,
    #[serde(default)]
    pub status: Vec<String>,
}

impl EnrollmentListParams {
    pub fn into_query(self) -> EnrollmentListQuery {
        let statuses: Vec<EnrollmentStatus> = self
            .status
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        let mut query = EnrollmentListQuery::new().apply_filters(EnrollmentFilters {
            student_id: self.student_id,
            course_id: self.course_id,
            semester_id: self.semester_id,
            statuses,
        });
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

/// One enrollment row resolved against its student, course and semester.
#[derive(Debug, Serialize)]
pub struct EnrollmentRow {
    pub enrollment: Enrollment,
    pub student: Student,
    pub course: Course,
    pub semester: Semester,
}

/// Data required to render the enrollments page.
#[derive(Debug)]
pub struct EnrollmentsPageData {
    pub enrollments: Paginated<EnrollmentRow>,
    pub semesters: Vec<Semester>,
    pub sort: Option<Sort>,
    pub filters: EnrollmentFilters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_statuses_are_dropped_from_the_filter() {
        let params = EnrollmentListParams {
            status: vec!["enrolled".to_string(), "paused".to_string()],
            ..Default::default()
        };
        let query = params.into_query();
        assert_eq!(query.filters.statuses, vec![EnrollmentStatus::Enrolled]);
    }
}
