//! DTOs for the exam scheduling pages.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::catalog::{Course, Semester};
use crate::domain::exam::Exam;
use crate::domain::location::Room;
use crate::listing::Sort;
use crate::pagination::Paginated;
use crate::repository::{ExamFilters, ExamListQuery};

/// Query parameters accepted by the exams page. The date filters span an
/// inclusive calendar-day range on the start time.
#[derive(Debug, Default, Deserialize)]
pub struct ExamListParams {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub sort: Option<String>,
    #[serde(default)]
    pub desc: bool,
    pub course_id: Option<i32>,
    pub semester_id: Option<i32>,
    pub room_id: Option<i32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

impl ExamListParams {
    pub fn into_query(self) -> ExamListQuery {
        let mut query = ExamListQuery::new().apply_filters(ExamFilters {
            course_id: self.course_id,
            semester_id: self.semester_id,
            room_id: self.room_id,
            date_from: self.date_from,
            date_to: self.date_to,
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

/// Data required to render the exams page. Courses, semesters and rooms
/// feed the filter dropdowns.
#[derive(Debug)]
pub struct ExamsPageData {
    pub exams: Paginated<Exam>,
    pub courses: Vec<Course>,
    pub semesters: Vec<Semester>,
    pub rooms: Vec<Room>,
    pub search_query: Option<String>,
    pub sort: Option<Sort>,
    pub filters: ExamFilters,
}
