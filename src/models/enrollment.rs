use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::enrollment::{
    Enrollment as DomainEnrollment, EnrollmentStatus, NewEnrollment as DomainNewEnrollment,
};
use crate::models::catalog::{Course, Semester};
use crate::models::student::Student;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Student))]
#[diesel(belongs_to(Course))]
#[diesel(belongs_to(Semester))]
#[diesel(table_name = crate::schema::enrollments)]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub semester_id: i32,
    // Stored as text, parsed at the domain boundary.
    pub status: String,
    pub enrolled_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::enrollments)]
pub struct NewEnrollment {
    pub student_id: i32,
    pub course_id: i32,
    pub semester_id: i32,
    pub status: String,
}

impl TryFrom<Enrollment> for DomainEnrollment {
    type Error = String;

    fn try_from(row: Enrollment) -> Result<Self, Self::Error> {
        let status: EnrollmentStatus = row.status.parse()?;
        Ok(Self {
            id: row.id,
            student_id: row.student_id,
            course_id: row.course_id,
            semester_id: row.semester_id,
            status,
            enrolled_at: row.enrolled_at,
        })
    }
}

impl From<&DomainNewEnrollment> for NewEnrollment {
    fn from(value: &DomainNewEnrollment) -> Self {
        Self {
            student_id: value.student_id,
            course_id: value.course_id,
            semester_id: value.semester_id,
            status: value.status.to_string(),
        }
    }
}
