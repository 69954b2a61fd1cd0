use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::exam::{
    Exam as DomainExam, NewExam as DomainNewExam, UpdateExam as DomainUpdateExam,
};
use crate::models::catalog::{Course, Semester};
use crate::models::location::Room;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Course))]
#[diesel(belongs_to(Semester))]
#[diesel(belongs_to(Room))]
#[diesel(table_name = crate::schema::exams)]
pub struct Exam {
    pub id: i32,
    pub course_id: i32,
    pub semester_id: i32,
    pub room_id: i32,
    pub name: String,
    pub starts_at: NaiveDateTime,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::exams)]
pub struct NewExam<'a> {
    pub course_id: i32,
    pub semester_id: i32,
    pub room_id: i32,
    pub name: &'a str,
    pub starts_at: NaiveDateTime,
    pub duration_minutes: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::exams)]
pub struct UpdateExam<'a> {
    pub course_id: i32,
    pub semester_id: i32,
    pub room_id: i32,
    pub name: &'a str,
    pub starts_at: NaiveDateTime,
    pub duration_minutes: i32,
}

impl From<Exam> for DomainExam {
    fn from(row: Exam) -> Self {
        Self {
            id: row.id,
            course_id: row.course_id,
            semester_id: row.semester_id,
            room_id: row.room_id,
            name: row.name,
            starts_at: row.starts_at,
            duration_minutes: row.duration_minutes,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewExam> for NewExam<'a> {
    fn from(value: &'a DomainNewExam) -> Self {
        Self {
            course_id: value.course_id,
            semester_id: value.semester_id,
            room_id: value.room_id,
            name: &value.name,
            starts_at: value.starts_at,
            duration_minutes: value.duration_minutes,
        }
    }
}

impl<'a> From<&'a DomainUpdateExam> for UpdateExam<'a> {
    fn from(value: &'a DomainUpdateExam) -> Self {
        Self {
            course_id: value.course_id,
            semester_id: value.semester_id,
            room_id: value.room_id,
            name: &value.name,
            starts_at: value.starts_at,
            duration_minutes: value.duration_minutes,
        }
    }
}
