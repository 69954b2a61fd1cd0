use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
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

#[derive(Clone, Debug)]
pub struct NewExam {
    pub course_id: i32,
    pub semester_id: i32,
    pub room_id: i32,
    pub name: String,
    pub starts_at: NaiveDateTime,
    pub duration_minutes: i32,
}

#[derive(Clone, Debug)]
pub struct UpdateExam {
    pub course_id: i32,
    pub semester_id: i32,
    pub room_id: i32,
    pub name: String,
    pub starts_at: NaiveDateTime,
    pub duration_minutes: i32,
}
