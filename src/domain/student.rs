use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: i32,
    pub major_id: i32,
    /// Registrar-issued matriculation number, unique across the university.
    pub student_code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub enrollment_year: i32,
    pub notes: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewStudent {
    pub major_id: i32,
    pub student_code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub enrollment_year: i32,
    pub notes: String,
}

#[derive(Clone, Debug)]
pub struct UpdateStudent {
    pub major_id: i32,
    pub student_code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub enrollment_year: i32,
    pub notes: String,
}
