use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lecturer {
    pub id: i32,
    pub department_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewLecturer {
    pub department_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Debug)]
pub struct UpdateLecturer {
    pub department_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}
