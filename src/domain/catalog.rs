//! Academic catalogue: departments, majors, semesters and courses.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewDepartment {
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug)]
pub struct UpdateDepartment {
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Major {
    pub id: i32,
    pub department_id: i32,
    pub name: String,
    pub code: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewMajor {
    pub department_id: i32,
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug)]
pub struct UpdateMajor {
    pub department_id: i32,
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Semester {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewSemester {
    pub name: String,
    pub code: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

#[derive(Clone, Debug)]
pub struct UpdateSemester {
    pub name: String,
    pub code: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i32,
    pub department_id: i32,
    pub name: String,
    pub code: String,
    pub credits: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewCourse {
    pub department_id: i32,
    pub name: String,
    pub code: String,
    pub credits: i32,
}

#[derive(Clone, Debug)]
pub struct UpdateCourse {
    pub department_id: i32,
    pub name: String,
    pub code: String,
    pub credits: i32,
}
