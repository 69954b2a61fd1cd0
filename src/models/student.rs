//! Diesel models for [`crate::domain::student::Student`].

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::student::{
    NewStudent as DomainNewStudent, Student as DomainStudent,
    UpdateStudent as DomainUpdateStudent,
};
use crate::models::catalog::Major;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Major))]
#[diesel(table_name = crate::schema::students)]
pub struct Student {
    pub id: i32,
    pub major_id: i32,
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::students)]
pub struct NewStudent<'a> {
    pub major_id: i32,
    pub student_code: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub enrollment_year: i32,
    pub notes: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::students)]
pub struct UpdateStudent<'a> {
    pub major_id: i32,
    pub student_code: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub enrollment_year: i32,
    pub notes: &'a str,
}

impl From<Student> for DomainStudent {
    fn from(row: Student) -> Self {
        Self {
            id: row.id,
            major_id: row.major_id,
            student_code: row.student_code,
            name: row.name,
            email: row.email,
            phone: row.phone,
            enrollment_year: row.enrollment_year,
            notes: row.notes,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewStudent> for NewStudent<'a> {
    fn from(value: &'a DomainNewStudent) -> Self {
        Self {
            major_id: value.major_id,
            student_code: &value.student_code,
            name: &value.name,
            email: &value.email,
            phone: &value.phone,
            enrollment_year: value.enrollment_year,
            notes: &value.notes,
        }
    }
}

impl<'a> From<&'a DomainUpdateStudent> for UpdateStudent<'a> {
    fn from(value: &'a DomainUpdateStudent) -> Self {
        Self {
            major_id: value.major_id,
            student_code: &value.student_code,
            name: &value.name,
            email: &value.email,
            phone: &value.phone,
            enrollment_year: value.enrollment_year,
            notes: &value.notes,
        }
    }
}
