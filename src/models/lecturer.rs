use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::lecturer::{
    Lecturer as DomainLecturer, NewLecturer as DomainNewLecturer,
    UpdateLecturer as DomainUpdateLecturer,
};
use crate::models::catalog::Department;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Department))]
#[diesel(table_name = crate::schema::lecturers)]
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::lecturers)]
pub struct NewLecturer<'a> {
    pub department_id: i32,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::lecturers)]
pub struct UpdateLecturer<'a> {
    pub department_id: i32,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

impl From<Lecturer> for DomainLecturer {
    fn from(row: Lecturer) -> Self {
        Self {
            id: row.id,
            department_id: row.department_id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewLecturer> for NewLecturer<'a> {
    fn from(value: &'a DomainNewLecturer) -> Self {
        Self {
            department_id: value.department_id,
            name: &value.name,
            email: &value.email,
            phone: &value.phone,
        }
    }
}

impl<'a> From<&'a DomainUpdateLecturer> for UpdateLecturer<'a> {
    fn from(value: &'a DomainUpdateLecturer) -> Self {
        Self {
            department_id: value.department_id,
            name: &value.name,
            email: &value.email,
            phone: &value.phone,
        }
    }
}
