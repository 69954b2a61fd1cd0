//! Diesel models for the academic catalogue tables.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::catalog::{
    Course as DomainCourse, Department as DomainDepartment, Major as DomainMajor,
    NewCourse as DomainNewCourse, NewDepartment as DomainNewDepartment,
    NewMajor as DomainNewMajor, NewSemester as DomainNewSemester,
    Semester as DomainSemester, UpdateCourse as DomainUpdateCourse,
    UpdateDepartment as DomainUpdateDepartment, UpdateMajor as DomainUpdateMajor,
    UpdateSemester as DomainUpdateSemester,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::departments)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::departments)]
pub struct NewDepartment<'a> {
    pub name: &'a str,
    pub code: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::departments)]
pub struct UpdateDepartment<'a> {
    pub name: &'a str,
    pub code: &'a str,
}

impl From<Department> for DomainDepartment {
    fn from(row: Department) -> Self {
        Self {
            id: row.id,
            name: row.name,
            code: row.code,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewDepartment> for NewDepartment<'a> {
    fn from(value: &'a DomainNewDepartment) -> Self {
        Self {
            name: &value.name,
            code: &value.code,
        }
    }
}

impl<'a> From<&'a DomainUpdateDepartment> for UpdateDepartment<'a> {
    fn from(value: &'a DomainUpdateDepartment) -> Self {
        Self {
            name: &value.name,
            code: &value.code,
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Department))]
#[diesel(table_name = crate::schema::majors)]
pub struct Major {
    pub id: i32,
    pub department_id: i32,
    pub name: String,
    pub code: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::majors)]
pub struct NewMajor<'a> {
    pub department_id: i32,
    pub name: &'a str,
    pub code: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::majors)]
pub struct UpdateMajor<'a> {
    pub department_id: i32,
    pub name: &'a str,
    pub code: &'a str,
}

impl From<Major> for DomainMajor {
    fn from(row: Major) -> Self {
        Self {
            id: row.id,
            department_id: row.department_id,
            name: row.name,
            code: row.code,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewMajor> for NewMajor<'a> {
    fn from(value: &'a DomainNewMajor) -> Self {
        Self {
            department_id: value.department_id,
            name: &value.name,
            code: &value.code,
        }
    }
}

impl<'a> From<&'a DomainUpdateMajor> for UpdateMajor<'a> {
    fn from(value: &'a DomainUpdateMajor) -> Self {
        Self {
            department_id: value.department_id,
            name: &value.name,
            code: &value.code,
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::semesters)]
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::semesters)]
pub struct NewSemester<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::semesters)]
pub struct UpdateSemester<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

impl From<Semester> for DomainSemester {
    fn from(row: Semester) -> Self {
        Self {
            id: row.id,
            name: row.name,
            code: row.code,
            starts_on: row.starts_on,
            ends_on: row.ends_on,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewSemester> for NewSemester<'a> {
    fn from(value: &'a DomainNewSemester) -> Self {
        Self {
            name: &value.name,
            code: &value.code,
            starts_on: value.starts_on,
            ends_on: value.ends_on,
        }
    }
}

impl<'a> From<&'a DomainUpdateSemester> for UpdateSemester<'a> {
    fn from(value: &'a DomainUpdateSemester) -> Self {
        Self {
            name: &value.name,
            code: &value.code,
            starts_on: value.starts_on,
            ends_on: value.ends_on,
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Department))]
#[diesel(table_name = crate::schema::courses)]
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::courses)]
pub struct NewCourse<'a> {
    pub department_id: i32,
    pub name: &'a str,
    pub code: &'a str,
    pub credits: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::courses)]
pub struct UpdateCourse<'a> {
    pub department_id: i32,
    pub name: &'a str,
    pub code: &'a str,
    pub credits: i32,
}

impl From<Course> for DomainCourse {
    fn from(row: Course) -> Self {
        Self {
            id: row.id,
            department_id: row.department_id,
            name: row.name,
            code: row.code,
            credits: row.credits,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCourse> for NewCourse<'a> {
    fn from(value: &'a DomainNewCourse) -> Self {
        Self {
            department_id: value.department_id,
            name: &value.name,
            code: &value.code,
            credits: value.credits,
        }
    }
}

impl<'a> From<&'a DomainUpdateCourse> for UpdateCourse<'a> {
    fn from(value: &'a DomainUpdateCourse) -> Self {
        Self {
            department_id: value.department_id,
            name: &value.name,
            code: &value.code,
            credits: value.credits,
        }
    }
}
