use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::catalog::{
    NewCourse, NewDepartment, NewMajor, NewSemester, UpdateCourse, UpdateDepartment, UpdateMajor,
    UpdateSemester,
};

#[derive(Deserialize, Validate)]
/// Form data for creating a department.
pub struct AddDepartmentForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing department.
pub struct SaveDepartmentForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
}

impl From<&AddDepartmentForm> for NewDepartment {
    fn from(form: &AddDepartmentForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            code: form.code.trim().to_string(),
        }
    }
}

impl From<&SaveDepartmentForm> for UpdateDepartment {
    fn from(form: &SaveDepartmentForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            code: form.code.trim().to_string(),
        }
    }
}

#[derive(Deserialize, Validate)]
/// Form data for creating a major within a department.
pub struct AddMajorForm {
    pub department_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing major.
pub struct SaveMajorForm {
    pub id: i32,
    pub department_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
}

impl From<&AddMajorForm> for NewMajor {
    fn from(form: &AddMajorForm) -> Self {
        Self {
            department_id: form.department_id,
            name: form.name.trim().to_string(),
            code: form.code.trim().to_string(),
        }
    }
}

impl From<&SaveMajorForm> for UpdateMajor {
    fn from(form: &SaveMajorForm) -> Self {
        Self {
            department_id: form.department_id,
            name: form.name.trim().to_string(),
            code: form.code.trim().to_string(),
        }
    }
}

#[derive(Deserialize, Validate)]
/// Form data for creating an academic semester.
pub struct AddSemesterForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing semester.
pub struct SaveSemesterForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

impl From<&AddSemesterForm> for NewSemester {
    fn from(form: &AddSemesterForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            code: form.code.trim().to_string(),
            starts_on: form.starts_on,
            ends_on: form.ends_on,
        }
    }
}

impl From<&SaveSemesterForm> for UpdateSemester {
    fn from(form: &SaveSemesterForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            code: form.code.trim().to_string(),
            starts_on: form.starts_on,
            ends_on: form.ends_on,
        }
    }
}

#[derive(Deserialize, Validate)]
/// Form data for creating a course.
pub struct AddCourseForm {
    pub department_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
    #[validate(range(min = 1, max = 30))]
    pub credits: i32,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing course.
pub struct SaveCourseForm {
    pub id: i32,
    pub department_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
    #[validate(range(min = 1, max = 30))]
    pub credits: i32,
}

impl From<&AddCourseForm> for NewCourse {
    fn from(form: &AddCourseForm) -> Self {
        Self {
            department_id: form.department_id,
            name: form.name.trim().to_string(),
            code: form.code.trim().to_string(),
            credits: form.credits,
        }
    }
}

impl From<&SaveCourseForm> for UpdateCourse {
    fn from(form: &SaveCourseForm) -> Self {
        Self {
            department_id: form.department_id,
            name: form.name.trim().to_string(),
            code: form.code.trim().to_string(),
            credits: form.credits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_department_name_fails_validation() {
        let form = AddDepartmentForm {
            name: "".to_string(),
            code: "CS".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn course_credits_out_of_range_fails_validation() {
        let form = AddCourseForm {
            department_id: 1,
            name: "Algorithms".to_string(),
            code: "CS-201".to_string(),
            credits: 0,
        };
        assert!(form.validate().is_err());
    }
}
