use serde::Deserialize;
use validator::Validate;

use crate::domain::enrollment::{EnrollmentStatus, NewEnrollment};
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form data for enrolling a student into a course offering.
pub struct AddEnrollmentForm {
    pub student_id: i32,
    pub course_id: i32,
    pub semester_id: i32,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    EnrollmentStatus::Enrolled.to_string()
}

impl AddEnrollmentForm {
    pub fn to_new_enrollment(&self) -> Result<NewEnrollment, FormError> {
        let status = self
            .status
            .parse::<EnrollmentStatus>()
            .map_err(FormError::InvalidStatus)?;
        Ok(NewEnrollment {
            student_id: self.student_id,
            course_id: self.course_id,
            semester_id: self.semester_id,
            status,
        })
    }
}

#[derive(Deserialize, Validate)]
/// Form data for changing the status of an enrollment.
pub struct UpdateEnrollmentStatusForm {
    pub id: i32,
    pub status: String,
}

impl UpdateEnrollmentStatusForm {
    pub fn parsed_status(&self) -> Result<EnrollmentStatus, FormError> {
        self.status
            .parse::<EnrollmentStatus>()
            .map_err(FormError::InvalidStatus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_is_rejected() {
        let form = UpdateEnrollmentStatusForm {
            id: 1,
            status: "paused".to_string(),
        };
        assert!(form.parsed_status().is_err());
    }

    #[test]
    fn new_enrollment_defaults_to_enrolled() {
        let form = AddEnrollmentForm {
            student_id: 1,
            course_id: 2,
            semester_id: 3,
            status: default_status(),
        };
        let new = form.to_new_enrollment().unwrap();
        assert_eq!(new.status, EnrollmentStatus::Enrolled);
    }
}
