use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::exam::{NewExam, UpdateExam};
use crate::forms::FormError;

/// Browser `datetime-local` inputs omit the seconds, so accept both forms.
fn parse_starts_at(value: &str) -> Result<NaiveDateTime, FormError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| FormError::InvalidDateTime(value.to_string()))
}

#[derive(Deserialize, Validate)]
/// Form data for scheduling an exam.
pub struct AddExamForm {
    pub course_id: i32,
    pub semester_id: i32,
    pub room_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    pub starts_at: String,
    #[validate(range(min = 15, max = 480))]
    pub duration_minutes: i32,
}

#[derive(Deserialize, Validate)]
/// Form data for updating a scheduled exam.
pub struct SaveExamForm {
    pub id: i32,
    pub course_id: i32,
    pub semester_id: i32,
    pub room_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    pub starts_at: String,
    #[validate(range(min = 15, max = 480))]
    pub duration_minutes: i32,
}

impl AddExamForm {
    pub fn to_new_exam(&self) -> Result<NewExam, FormError> {
        self.validate()?;
        Ok(NewExam {
            course_id: self.course_id,
            semester_id: self.semester_id,
            room_id: self.room_id,
            name: self.name.trim().to_string(),
            starts_at: parse_starts_at(&self.starts_at)?,
            duration_minutes: self.duration_minutes,
        })
    }
}

impl SaveExamForm {
    pub fn to_update_exam(&self) -> Result<UpdateExam, FormError> {
        self.validate()?;
        Ok(UpdateExam {
            course_id: self.course_id,
            semester_id: self.semester_id,
            room_id: self.room_id,
            name: self.name.trim().to_string(),
            starts_at: parse_starts_at(&self.starts_at)?,
            duration_minutes: self.duration_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_accepts_datetime_local_format() {
        assert!(parse_starts_at("2026-06-15T09:00").is_ok());
        assert!(parse_starts_at("2026-06-15T09:00:30").is_ok());
        assert!(parse_starts_at("15.06.2026 09:00").is_err());
    }

    #[test]
    fn short_duration_fails_validation() {
        let form = AddExamForm {
            course_id: 1,
            semester_id: 1,
            room_id: 1,
            name: "Final".to_string(),
            starts_at: "2026-06-15T09:00".to_string(),
            duration_minutes: 5,
        };
        assert!(form.to_new_exam().is_err());
    }
}
