use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use validator::Validate;

use crate::domain::student::{NewStudent, UpdateStudent};
use crate::forms::{FormError, normalize_phone};

/// Strip markup from free-form notes before they reach storage.
fn sanitize_notes(notes: &str) -> String {
    ammonia::clean(notes.trim())
}

#[derive(Deserialize, Validate)]
/// Form data for registering a student.
pub struct AddStudentForm {
    pub major_id: i32,
    /// Registrar-issued matriculation number.
    #[validate(length(min = 1))]
    pub student_code: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[validate(range(min = 1900, max = 2100))]
    pub enrollment_year: i32,
    #[serde(default)]
    pub notes: String,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing student.
pub struct SaveStudentForm {
    pub id: i32,
    pub major_id: i32,
    #[validate(length(min = 1))]
    pub student_code: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[validate(range(min = 1900, max = 2100))]
    pub enrollment_year: i32,
    #[serde(default)]
    pub notes: String,
}

impl AddStudentForm {
    pub fn to_new_student(&self) -> Result<NewStudent, FormError> {
        self.validate()?;
        Ok(NewStudent {
            major_id: self.major_id,
            student_code: self.student_code.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: normalize_phone(&self.phone)?,
            enrollment_year: self.enrollment_year,
            notes: sanitize_notes(&self.notes),
        })
    }
}

impl SaveStudentForm {
    pub fn to_update_student(&self) -> Result<UpdateStudent, FormError> {
        self.validate()?;
        Ok(UpdateStudent {
            major_id: self.major_id,
            student_code: self.student_code.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: normalize_phone(&self.phone)?,
            enrollment_year: self.enrollment_year,
            notes: sanitize_notes(&self.notes),
        })
    }
}

#[derive(MultipartForm)]
/// CSV upload for bulk student registration.
pub struct UploadStudentsForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

/// Parse a student import CSV. Expected headers: `student_code`, `name`,
/// `email`, `phone`, `major_id`, `enrollment_year`, `notes`. Rows with a
/// missing code, name or email are rejected with their line number.
pub fn parse_students_csv<R: std::io::Read>(reader: R) -> Result<Vec<NewStudent>, FormError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| FormError::Upload(e.to_string()))?
        .clone();

    let mut students = Vec::new();

    for (row, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| FormError::Upload(e.to_string()))?;
        let line = row + 2; // header occupies line 1

        let mut student_code = String::new();
        let mut name = String::new();
        let mut email = String::new();
        let mut phone = String::new();
        let mut major_id = 0i32;
        let mut enrollment_year = 0i32;
        let mut notes = String::new();

        for (i, field) in record.iter().enumerate() {
            match headers.get(i) {
                Some("student_code") => student_code = field.trim().to_string(),
                Some("name") => name = field.trim().to_string(),
                Some("email") => email = field.trim().to_lowercase(),
                Some("phone") => phone = field.to_string(),
                Some("major_id") => {
                    major_id = field.trim().parse().map_err(|_| {
                        FormError::Upload(format!("line {line}: invalid major_id: {field}"))
                    })?;
                }
                Some("enrollment_year") => {
                    enrollment_year = field.trim().parse().map_err(|_| {
                        FormError::Upload(format!(
                            "line {line}: invalid enrollment_year: {field}"
                        ))
                    })?;
                }
                Some("notes") => notes = field.to_string(),
                _ => continue,
            }
        }

        if student_code.is_empty() || name.is_empty() || email.is_empty() {
            return Err(FormError::Upload(format!(
                "line {line}: student_code, name and email are required"
            )));
        }

        students.push(NewStudent {
            major_id,
            student_code,
            name,
            email,
            phone: normalize_phone(&phone)?,
            enrollment_year,
            notes: sanitize_notes(&notes),
        });
    }

    Ok(students)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_form() -> AddStudentForm {
        AddStudentForm {
            major_id: 1,
            student_code: "S-1001".to_string(),
            name: "Alice Doe".to_string(),
            email: "Alice@Example.COM".to_string(),
            phone: String::new(),
            enrollment_year: 2024,
            notes: "<script>alert(1)</script>first-gen".to_string(),
        }
    }

    #[test]
    fn email_is_lowercased_and_notes_sanitized() {
        let new = add_form().to_new_student().unwrap();
        assert_eq!(new.email, "alice@example.com");
        assert!(!new.notes.contains("<script>"));
        assert!(new.notes.contains("first-gen"));
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut form = add_form();
        form.email = "not-an-email".to_string();
        assert!(form.to_new_student().is_err());
    }

    #[test]
    fn csv_parses_valid_rows() {
        let csv = "student_code,name,email,phone,major_id,enrollment_year,notes\n\
                   S-1,Bob,bob@example.com,,2,2023,\n\
                   S-2,Eve,eve@example.com,,2,2024,transfer\n";
        let students = parse_students_csv(csv.as_bytes()).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].student_code, "S-1");
        assert_eq!(students[1].notes, "transfer");
    }

    #[test]
    fn csv_missing_email_reports_line() {
        let csv = "student_code,name,email,phone,major_id,enrollment_year,notes\n\
                   S-1,Bob,,,2,2023,\n";
        let err = parse_students_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
