//! Services behind the student administration pages, including the bulk
//! CSV import.

use std::io::Read;

use crate::domain::catalog::Major;
use crate::dto::student::{
    StudentImportOutcome, StudentListParams, StudentPageData, StudentsPageData,
};
use crate::forms::student::{parse_students_csv, AddStudentForm, SaveStudentForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{
    CourseReader, EnrollmentFilters, EnrollmentListQuery, EnrollmentReader, MajorFilters,
    MajorListQuery, MajorReader, SemesterReader, StudentReader, StudentWriter,
};
use crate::services::{ensure_role, ServiceError, ServiceResult, FILTER_OPTIONS_LIMIT};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn major_options<R>(repo: &R) -> ServiceResult<Vec<Major>>
where
    R: MajorReader + ?Sized,
{
    let query = MajorListQuery::new()
        .apply_filters(MajorFilters {
            department_id: None,
            is_active: Some(true),
        })
        .toggle_sort("name")
        .with_per_page(FILTER_OPTIONS_LIMIT);

    Ok(repo.list_majors(&query)?.items)
}

/// Loads the students list page with the major filter options.
pub fn list_students<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: StudentListParams,
) -> ServiceResult<StudentsPageData>
where
    R: StudentReader + MajorReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    let page = repo.list_students(&query)?;
    let majors = major_options(repo)?;

    Ok(StudentsPageData {
        search_query: query.search_term().map(str::to_string),
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        students: Paginated::new(page, query.page, query.per_page),
        majors,
    })
}

/// Loads the student details page: the record, its major and the full
/// enrollment history resolved against courses and semesters.
pub fn load_student_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    student_id: i32,
) -> ServiceResult<StudentPageData>
where
    R: StudentReader + MajorReader + EnrollmentReader + CourseReader + SemesterReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let student = repo
        .get_student_by_id(student_id)?
        .ok_or(ServiceError::NotFound)?;
    let major = repo.get_major_by_id(student.major_id)?;

    let query = EnrollmentListQuery::new()
        .apply_filters(EnrollmentFilters {
            student_id: Some(student_id),
            ..Default::default()
        })
        .with_per_page(FILTER_OPTIONS_LIMIT);

    let mut enrollments = Vec::new();
    for enrollment in repo.list_enrollments(&query)?.items {
        let course = repo
            .get_course_by_id(enrollment.course_id)?
            .ok_or(ServiceError::NotFound)?;
        let semester = repo
            .get_semester_by_id(enrollment.semester_id)?
            .ok_or(ServiceError::NotFound)?;
        enrollments.push((enrollment, course, semester));
    }

    Ok(StudentPageData {
        student,
        major,
        enrollments,
    })
}

/// Validates the add-student form and persists the record. Matriculation
/// codes are unique, so a duplicate is reported before the insert.
pub fn add_student<R>(repo: &R, user: &AuthenticatedUser, form: AddStudentForm) -> ServiceResult<()>
where
    R: StudentReader + StudentWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let new_student = form.to_new_student().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    if repo.get_student_by_code(&new_student.student_code)?.is_some() {
        return Err(ServiceError::Form(format!(
            "student code {} is already taken",
            new_student.student_code
        )));
    }

    repo.create_students(std::slice::from_ref(&new_student))?;

    Ok(())
}

pub fn update_student<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveStudentForm,
) -> ServiceResult<()>
where
    R: StudentWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let updates = form.to_update_student().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.update_student(form.id, &updates)?;

    Ok(())
}

/// Parses the uploaded CSV and creates student records in bulk.
pub fn import_students<R, T>(
    repo: &R,
    user: &AuthenticatedUser,
    reader: T,
) -> ServiceResult<StudentImportOutcome>
where
    R: StudentWriter + ?Sized,
    T: Read,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let students = parse_students_csv(reader).map_err(|err| {
        log::error!("Failed to parse students CSV: {err}");
        ServiceError::Form(err.to_string())
    })?;

    if students.is_empty() {
        return Err(ServiceError::Form("the file contains no rows".to_string()));
    }

    let created = repo.create_students(&students)?;

    Ok(StudentImportOutcome { created })
}

pub fn set_student_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: StudentWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.set_student_active(id, active)?;
    Ok(())
}

/// Removes the student together with their enrollment history.
pub fn delete_student<R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    R: StudentWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.delete_student(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;
    use crate::services::test_support::{admin_user, viewer_user};

    fn add_form() -> AddStudentForm {
        AddStudentForm {
            major_id: 1,
            student_code: "S-1001".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.edu".to_string(),
            phone: String::new(),
            enrollment_year: 2024,
            notes: String::new(),
        }
    }

    #[test]
    fn add_student_rejects_duplicate_code() {
        let mut repo = MockRepository::new();
        repo.expect_get_student_by_code()
            .returning(|code| {
                Ok(Some(crate::domain::student::Student {
                    id: 7,
                    major_id: 1,
                    student_code: code.to_string(),
                    name: "Existing".to_string(),
                    email: "existing@example.edu".to_string(),
                    phone: String::new(),
                    enrollment_year: 2023,
                    notes: String::new(),
                    is_active: true,
                    created_at: chrono::NaiveDateTime::default(),
                    updated_at: chrono::NaiveDateTime::default(),
                }))
            });

        let result = add_student(&repo, &admin_user(), add_form());
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn add_student_creates_one_record() {
        let mut repo = MockRepository::new();
        repo.expect_get_student_by_code().returning(|_| Ok(None));
        repo.expect_create_students()
            .withf(|batch| batch.len() == 1 && batch[0].student_code == "S-1001")
            .times(1)
            .returning(|batch| Ok(batch.len()));

        assert!(add_student(&repo, &admin_user(), add_form()).is_ok());
    }

    #[test]
    fn import_requires_admin_role() {
        let repo = MockRepository::new();
        let csv = "student_code,name,email\nS-1,Bob,bob@example.edu\n";
        let result = import_students(&repo, &viewer_user(), csv.as_bytes());
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn import_creates_all_parsed_rows() {
        let mut repo = MockRepository::new();
        repo.expect_create_students()
            .withf(|batch| batch.len() == 2)
            .times(1)
            .returning(|batch| Ok(batch.len()));

        let csv = "student_code,name,email,phone,major_id,enrollment_year,notes\n\
                   S-1,Bob,bob@example.edu,,1,2023,\n\
                   S-2,Eve,eve@example.edu,,1,2024,\n";
        let outcome = import_students(&repo, &admin_user(), csv.as_bytes()).unwrap();
        assert_eq!(outcome.created, 2);
    }

    #[test]
    fn empty_import_is_rejected() {
        let repo = MockRepository::new();
        let csv = "student_code,name,email,phone,major_id,enrollment_year,notes\n";
        let result = import_students(&repo, &admin_user(), csv.as_bytes());
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
