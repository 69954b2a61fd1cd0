//! Services behind the enrollment administration pages.

use crate::domain::catalog::Semester;
use crate::dto::enrollment::{EnrollmentListParams, EnrollmentRow, EnrollmentsPageData};
use crate::forms::enrollment::{AddEnrollmentForm, UpdateEnrollmentStatusForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::errors::RepositoryError;
use crate::repository::{
    CourseReader, EnrollmentReader, EnrollmentWriter, SemesterFilters, SemesterListQuery,
    SemesterReader, StudentReader,
};
use crate::services::{ensure_role, ServiceError, ServiceResult, FILTER_OPTIONS_LIMIT};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn semester_options<R>(repo: &R) -> ServiceResult<Vec<Semester>>
where
    R: SemesterReader + ?Sized,
{
    let query = SemesterListQuery::new()
        .apply_filters(SemesterFilters { is_active: None })
        .toggle_sort("starts_on")
        .with_per_page(FILTER_OPTIONS_LIMIT);

    Ok(repo.list_semesters(&query)?.items)
}

/// Loads the enrollments list page, resolving each row against its
/// student, course and semester.
pub fn list_enrollments<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: EnrollmentListParams,
) -> ServiceResult<EnrollmentsPageData>
where
    R: EnrollmentReader + StudentReader + CourseReader + SemesterReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    let page = repo.list_enrollments(&query)?;
    let total = page.total;

    let mut rows = Vec::with_capacity(page.items.len());
    for enrollment in page.items {
        let student = repo
            .get_student_by_id(enrollment.student_id)?
            .ok_or(ServiceError::NotFound)?;
        let course = repo
            .get_course_by_id(enrollment.course_id)?
            .ok_or(ServiceError::NotFound)?;
        let semester = repo
            .get_semester_by_id(enrollment.semester_id)?
            .ok_or(ServiceError::NotFound)?;
        rows.push(EnrollmentRow {
            enrollment,
            student,
            course,
            semester,
        });
    }

    let semesters = semester_options(repo)?;

    Ok(EnrollmentsPageData {
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        enrollments: Paginated::new(
            crate::listing::ListPage::new(rows, total),
            query.page,
            query.per_page,
        ),
        semesters,
    })
}

/// Enrolls a student into a course offering. The (student, course,
/// semester) triple is unique.
pub fn add_enrollment<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddEnrollmentForm,
) -> ServiceResult<()>
where
    R: EnrollmentWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let new_enrollment = form.to_new_enrollment().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.create_enrollment(&new_enrollment).map_err(|err| match err {
        RepositoryError::ConstraintViolation(_) => ServiceError::Form(
            "the student is already enrolled in this course for this semester".to_string(),
        ),
        other => ServiceError::from(other),
    })?;

    Ok(())
}

/// Moves an enrollment to a new status.
pub fn update_enrollment_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: UpdateEnrollmentStatusForm,
) -> ServiceResult<()>
where
    R: EnrollmentWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let status = form.parsed_status().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.update_enrollment_status(form.id, status)?;

    Ok(())
}

pub fn delete_enrollment<R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    R: EnrollmentWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.delete_enrollment(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrollment::EnrollmentStatus;
    use crate::repository::mock::MockRepository;
    use crate::services::test_support::admin_user;

    #[test]
    fn duplicate_enrollment_maps_to_a_form_error() {
        let mut repo = MockRepository::new();
        repo.expect_create_enrollment().returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "UNIQUE constraint failed".to_string(),
            ))
        });

        let form = AddEnrollmentForm {
            student_id: 1,
            course_id: 2,
            semester_id: 3,
            status: "enrolled".to_string(),
        };
        let result = add_enrollment(&repo, &admin_user(), form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn status_update_parses_before_touching_the_repository() {
        let repo = MockRepository::new();
        let form = UpdateEnrollmentStatusForm {
            id: 1,
            status: "paused".to_string(),
        };
        let result = update_enrollment_status(&repo, &admin_user(), form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn status_update_passes_the_parsed_status() {
        let mut repo = MockRepository::new();
        repo.expect_update_enrollment_status()
            .withf(|id, status| *id == 5 && *status == EnrollmentStatus::Completed)
            .times(1)
            .returning(|id, status| {
                Ok(crate::domain::enrollment::Enrollment {
                    id,
                    student_id: 1,
                    course_id: 2,
                    semester_id: 3,
                    status,
                    enrolled_at: chrono::NaiveDateTime::default(),
                })
            });

        let form = UpdateEnrollmentStatusForm {
            id: 5,
            status: "completed".to_string(),
        };
        assert!(update_enrollment_status(&repo, &admin_user(), form).is_ok());
    }
}
