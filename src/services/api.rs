//! Services behind the JSON API endpoints.

use crate::domain::catalog::Course;
use crate::domain::exam::Exam;
use crate::domain::student::Student;
use crate::dto::api::ListResponse;
use crate::dto::catalog::CourseListParams;
use crate::dto::exam::ExamListParams;
use crate::dto::student::StudentListParams;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{CourseReader, ExamReader, StudentReader};
use crate::services::{ensure_role, ServiceResult};
use crate::SERVICE_ACCESS_ROLE;

/// Returns the filtered student page for `/api/v1/students`.
pub fn list_students<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: StudentListParams,
) -> ServiceResult<ListResponse<Student>>
where
    R: StudentReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    Ok(repo.list_students(&query)?.into())
}

/// Returns the filtered course page for `/api/v1/courses`.
pub fn list_courses<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: CourseListParams,
) -> ServiceResult<ListResponse<Course>>
where
    R: CourseReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    Ok(repo.list_courses(&query)?.into())
}

/// Returns the filtered exam page for `/api/v1/exams`.
pub fn list_exams<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ExamListParams,
) -> ServiceResult<ListResponse<Exam>>
where
    R: ExamReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    Ok(repo.list_exams(&query)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListPage;
    use crate::repository::mock::MockRepository;
    use crate::services::test_support::viewer_user;
    use crate::services::ServiceError;

    #[test]
    fn student_listing_wraps_the_page_in_the_envelope() {
        let mut repo = MockRepository::new();
        repo.expect_list_students()
            .returning(|_| Ok(ListPage::new(Vec::new(), 42)));

        let response =
            list_students(&repo, &viewer_user(), StudentListParams::default()).unwrap();
        assert_eq!(response.total, 42);
        assert!(response.data.is_empty());
    }

    #[test]
    fn listing_requires_the_access_role() {
        let repo = MockRepository::new();
        let user = crate::models::auth::AuthenticatedUser {
            sub: "9".into(),
            email: "other@example.edu".into(),
            name: "Other".into(),
            roles: vec!["crm".into()],
            exp: usize::MAX,
        };
        let result = list_courses(&repo, &user, CourseListParams::default());
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}
