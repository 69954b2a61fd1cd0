//! Services behind the exam scheduling pages.

use crate::domain::catalog::{Course, Semester};
use crate::domain::location::Room;
use crate::dto::exam::{ExamListParams, ExamsPageData};
use crate::forms::exam::{AddExamForm, SaveExamForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{
    CourseFilters, CourseListQuery, CourseReader, ExamReader, ExamWriter, RoomFilters,
    RoomListQuery, RoomReader, SemesterFilters, SemesterListQuery, SemesterReader,
};
use crate::services::{ensure_role, ServiceError, ServiceResult, FILTER_OPTIONS_LIMIT};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn course_options<R>(repo: &R) -> ServiceResult<Vec<Course>>
where
    R: CourseReader + ?Sized,
{
    let query = CourseListQuery::new()
        .apply_filters(CourseFilters {
            is_active: Some(true),
            ..Default::default()
        })
        .toggle_sort("name")
        .with_per_page(FILTER_OPTIONS_LIMIT);

    Ok(repo.list_courses(&query)?.items)
}

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

fn room_options<R>(repo: &R) -> ServiceResult<Vec<Room>>
where
    R: RoomReader + ?Sized,
{
    let query = RoomListQuery::new()
        .apply_filters(RoomFilters {
            is_active: Some(true),
            ..Default::default()
        })
        .toggle_sort("name")
        .with_per_page(FILTER_OPTIONS_LIMIT);

    Ok(repo.list_rooms(&query)?.items)
}

/// Loads the exams list page with course, semester and room filter options.
pub fn list_exams<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ExamListParams,
) -> ServiceResult<ExamsPageData>
where
    R: ExamReader + CourseReader + SemesterReader + RoomReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    let page = repo.list_exams(&query)?;

    Ok(ExamsPageData {
        search_query: query.search_term().map(str::to_string),
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        exams: Paginated::new(page, query.page, query.per_page),
        courses: course_options(repo)?,
        semesters: semester_options(repo)?,
        rooms: room_options(repo)?,
    })
}

pub fn add_exam<R>(repo: &R, user: &AuthenticatedUser, form: AddExamForm) -> ServiceResult<()>
where
    R: ExamWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let new_exam = form.to_new_exam().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.create_exam(&new_exam)?;

    Ok(())
}

pub fn update_exam<R>(repo: &R, user: &AuthenticatedUser, form: SaveExamForm) -> ServiceResult<()>
where
    R: ExamWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let updates = form.to_update_exam().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.update_exam(form.id, &updates)?;

    Ok(())
}

pub fn set_exam_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: ExamWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.set_exam_active(id, active)?;
    Ok(())
}

pub fn delete_exam<R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    R: ExamWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.delete_exam(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;
    use crate::services::test_support::admin_user;

    #[test]
    fn malformed_start_time_never_reaches_the_repository() {
        let repo = MockRepository::new();
        let form = AddExamForm {
            course_id: 1,
            semester_id: 1,
            room_id: 1,
            name: "Final".to_string(),
            starts_at: "yesterday".to_string(),
            duration_minutes: 90,
        };
        let result = add_exam(&repo, &admin_user(), form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn valid_exam_is_created() {
        let mut repo = MockRepository::new();
        repo.expect_create_exam()
            .withf(|new| new.name == "Final" && new.duration_minutes == 90)
            .times(1)
            .returning(|new| {
                Ok(crate::domain::exam::Exam {
                    id: 1,
                    course_id: new.course_id,
                    semester_id: new.semester_id,
                    room_id: new.room_id,
                    name: new.name.clone(),
                    starts_at: new.starts_at,
                    duration_minutes: new.duration_minutes,
                    is_active: true,
                    created_at: chrono::NaiveDateTime::default(),
                    updated_at: chrono::NaiveDateTime::default(),
                })
            });

        let form = AddExamForm {
            course_id: 1,
            semester_id: 1,
            room_id: 1,
            name: "Final".to_string(),
            starts_at: "2026-06-15T09:00".to_string(),
            duration_minutes: 90,
        };
        assert!(add_exam(&repo, &admin_user(), form).is_ok());
    }
}
