//! Services behind the lecturer administration pages.

use crate::dto::lecturer::{LecturerListParams, LecturersPageData};
use crate::forms::lecturer::{AddLecturerForm, SaveLecturerForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{DepartmentReader, LecturerReader, LecturerWriter};
use crate::services::catalog::department_options;
use crate::services::{ensure_role, ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Loads the lecturers list page with the department filter options.
pub fn list_lecturers<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: LecturerListParams,
) -> ServiceResult<LecturersPageData>
where
    R: LecturerReader + DepartmentReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    let page = repo.list_lecturers(&query)?;
    let departments = department_options(repo)?;

    Ok(LecturersPageData {
        search_query: query.search_term().map(str::to_string),
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        lecturers: Paginated::new(page, query.page, query.per_page),
        departments,
    })
}

pub fn add_lecturer<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddLecturerForm,
) -> ServiceResult<()>
where
    R: LecturerWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let new_lecturer = form.to_new_lecturer().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.create_lecturer(&new_lecturer)?;

    Ok(())
}

pub fn update_lecturer<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveLecturerForm,
) -> ServiceResult<()>
where
    R: LecturerWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let updates = form.to_update_lecturer().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.update_lecturer(form.id, &updates)?;

    Ok(())
}

pub fn set_lecturer_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: LecturerWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.set_lecturer_active(id, active)?;
    Ok(())
}

pub fn delete_lecturer<R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    R: LecturerWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.delete_lecturer(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;
    use crate::services::test_support::admin_user;

    #[test]
    fn invalid_phone_never_reaches_the_repository() {
        let repo = MockRepository::new();
        let form = AddLecturerForm {
            department_id: 1,
            name: "Dr. Smith".to_string(),
            email: "smith@example.edu".to_string(),
            phone: "garbage".to_string(),
        };
        let result = add_lecturer(&repo, &admin_user(), form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
