//! Services behind the academic catalogue pages: departments, majors,
//! semesters and courses.

use validator::Validate;

use crate::domain::catalog::{Department, NewCourse, NewDepartment, NewMajor, NewSemester};
use crate::dto::catalog::{
    CourseListParams, CoursesPageData, DepartmentListParams, DepartmentsPageData, MajorListParams,
    MajorsPageData, SemesterListParams, SemestersPageData,
};
use crate::forms::catalog::{
    AddCourseForm, AddDepartmentForm, AddMajorForm, AddSemesterForm, SaveCourseForm,
    SaveDepartmentForm, SaveMajorForm, SaveSemesterForm,
};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{
    CourseReader, CourseWriter, DepartmentFilters, DepartmentListQuery, DepartmentReader,
    DepartmentWriter, MajorReader, MajorWriter, SemesterReader, SemesterWriter,
};
use crate::services::{ensure_role, ServiceError, ServiceResult, FILTER_OPTIONS_LIMIT};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Active departments for filter dropdowns, name order.
pub(crate) fn department_options<R>(repo: &R) -> ServiceResult<Vec<Department>>
where
    R: DepartmentReader + ?Sized,
{
    let query = DepartmentListQuery::new()
        .apply_filters(DepartmentFilters {
            is_active: Some(true),
        })
        .toggle_sort("name")
        .with_per_page(FILTER_OPTIONS_LIMIT);

    Ok(repo.list_departments(&query)?.items)
}

/// Loads the departments list page.
pub fn list_departments<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: DepartmentListParams,
) -> ServiceResult<DepartmentsPageData>
where
    R: DepartmentReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    let page = repo.list_departments(&query)?;

    Ok(DepartmentsPageData {
        search_query: query.search_term().map(str::to_string),
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        departments: Paginated::new(page, query.page, query.per_page),
    })
}

/// Validates the add-department form and persists a new department.
pub fn add_department<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddDepartmentForm,
) -> ServiceResult<()>
where
    R: DepartmentWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.create_department(&NewDepartment::from(&form))?;

    Ok(())
}

/// Applies the save-department form to an existing department.
pub fn update_department<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveDepartmentForm,
) -> ServiceResult<()>
where
    R: DepartmentWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.update_department(form.id, &(&form).into())?;

    Ok(())
}

pub fn set_department_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: DepartmentWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.set_department_active(id, active)?;
    Ok(())
}

pub fn delete_department<R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    R: DepartmentWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.delete_department(id)?;
    Ok(())
}

/// Loads the majors list page with the department filter options.
pub fn list_majors<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: MajorListParams,
) -> ServiceResult<MajorsPageData>
where
    R: MajorReader + DepartmentReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    let page = repo.list_majors(&query)?;
    let departments = department_options(repo)?;

    Ok(MajorsPageData {
        search_query: query.search_term().map(str::to_string),
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        majors: Paginated::new(page, query.page, query.per_page),
        departments,
    })
}

pub fn add_major<R>(repo: &R, user: &AuthenticatedUser, form: AddMajorForm) -> ServiceResult<()>
where
    R: MajorWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.create_major(&NewMajor::from(&form))?;

    Ok(())
}

pub fn update_major<R>(repo: &R, user: &AuthenticatedUser, form: SaveMajorForm) -> ServiceResult<()>
where
    R: MajorWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.update_major(form.id, &(&form).into())?;

    Ok(())
}

pub fn set_major_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: MajorWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.set_major_active(id, active)?;
    Ok(())
}

pub fn delete_major<R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    R: MajorWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.delete_major(id)?;
    Ok(())
}

/// Loads the semesters list page.
pub fn list_semesters<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: SemesterListParams,
) -> ServiceResult<SemestersPageData>
where
    R: SemesterReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    let page = repo.list_semesters(&query)?;

    Ok(SemestersPageData {
        search_query: query.search_term().map(str::to_string),
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        semesters: Paginated::new(page, query.page, query.per_page),
    })
}

pub fn add_semester<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddSemesterForm,
) -> ServiceResult<()>
where
    R: SemesterWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }
    if form.ends_on < form.starts_on {
        return Err(ServiceError::Form(
            "semester cannot end before it starts".to_string(),
        ));
    }

    repo.create_semester(&NewSemester::from(&form))?;

    Ok(())
}

pub fn update_semester<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveSemesterForm,
) -> ServiceResult<()>
where
    R: SemesterWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }
    if form.ends_on < form.starts_on {
        return Err(ServiceError::Form(
            "semester cannot end before it starts".to_string(),
        ));
    }

    repo.update_semester(form.id, &(&form).into())?;

    Ok(())
}

pub fn set_semester_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: SemesterWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.set_semester_active(id, active)?;
    Ok(())
}

pub fn delete_semester<R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    R: SemesterWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.delete_semester(id)?;
    Ok(())
}

/// Loads the courses list page with the department filter options.
pub fn list_courses<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: CourseListParams,
) -> ServiceResult<CoursesPageData>
where
    R: CourseReader + DepartmentReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    let page = repo.list_courses(&query)?;
    let departments = department_options(repo)?;

    Ok(CoursesPageData {
        search_query: query.search_term().map(str::to_string),
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        courses: Paginated::new(page, query.page, query.per_page),
        departments,
    })
}

pub fn add_course<R>(repo: &R, user: &AuthenticatedUser, form: AddCourseForm) -> ServiceResult<()>
where
    R: CourseWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.create_course(&NewCourse::from(&form))?;

    Ok(())
}

pub fn update_course<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveCourseForm,
) -> ServiceResult<()>
where
    R: CourseWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.update_course(form.id, &(&form).into())?;

    Ok(())
}

pub fn set_course_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: CourseWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.set_course_active(id, active)?;
    Ok(())
}

pub fn delete_course<R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    R: CourseWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.delete_course(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListPage;
    use crate::repository::mock::MockRepository;
    use crate::services::test_support::{admin_user, viewer_user};

    #[test]
    fn add_department_requires_admin_role() {
        let repo = MockRepository::new();
        let form = AddDepartmentForm {
            name: "Physics".to_string(),
            code: "PHY".to_string(),
        };

        let result = add_department(&repo, &viewer_user(), form);
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn invalid_department_form_never_reaches_the_repository() {
        let repo = MockRepository::new();
        let form = AddDepartmentForm {
            name: String::new(),
            code: "PHY".to_string(),
        };

        let result = add_department(&repo, &admin_user(), form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn valid_department_form_issues_exactly_one_create() {
        let mut repo = MockRepository::new();
        repo.expect_create_department()
            .withf(|new| new.name == "Physics" && new.code == "PHY")
            .times(1)
            .returning(|new| {
                Ok(Department {
                    id: 1,
                    name: new.name.clone(),
                    code: new.code.clone(),
                    is_active: true,
                    created_at: chrono::NaiveDateTime::default(),
                    updated_at: chrono::NaiveDateTime::default(),
                })
            });

        let form = AddDepartmentForm {
            name: "  Physics ".to_string(),
            code: " PHY ".to_string(),
        };
        assert!(add_department(&repo, &admin_user(), form).is_ok());
    }

    #[test]
    fn semester_date_order_is_enforced() {
        let repo = MockRepository::new();
        let form = AddSemesterForm {
            name: "Fall 2026".to_string(),
            code: "2026F".to_string(),
            starts_on: chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            ends_on: chrono::NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        };

        let result = add_semester(&repo, &admin_user(), form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn list_departments_passes_the_query_through() {
        let mut repo = MockRepository::new();
        repo.expect_list_departments()
            .withf(|query| query.page == 2 && query.search_term() == Some("sci"))
            .times(1)
            .returning(|_| Ok(ListPage::empty()));

        let params = DepartmentListParams {
            q: Some("sci".to_string()),
            page: Some(2),
            ..Default::default()
        };
        let data = list_departments(&repo, &viewer_user(), params).unwrap();
        assert_eq!(data.departments.total, 0);
        assert_eq!(data.search_query.as_deref(), Some("sci"));
    }
}
