//! Services behind the training roadmap pages.

use validator::Validate;

use crate::domain::catalog::Major;
use crate::dto::roadmap::{RoadmapListParams, RoadmapPageData, RoadmapsPageData};
use crate::forms::roadmap::{AddRoadmapForm, SaveRoadmapForm, SaveRoadmapItemsForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{
    CourseFilters, CourseListQuery, CourseReader, MajorFilters, MajorListQuery, MajorReader,
    RoadmapReader, RoadmapWriter,
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

/// Loads the roadmaps list page with the major filter options.
pub fn list_roadmaps<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: RoadmapListParams,
) -> ServiceResult<RoadmapsPageData>
where
    R: RoadmapReader + MajorReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    let page = repo.list_roadmaps(&query)?;
    let majors = major_options(repo)?;

    Ok(RoadmapsPageData {
        search_query: query.search_term().map(str::to_string),
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        roadmaps: Paginated::new(page, query.page, query.per_page),
        majors,
    })
}

/// Loads the roadmap editor page: the plan items resolved against their
/// courses plus all active courses for the picker.
pub fn load_roadmap_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    roadmap_id: i32,
) -> ServiceResult<RoadmapPageData>
where
    R: RoadmapReader + MajorReader + CourseReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let roadmap = repo
        .get_roadmap_by_id(roadmap_id)?
        .ok_or(ServiceError::NotFound)?;
    let major = repo.get_major_by_id(roadmap.major_id)?;

    let mut items = Vec::new();
    for item in repo.list_roadmap_items(roadmap_id)? {
        let course = repo
            .get_course_by_id(item.course_id)?
            .ok_or(ServiceError::NotFound)?;
        items.push((item, course));
    }

    let courses_query = CourseListQuery::new()
        .apply_filters(CourseFilters {
            is_active: Some(true),
            ..Default::default()
        })
        .toggle_sort("name")
        .with_per_page(FILTER_OPTIONS_LIMIT);
    let courses = repo.list_courses(&courses_query)?.items;

    Ok(RoadmapPageData {
        roadmap,
        major,
        items,
        courses,
    })
}

pub fn add_roadmap<R>(repo: &R, user: &AuthenticatedUser, form: AddRoadmapForm) -> ServiceResult<()>
where
    R: RoadmapWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.create_roadmap(&(&form).into())?;

    Ok(())
}

pub fn update_roadmap<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveRoadmapForm,
) -> ServiceResult<()>
where
    R: RoadmapWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.update_roadmap(form.id, &(&form).into())?;

    Ok(())
}

/// Replaces the whole course plan of a roadmap.
pub fn save_roadmap_items<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveRoadmapItemsForm,
) -> ServiceResult<usize>
where
    R: RoadmapReader + RoadmapWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    repo.get_roadmap_by_id(form.id)?
        .ok_or(ServiceError::NotFound)?;

    let items = form.to_items().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    Ok(repo.replace_roadmap_items(form.id, &items)?)
}

pub fn set_roadmap_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: RoadmapWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.set_roadmap_active(id, active)?;
    Ok(())
}

/// Removes the roadmap together with its plan items.
pub fn delete_roadmap<R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    R: RoadmapWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.delete_roadmap(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roadmap::Roadmap;
    use crate::repository::mock::MockRepository;
    use crate::services::test_support::admin_user;

    fn roadmap(id: i32) -> Roadmap {
        Roadmap {
            id,
            major_id: 1,
            name: "CS 2026".to_string(),
            is_active: true,
            created_at: chrono::NaiveDateTime::default(),
            updated_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn saving_items_replaces_the_whole_plan() {
        let mut repo = MockRepository::new();
        repo.expect_get_roadmap_by_id()
            .returning(|id| Ok(Some(roadmap(id))));
        repo.expect_replace_roadmap_items()
            .withf(|id, items| *id == 3 && items.len() == 2)
            .times(1)
            .returning(|_, items| Ok(items.len()));

        let form = SaveRoadmapItemsForm {
            id: 3,
            course_id: vec![10, 11],
            semester_no: vec![1, 2],
        };
        assert_eq!(save_roadmap_items(&repo, &admin_user(), form).unwrap(), 2);
    }

    #[test]
    fn saving_items_for_a_missing_roadmap_fails() {
        let mut repo = MockRepository::new();
        repo.expect_get_roadmap_by_id().returning(|_| Ok(None));

        let form = SaveRoadmapItemsForm {
            id: 99,
            course_id: vec![],
            semester_no: vec![],
        };
        let result = save_roadmap_items(&repo, &admin_user(), form);
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
