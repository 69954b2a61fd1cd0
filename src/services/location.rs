//! Services behind the campus location pages: buildings, floors and rooms.

use validator::Validate;

use crate::domain::location::{Building, Floor, NewBuilding, NewFloor, NewRoom};
use crate::dto::location::{
    BuildingListParams, BuildingsPageData, FloorListParams, FloorsPageData, RoomListParams,
    RoomsPageData,
};
use crate::forms::location::{
    AddBuildingForm, AddFloorForm, AddRoomForm, SaveBuildingForm, SaveFloorForm, SaveRoomForm,
};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{
    BuildingFilters, BuildingListQuery, BuildingReader, BuildingWriter, FloorFilters,
    FloorListQuery, FloorReader, FloorWriter, RoomReader, RoomWriter,
};
use crate::services::{ensure_role, ServiceError, ServiceResult, FILTER_OPTIONS_LIMIT};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn building_options<R>(repo: &R) -> ServiceResult<Vec<Building>>
where
    R: BuildingReader + ?Sized,
{
    let query = BuildingListQuery::new()
        .apply_filters(BuildingFilters {
            is_active: Some(true),
        })
        .toggle_sort("name")
        .with_per_page(FILTER_OPTIONS_LIMIT);

    Ok(repo.list_buildings(&query)?.items)
}

fn floor_options<R>(repo: &R) -> ServiceResult<Vec<Floor>>
where
    R: FloorReader + ?Sized,
{
    let query = FloorListQuery::new()
        .apply_filters(FloorFilters {
            building_id: None,
            is_active: Some(true),
        })
        .toggle_sort("name")
        .with_per_page(FILTER_OPTIONS_LIMIT);

    Ok(repo.list_floors(&query)?.items)
}

/// Loads the buildings list page.
pub fn list_buildings<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: BuildingListParams,
) -> ServiceResult<BuildingsPageData>
where
    R: BuildingReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    let page = repo.list_buildings(&query)?;

    Ok(BuildingsPageData {
        search_query: query.search_term().map(str::to_string),
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        buildings: Paginated::new(page, query.page, query.per_page),
    })
}

pub fn add_building<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddBuildingForm,
) -> ServiceResult<()>
where
    R: BuildingWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.create_building(&NewBuilding::from(&form))?;

    Ok(())
}

pub fn update_building<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveBuildingForm,
) -> ServiceResult<()>
where
    R: BuildingWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.update_building(form.id, &(&form).into())?;

    Ok(())
}

pub fn set_building_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: BuildingWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.set_building_active(id, active)?;
    Ok(())
}

pub fn delete_building<R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    R: BuildingWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.delete_building(id)?;
    Ok(())
}

/// Loads the floors list page with the building filter options.
pub fn list_floors<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: FloorListParams,
) -> ServiceResult<FloorsPageData>
where
    R: FloorReader + BuildingReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    let page = repo.list_floors(&query)?;
    let buildings = building_options(repo)?;

    Ok(FloorsPageData {
        search_query: query.search_term().map(str::to_string),
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        floors: Paginated::new(page, query.page, query.per_page),
        buildings,
    })
}

pub fn add_floor<R>(repo: &R, user: &AuthenticatedUser, form: AddFloorForm) -> ServiceResult<()>
where
    R: FloorWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.create_floor(&NewFloor::from(&form))?;

    Ok(())
}

pub fn update_floor<R>(repo: &R, user: &AuthenticatedUser, form: SaveFloorForm) -> ServiceResult<()>
where
    R: FloorWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.update_floor(form.id, &(&form).into())?;

    Ok(())
}

pub fn set_floor_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: FloorWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.set_floor_active(id, active)?;
    Ok(())
}

pub fn delete_floor<R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    R: FloorWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.delete_floor(id)?;
    Ok(())
}

/// Loads the rooms list page with the floor filter options.
pub fn list_rooms<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: RoomListParams,
) -> ServiceResult<RoomsPageData>
where
    R: RoomReader + FloorReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let query = params.into_query();
    let page = repo.list_rooms(&query)?;
    let floors = floor_options(repo)?;

    Ok(RoomsPageData {
        search_query: query.search_term().map(str::to_string),
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        rooms: Paginated::new(page, query.page, query.per_page),
        floors,
    })
}

pub fn add_room<R>(repo: &R, user: &AuthenticatedUser, form: AddRoomForm) -> ServiceResult<()>
where
    R: RoomWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.create_room(&NewRoom::from(&form))?;

    Ok(())
}

pub fn update_room<R>(repo: &R, user: &AuthenticatedUser, form: SaveRoomForm) -> ServiceResult<()>
where
    R: RoomWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.update_room(form.id, &(&form).into())?;

    Ok(())
}

pub fn set_room_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: RoomWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.set_room_active(id, active)?;
    Ok(())
}

pub fn delete_room<R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    R: RoomWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;
    repo.delete_room(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListPage;
    use crate::repository::mock::MockRepository;
    use crate::services::test_support::{admin_user, viewer_user};

    #[test]
    fn list_rooms_loads_floor_options() {
        let mut repo = MockRepository::new();
        repo.expect_list_rooms()
            .times(1)
            .returning(|_| Ok(ListPage::empty()));
        repo.expect_list_floors()
            .withf(|query| query.filters.is_active == Some(true))
            .times(1)
            .returning(|_| Ok(ListPage::empty()));

        let data = list_rooms(&repo, &viewer_user(), RoomListParams::default()).unwrap();
        assert!(data.floors.is_empty());
    }

    #[test]
    fn delete_building_requires_admin_role() {
        let repo = MockRepository::new();
        let result = delete_building(&repo, &viewer_user(), 1);
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn invalid_room_form_never_reaches_the_repository() {
        let repo = MockRepository::new();
        let form = AddRoomForm {
            floor_id: 1,
            name: "101".to_string(),
            capacity: 0,
        };
        let result = add_room(&repo, &admin_user(), form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
