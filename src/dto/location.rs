//! DTOs for the campus location pages.

use serde::Deserialize;

use crate::domain::location::{Building, Floor, Room};
use crate::listing::Sort;
use crate::pagination::Paginated;
use crate::repository::{
    BuildingFilters, BuildingListQuery, FloorFilters, FloorListQuery, RoomFilters, RoomListQuery,
};

/// Query parameters accepted by the buildings page.
#[derive(Debug, Default, Deserialize)]
pub struct BuildingListParams {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub sort: Option<String>,
    #[serde(default)]
    pub desc: bool,
    pub is_active: Option<bool>,
}

impl BuildingListParams {
    pub fn into_query(self) -> BuildingListQuery {
        let mut query = BuildingListQuery::new().apply_filters(BuildingFilters {
            is_active: self.is_active,
        });
        if let Some(q) = self.q {
            query = query.with_search(q);
        }
        if let Some(key) = self.sort {
            query = query.with_sort(Some(Sort {
                key,
                descending: self.desc,
            }));
        }
        if let Some(page) = self.page {
            query = query.with_page(page);
        }
        query
    }
}

/// Data required to render the buildings page.
#[derive(Debug)]
pub struct BuildingsPageData {
    pub buildings: Paginated<Building>,
    pub search_query: Option<String>,
    pub sort: Option<Sort>,
    pub filters: BuildingFilters,
}

/// Query parameters accepted by the floors page.
#[derive(Debug, Default, Deserialize)]
pub struct FloorListParams {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub sort: Option<String>,
    #[serde(default)]
    pub desc: bool,
    pub building_id: Option<i32>,
    pub is_active: Option<bool>,
}

impl FloorListParams {
    pub fn into_query(self) -> FloorListQuery {
        let mut query = FloorListQuery::new().apply_filters(FloorFilters {
            building_id: self.building_id,
            is_active: self.is_active,
        });
        if let Some(q) = self.q {
            query = query.with_search(q);
        }
        if let Some(key) = self.sort {
            query = query.with_sort(Some(Sort {
                key,
                descending: self.desc,
            }));
        }
        if let Some(page) = self.page {
            query = query.with_page(page);
        }
        query
    }
}

/// Data required to render the floors page. Buildings feed the filter
/// dropdown.
#[derive(Debug)]
pub struct FloorsPageData {
    pub floors: Paginated<Floor>,
    pub buildings: Vec<Building>,
    pub search_query: Option<String>,
    pub sort: Option<Sort>,
    pub filters: FloorFilters,
}

/// Query parameters accepted by the rooms page.
#[derive(Debug, Default, Deserialize)]
pub struct RoomListParams {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub sort: Option<String>,
    #[serde(default)]
    pub desc: bool,
    pub floor_id: Option<i32>,
    pub min_capacity: Option<i32>,
    pub is_active: Option<bool>,
}

impl RoomListParams {
    pub fn into_query(self) -> RoomListQuery {
        let mut query = RoomListQuery::new().apply_filters(RoomFilters {
            floor_id: self.floor_id,
            min_capacity: self.min_capacity,
            is_active: self.is_active,
        });
        if let Some(q) = self.q {
            query = query.with_search(q);
        }
        if let Some(key) = self.sort {
            query = query.with_sort(Some(Sort {
                key,
                descending: self.desc,
            }));
        }
        if let Some(page) = self.page {
            query = query.with_page(page);
        }
        query
    }
}

/// Data required to render the rooms page.
#[derive(Debug)]
pub struct RoomsPageData {
    pub rooms: Paginated<Room>,
    pub floors: Vec<Floor>,
    pub search_query: Option<String>,
    pub sort: Option<Sort>,
    pub filters: RoomFilters,
}
