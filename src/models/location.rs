//! Diesel models for the campus location tables.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::location::{
    Building as DomainBuilding, Floor as DomainFloor, NewBuilding as DomainNewBuilding,
    NewFloor as DomainNewFloor, NewRoom as DomainNewRoom, Room as DomainRoom,
    UpdateBuilding as DomainUpdateBuilding, UpdateFloor as DomainUpdateFloor,
    UpdateRoom as DomainUpdateRoom,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::buildings)]
pub struct Building {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub address: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::buildings)]
pub struct NewBuilding<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub address: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::buildings)]
pub struct UpdateBuilding<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub address: &'a str,
}

impl From<Building> for DomainBuilding {
    fn from(row: Building) -> Self {
        Self {
            id: row.id,
            name: row.name,
            code: row.code,
            address: row.address,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewBuilding> for NewBuilding<'a> {
    fn from(value: &'a DomainNewBuilding) -> Self {
        Self {
            name: &value.name,
            code: &value.code,
            address: &value.address,
        }
    }
}

impl<'a> From<&'a DomainUpdateBuilding> for UpdateBuilding<'a> {
    fn from(value: &'a DomainUpdateBuilding) -> Self {
        Self {
            name: &value.name,
            code: &value.code,
            address: &value.address,
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Building))]
#[diesel(table_name = crate::schema::floors)]
pub struct Floor {
    pub id: i32,
    pub building_id: i32,
    pub name: String,
    pub level: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::floors)]
pub struct NewFloor<'a> {
    pub building_id: i32,
    pub name: &'a str,
    pub level: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::floors)]
pub struct UpdateFloor<'a> {
    pub building_id: i32,
    pub name: &'a str,
    pub level: i32,
}

impl From<Floor> for DomainFloor {
    fn from(row: Floor) -> Self {
        Self {
            id: row.id,
            building_id: row.building_id,
            name: row.name,
            level: row.level,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewFloor> for NewFloor<'a> {
    fn from(value: &'a DomainNewFloor) -> Self {
        Self {
            building_id: value.building_id,
            name: &value.name,
            level: value.level,
        }
    }
}

impl<'a> From<&'a DomainUpdateFloor> for UpdateFloor<'a> {
    fn from(value: &'a DomainUpdateFloor) -> Self {
        Self {
            building_id: value.building_id,
            name: &value.name,
            level: value.level,
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Floor))]
#[diesel(table_name = crate::schema::rooms)]
pub struct Room {
    pub id: i32,
    pub floor_id: i32,
    pub name: String,
    pub capacity: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::rooms)]
pub struct NewRoom<'a> {
    pub floor_id: i32,
    pub name: &'a str,
    pub capacity: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::rooms)]
pub struct UpdateRoom<'a> {
    pub floor_id: i32,
    pub name: &'a str,
    pub capacity: i32,
}

impl From<Room> for DomainRoom {
    fn from(row: Room) -> Self {
        Self {
            id: row.id,
            floor_id: row.floor_id,
            name: row.name,
            capacity: row.capacity,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewRoom> for NewRoom<'a> {
    fn from(value: &'a DomainNewRoom) -> Self {
        Self {
            floor_id: value.floor_id,
            name: &value.name,
            capacity: value.capacity,
        }
    }
}

impl<'a> From<&'a DomainUpdateRoom> for UpdateRoom<'a> {
    fn from(value: &'a DomainUpdateRoom) -> Self {
        Self {
            floor_id: value.floor_id,
            name: &value.name,
            capacity: value.capacity,
        }
    }
}
