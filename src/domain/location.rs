//! Campus locations: buildings, their floors and rooms.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Building {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub address: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewBuilding {
    pub name: String,
    pub code: String,
    pub address: String,
}

#[derive(Clone, Debug)]
pub struct UpdateBuilding {
    pub name: String,
    pub code: String,
    pub address: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Floor {
    pub id: i32,
    pub building_id: i32,
    pub name: String,
    /// Storey number; ground floor is 0, basements are negative.
    pub level: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewFloor {
    pub building_id: i32,
    pub name: String,
    pub level: i32,
}

#[derive(Clone, Debug)]
pub struct UpdateFloor {
    pub building_id: i32,
    pub name: String,
    pub level: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: i32,
    pub floor_id: i32,
    pub name: String,
    pub capacity: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewRoom {
    pub floor_id: i32,
    pub name: String,
    pub capacity: i32,
}

#[derive(Clone, Debug)]
pub struct UpdateRoom {
    pub floor_id: i32,
    pub name: String,
    pub capacity: i32,
}
