use serde::Deserialize;
use validator::Validate;

use crate::domain::location::{
    NewBuilding, NewFloor, NewRoom, UpdateBuilding, UpdateFloor, UpdateRoom,
};

#[derive(Deserialize, Validate)]
/// Form data for creating a building.
pub struct AddBuildingForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
    pub address: String,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing building.
pub struct SaveBuildingForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
    pub address: String,
}

impl From<&AddBuildingForm> for NewBuilding {
    fn from(form: &AddBuildingForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            code: form.code.trim().to_string(),
            address: form.address.trim().to_string(),
        }
    }
}

impl From<&SaveBuildingForm> for UpdateBuilding {
    fn from(form: &SaveBuildingForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            code: form.code.trim().to_string(),
            address: form.address.trim().to_string(),
        }
    }
}

#[derive(Deserialize, Validate)]
/// Form data for creating a floor within a building.
pub struct AddFloorForm {
    pub building_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    /// Storey number; ground floor is 0, basements are negative.
    #[validate(range(min = -10, max = 200))]
    pub level: i32,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing floor.
pub struct SaveFloorForm {
    pub id: i32,
    pub building_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = -10, max = 200))]
    pub level: i32,
}

impl From<&AddFloorForm> for NewFloor {
    fn from(form: &AddFloorForm) -> Self {
        Self {
            building_id: form.building_id,
            name: form.name.trim().to_string(),
            level: form.level,
        }
    }
}

impl From<&SaveFloorForm> for UpdateFloor {
    fn from(form: &SaveFloorForm) -> Self {
        Self {
            building_id: form.building_id,
            name: form.name.trim().to_string(),
            level: form.level,
        }
    }
}

#[derive(Deserialize, Validate)]
/// Form data for creating a room on a floor.
pub struct AddRoomForm {
    pub floor_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing room.
pub struct SaveRoomForm {
    pub id: i32,
    pub floor_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
}

impl From<&AddRoomForm> for NewRoom {
    fn from(form: &AddRoomForm) -> Self {
        Self {
            floor_id: form.floor_id,
            name: form.name.trim().to_string(),
            capacity: form.capacity,
        }
    }
}

impl From<&SaveRoomForm> for UpdateRoom {
    fn from(form: &SaveRoomForm) -> Self {
        Self {
            floor_id: form.floor_id,
            name: form.name.trim().to_string(),
            capacity: form.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_room_fails_validation() {
        let form = AddRoomForm {
            floor_id: 1,
            name: "101".to_string(),
            capacity: 0,
        };
        assert!(form.validate().is_err());
    }
}
