//! Diesel repositories for buildings, floors and rooms.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::location::{
    Building, Floor, NewBuilding, NewFloor, NewRoom, Room, UpdateBuilding, UpdateFloor,
    UpdateRoom,
};
use crate::listing::{ListPage, Sort};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BuildingListQuery, BuildingReader, BuildingWriter, DieselRepository, FloorListQuery,
    FloorReader, FloorWriter, RoomListQuery, RoomReader, RoomWriter,
};
use crate::schema::{buildings, floors, rooms};

fn filtered_buildings(query: &BuildingListQuery) -> buildings::BoxedQuery<'_, Sqlite> {
    let mut q = buildings::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search_term() {
        let pattern = format!("%{term}%");
        q = q.filter(
            buildings::name
                .like(pattern.clone())
                .or(buildings::code.like(pattern.clone()))
                .or(buildings::address.like(pattern)),
        );
    }
    if let Some(is_active) = query.filters.is_active {
        q = q.filter(buildings::is_active.eq(is_active));
    }

    q
}

fn sorted_buildings<'a>(
    q: buildings::BoxedQuery<'a, Sqlite>,
    sort: Option<&Sort>,
) -> buildings::BoxedQuery<'a, Sqlite> {
    match sort {
        Some(sort) => match (sort.key.as_str(), sort.descending) {
            ("name", false) => q.order(buildings::name.asc()),
            ("name", true) => q.order(buildings::name.desc()),
            ("code", false) => q.order(buildings::code.asc()),
            ("code", true) => q.order(buildings::code.desc()),
            _ => q.order(buildings::id.asc()),
        },
        None => q.order(buildings::id.asc()),
    }
}

impl BuildingReader for DieselRepository {
    fn get_building_by_id(&self, id: i32) -> RepositoryResult<Option<Building>> {
        use crate::models::location::Building as DbBuilding;

        let mut conn = self.conn()?;
        let building = buildings::table
            .find(id)
            .first::<DbBuilding>(&mut conn)
            .optional()?;

        Ok(building.map(Into::into))
    }

    fn list_buildings(&self, query: &BuildingListQuery) -> RepositoryResult<ListPage<Building>> {
        use crate::models::location::Building as DbBuilding;

        let mut conn = self.conn()?;

        let total: i64 = filtered_buildings(query).count().get_result(&mut conn)?;

        let items = sorted_buildings(filtered_buildings(query), query.sort.as_ref())
            .limit(query.limit())
            .offset(query.offset())
            .load::<DbBuilding>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListPage::new(items, total as usize))
    }
}

impl BuildingWriter for DieselRepository {
    fn create_building(&self, new: &NewBuilding) -> RepositoryResult<Building> {
        use crate::models::location::{Building as DbBuilding, NewBuilding as DbNewBuilding};

        let mut conn = self.conn()?;
        let insertable: DbNewBuilding = new.into();
        let created = diesel::insert_into(buildings::table)
            .values(&insertable)
            .get_result::<DbBuilding>(&mut conn)?;

        Ok(created.into())
    }

    fn update_building(&self, id: i32, updates: &UpdateBuilding) -> RepositoryResult<Building> {
        use crate::models::location::{
            Building as DbBuilding, UpdateBuilding as DbUpdateBuilding,
        };

        let mut conn = self.conn()?;
        let db_updates: DbUpdateBuilding = updates.into();
        let updated = diesel::update(buildings::table.find(id))
            .set((&db_updates, buildings::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbBuilding>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_building_active(&self, id: i32, active: bool) -> RepositoryResult<Building> {
        use crate::models::location::Building as DbBuilding;

        let mut conn = self.conn()?;
        let updated = diesel::update(buildings::table.find(id))
            .set((
                buildings::is_active.eq(active),
                buildings::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbBuilding>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_building(&self, id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::delete(buildings::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}

fn filtered_floors(query: &FloorListQuery) -> floors::BoxedQuery<'_, Sqlite> {
    let mut q = floors::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search_term() {
        let pattern = format!("%{term}%");
        q = q.filter(floors::name.like(pattern));
    }
    if let Some(building_id) = query.filters.building_id {
        q = q.filter(floors::building_id.eq(building_id));
    }
    if let Some(is_active) = query.filters.is_active {
        q = q.filter(floors::is_active.eq(is_active));
    }

    q
}

fn sorted_floors<'a>(
    q: floors::BoxedQuery<'a, Sqlite>,
    sort: Option<&Sort>,
) -> floors::BoxedQuery<'a, Sqlite> {
    match sort {
        Some(sort) => match (sort.key.as_str(), sort.descending) {
            ("name", false) => q.order(floors::name.asc()),
            ("name", true) => q.order(floors::name.desc()),
            ("level", false) => q.order(floors::level.asc()),
            ("level", true) => q.order(floors::level.desc()),
            _ => q.order(floors::id.asc()),
        },
        None => q.order(floors::id.asc()),
    }
}

impl FloorReader for DieselRepository {
    fn get_floor_by_id(&self, id: i32) -> RepositoryResult<Option<Floor>> {
        use crate::models::location::Floor as DbFloor;

        let mut conn = self.conn()?;
        let floor = floors::table.find(id).first::<DbFloor>(&mut conn).optional()?;

        Ok(floor.map(Into::into))
    }

    fn list_floors(&self, query: &FloorListQuery) -> RepositoryResult<ListPage<Floor>> {
        use crate::models::location::Floor as DbFloor;

        let mut conn = self.conn()?;

        let total: i64 = filtered_floors(query).count().get_result(&mut conn)?;

        let items = sorted_floors(filtered_floors(query), query.sort.as_ref())
            .limit(query.limit())
            .offset(query.offset())
            .load::<DbFloor>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListPage::new(items, total as usize))
    }
}

impl FloorWriter for DieselRepository {
    fn create_floor(&self, new: &NewFloor) -> RepositoryResult<Floor> {
        use crate::models::location::{Floor as DbFloor, NewFloor as DbNewFloor};

        let mut conn = self.conn()?;
        let insertable: DbNewFloor = new.into();
        let created = diesel::insert_into(floors::table)
            .values(&insertable)
            .get_result::<DbFloor>(&mut conn)?;

        Ok(created.into())
    }

    fn update_floor(&self, id: i32, updates: &UpdateFloor) -> RepositoryResult<Floor> {
        use crate::models::location::{Floor as DbFloor, UpdateFloor as DbUpdateFloor};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateFloor = updates.into();
        let updated = diesel::update(floors::table.find(id))
            .set((&db_updates, floors::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbFloor>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_floor_active(&self, id: i32, active: bool) -> RepositoryResult<Floor> {
        use crate::models::location::Floor as DbFloor;

        let mut conn = self.conn()?;
        let updated = diesel::update(floors::table.find(id))
            .set((
                floors::is_active.eq(active),
                floors::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbFloor>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_floor(&self, id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::delete(floors::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}

fn filtered_rooms(query: &RoomListQuery) -> rooms::BoxedQuery<'_, Sqlite> {
    let mut q = rooms::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search_term() {
        let pattern = format!("%{term}%");
        q = q.filter(rooms::name.like(pattern));
    }
    if let Some(floor_id) = query.filters.floor_id {
        q = q.filter(rooms::floor_id.eq(floor_id));
    }
    if let Some(min_capacity) = query.filters.min_capacity {
        q = q.filter(rooms::capacity.ge(min_capacity));
    }
    if let Some(is_active) = query.filters.is_active {
        q = q.filter(rooms::is_active.eq(is_active));
    }

    q
}

fn sorted_rooms<'a>(
    q: rooms::BoxedQuery<'a, Sqlite>,
    sort: Option<&Sort>,
) -> rooms::BoxedQuery<'a, Sqlite> {
    match sort {
        Some(sort) => match (sort.key.as_str(), sort.descending) {
            ("name", false) => q.order(rooms::name.asc()),
            ("name", true) => q.order(rooms::name.desc()),
            ("capacity", false) => q.order(rooms::capacity.asc()),
            ("capacity", true) => q.order(rooms::capacity.desc()),
            _ => q.order(rooms::id.asc()),
        },
        None => q.order(rooms::id.asc()),
    }
}

impl RoomReader for DieselRepository {
    fn get_room_by_id(&self, id: i32) -> RepositoryResult<Option<Room>> {
        use crate::models::location::Room as DbRoom;

        let mut conn = self.conn()?;
        let room = rooms::table.find(id).first::<DbRoom>(&mut conn).optional()?;

        Ok(room.map(Into::into))
    }

    fn list_rooms(&self, query: &RoomListQuery) -> RepositoryResult<ListPage<Room>> {
        use crate::models::location::Room as DbRoom;

        let mut conn = self.conn()?;

        let total: i64 = filtered_rooms(query).count().get_result(&mut conn)?;

        let items = sorted_rooms(filtered_rooms(query), query.sort.as_ref())
            .limit(query.limit())
            .offset(query.offset())
            .load::<DbRoom>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListPage::new(items, total as usize))
    }
}

impl RoomWriter for DieselRepository {
    fn create_room(&self, new: &NewRoom) -> RepositoryResult<Room> {
        use crate::models::location::{NewRoom as DbNewRoom, Room as DbRoom};

        let mut conn = self.conn()?;
        let insertable: DbNewRoom = new.into();
        let created = diesel::insert_into(rooms::table)
            .values(&insertable)
            .get_result::<DbRoom>(&mut conn)?;

        Ok(created.into())
    }

    fn update_room(&self, id: i32, updates: &UpdateRoom) -> RepositoryResult<Room> {
        use crate::models::location::{Room as DbRoom, UpdateRoom as DbUpdateRoom};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateRoom = updates.into();
        let updated = diesel::update(rooms::table.find(id))
            .set((&db_updates, rooms::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbRoom>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_room_active(&self, id: i32, active: bool) -> RepositoryResult<Room> {
        use crate::models::location::Room as DbRoom;

        let mut conn = self.conn()?;
        let updated = diesel::update(rooms::table.find(id))
            .set((
                rooms::is_active.eq(active),
                rooms::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbRoom>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_room(&self, id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::delete(rooms::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}
