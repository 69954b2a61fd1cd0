use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::roadmap::{NewRoadmap, NewRoadmapItem, Roadmap, RoadmapItem, UpdateRoadmap};
use crate::listing::{ListPage, Sort};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, RoadmapListQuery, RoadmapReader, RoadmapWriter};
use crate::schema::{roadmap_items, roadmaps};

fn filtered(query: &RoadmapListQuery) -> roadmaps::BoxedQuery<'_, Sqlite> {
    let mut q = roadmaps::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search_term() {
        let pattern = format!("%{term}%");
        q = q.filter(roadmaps::name.like(pattern));
    }
    if let Some(major_id) = query.filters.major_id {
        q = q.filter(roadmaps::major_id.eq(major_id));
    }
    if let Some(is_active) = query.filters.is_active {
        q = q.filter(roadmaps::is_active.eq(is_active));
    }

    q
}

fn sorted<'a>(
    q: roadmaps::BoxedQuery<'a, Sqlite>,
    sort: Option<&Sort>,
) -> roadmaps::BoxedQuery<'a, Sqlite> {
    match sort {
        Some(sort) => match (sort.key.as_str(), sort.descending) {
            ("name", false) => q.order(roadmaps::name.asc()),
            ("name", true) => q.order(roadmaps::name.desc()),
            ("created_at", false) => q.order(roadmaps::created_at.asc()),
            ("created_at", true) => q.order(roadmaps::created_at.desc()),
            _ => q.order(roadmaps::id.asc()),
        },
        None => q.order(roadmaps::id.asc()),
    }
}

impl RoadmapReader for DieselRepository {
    fn get_roadmap_by_id(&self, id: i32) -> RepositoryResult<Option<Roadmap>> {
        use crate::models::roadmap::Roadmap as DbRoadmap;

        let mut conn = self.conn()?;
        let roadmap = roadmaps::table
            .find(id)
            .first::<DbRoadmap>(&mut conn)
            .optional()?;

        Ok(roadmap.map(Into::into))
    }

    fn list_roadmaps(&self, query: &RoadmapListQuery) -> RepositoryResult<ListPage<Roadmap>> {
        use crate::models::roadmap::Roadmap as DbRoadmap;

        let mut conn = self.conn()?;

        let total: i64 = filtered(query).count().get_result(&mut conn)?;

        let items = sorted(filtered(query), query.sort.as_ref())
            .limit(query.limit())
            .offset(query.offset())
            .load::<DbRoadmap>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListPage::new(items, total as usize))
    }

    fn list_roadmap_items(&self, roadmap_id: i32) -> RepositoryResult<Vec<RoadmapItem>> {
        use crate::models::roadmap::RoadmapItem as DbRoadmapItem;

        let mut conn = self.conn()?;
        let items = roadmap_items::table
            .filter(roadmap_items::roadmap_id.eq(roadmap_id))
            .order((roadmap_items::semester_no.asc(), roadmap_items::id.asc()))
            .load::<DbRoadmapItem>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl RoadmapWriter for DieselRepository {
    fn create_roadmap(&self, new: &NewRoadmap) -> RepositoryResult<Roadmap> {
        use crate::models::roadmap::{NewRoadmap as DbNewRoadmap, Roadmap as DbRoadmap};

        let mut conn = self.conn()?;
        let insertable: DbNewRoadmap = new.into();
        let created = diesel::insert_into(roadmaps::table)
            .values(&insertable)
            .get_result::<DbRoadmap>(&mut conn)?;

        Ok(created.into())
    }

    fn update_roadmap(&self, id: i32, updates: &UpdateRoadmap) -> RepositoryResult<Roadmap> {
        use crate::models::roadmap::{Roadmap as DbRoadmap, UpdateRoadmap as DbUpdateRoadmap};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateRoadmap = updates.into();
        let updated = diesel::update(roadmaps::table.find(id))
            .set((&db_updates, roadmaps::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbRoadmap>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_roadmap_active(&self, id: i32, active: bool) -> RepositoryResult<Roadmap> {
        use crate::models::roadmap::Roadmap as DbRoadmap;

        let mut conn = self.conn()?;
        let updated = diesel::update(roadmaps::table.find(id))
            .set((
                roadmaps::is_active.eq(active),
                roadmaps::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbRoadmap>(&mut conn)?;

        Ok(updated.into())
    }

    fn replace_roadmap_items(
        &self,
        roadmap_id: i32,
        items: &[NewRoadmapItem],
    ) -> RepositoryResult<usize> {
        use crate::models::roadmap::NewRoadmapItem as DbNewRoadmapItem;

        let mut conn = self.conn()?;

        conn.transaction(|conn| {
            diesel::delete(roadmap_items::table.filter(roadmap_items::roadmap_id.eq(roadmap_id)))
                .execute(conn)?;

            let insertables: Vec<DbNewRoadmapItem> = items
                .iter()
                .map(|item| DbNewRoadmapItem {
                    roadmap_id,
                    course_id: item.course_id,
                    semester_no: item.semester_no,
                })
                .collect();

            diesel::insert_into(roadmap_items::table)
                .values(&insertables)
                .execute(conn)
        })
        .map_err(Into::into)
    }

    fn delete_roadmap(&self, id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        conn.transaction(|conn| {
            diesel::delete(roadmap_items::table.filter(roadmap_items::roadmap_id.eq(id)))
                .execute(conn)?;
            diesel::delete(roadmaps::table.find(id)).execute(conn)
        })?;

        Ok(())
    }
}
