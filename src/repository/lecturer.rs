use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::lecturer::{Lecturer, NewLecturer, UpdateLecturer};
use crate::listing::{ListPage, Sort};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, LecturerListQuery, LecturerReader, LecturerWriter};
use crate::schema::lecturers;

fn filtered(query: &LecturerListQuery) -> lecturers::BoxedQuery<'_, Sqlite> {
    let mut q = lecturers::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search_term() {
        let pattern = format!("%{term}%");
        q = q.filter(
            lecturers::name
                .like(pattern.clone())
                .or(lecturers::email.like(pattern)),
        );
    }
    if let Some(department_id) = query.filters.department_id {
        q = q.filter(lecturers::department_id.eq(department_id));
    }
    if let Some(is_active) = query.filters.is_active {
        q = q.filter(lecturers::is_active.eq(is_active));
    }

    q
}

fn sorted<'a>(
    q: lecturers::BoxedQuery<'a, Sqlite>,
    sort: Option<&Sort>,
) -> lecturers::BoxedQuery<'a, Sqlite> {
    match sort {
        Some(sort) => match (sort.key.as_str(), sort.descending) {
            ("name", false) => q.order(lecturers::name.asc()),
            ("name", true) => q.order(lecturers::name.desc()),
            ("email", false) => q.order(lecturers::email.asc()),
            ("email", true) => q.order(lecturers::email.desc()),
            ("created_at", false) => q.order(lecturers::created_at.asc()),
            ("created_at", true) => q.order(lecturers::created_at.desc()),
            _ => q.order(lecturers::id.asc()),
        },
        None => q.order(lecturers::id.asc()),
    }
}

impl LecturerReader for DieselRepository {
    fn get_lecturer_by_id(&self, id: i32) -> RepositoryResult<Option<Lecturer>> {
        use crate::models::lecturer::Lecturer as DbLecturer;

        let mut conn = self.conn()?;
        let lecturer = lecturers::table
            .find(id)
            .first::<DbLecturer>(&mut conn)
            .optional()?;

        Ok(lecturer.map(Into::into))
    }

    fn list_lecturers(&self, query: &LecturerListQuery) -> RepositoryResult<ListPage<Lecturer>> {
        use crate::models::lecturer::Lecturer as DbLecturer;

        let mut conn = self.conn()?;

        let total: i64 = filtered(query).count().get_result(&mut conn)?;

        let items = sorted(filtered(query), query.sort.as_ref())
            .limit(query.limit())
            .offset(query.offset())
            .load::<DbLecturer>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListPage::new(items, total as usize))
    }
}

impl LecturerWriter for DieselRepository {
    fn create_lecturer(&self, new: &NewLecturer) -> RepositoryResult<Lecturer> {
        use crate::models::lecturer::{Lecturer as DbLecturer, NewLecturer as DbNewLecturer};

        let mut conn = self.conn()?;
        let insertable: DbNewLecturer = new.into();
        let created = diesel::insert_into(lecturers::table)
            .values(&insertable)
            .get_result::<DbLecturer>(&mut conn)?;

        Ok(created.into())
    }

    fn update_lecturer(&self, id: i32, updates: &UpdateLecturer) -> RepositoryResult<Lecturer> {
        use crate::models::lecturer::{
            Lecturer as DbLecturer, UpdateLecturer as DbUpdateLecturer,
        };

        let mut conn = self.conn()?;
        let db_updates: DbUpdateLecturer = updates.into();
        let updated = diesel::update(lecturers::table.find(id))
            .set((&db_updates, lecturers::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbLecturer>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_lecturer_active(&self, id: i32, active: bool) -> RepositoryResult<Lecturer> {
        use crate::models::lecturer::Lecturer as DbLecturer;

        let mut conn = self.conn()?;
        let updated = diesel::update(lecturers::table.find(id))
            .set((
                lecturers::is_active.eq(active),
                lecturers::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbLecturer>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_lecturer(&self, id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::delete(lecturers::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}
