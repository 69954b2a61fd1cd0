use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::student::{NewStudent, Student, UpdateStudent};
use crate::listing::{ListPage, Sort};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, StudentListQuery, StudentReader, StudentWriter};
use crate::schema::students;

type BoxedStudents<'a> = students::BoxedQuery<'a, Sqlite>;

/// Build the filtered (but unsorted, unpaged) query once for rows and once
/// for the authoritative count.
fn filtered(query: &StudentListQuery) -> BoxedStudents<'_> {
    let mut q = students::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search_term() {
        let pattern = format!("%{term}%");
        q = q.filter(
            students::name
                .like(pattern.clone())
                .or(students::email.like(pattern.clone()))
                .or(students::student_code.like(pattern)),
        );
    }
    if let Some(major_id) = query.filters.major_id {
        q = q.filter(students::major_id.eq(major_id));
    }
    if let Some(year) = query.filters.enrollment_year {
        q = q.filter(students::enrollment_year.eq(year));
    }
    if let Some(is_active) = query.filters.is_active {
        q = q.filter(students::is_active.eq(is_active));
    }

    q
}

fn sorted<'a>(q: BoxedStudents<'a>, sort: Option<&Sort>) -> BoxedStudents<'a> {
    match sort {
        Some(sort) => match (sort.key.as_str(), sort.descending) {
            ("name", false) => q.order(students::name.asc()),
            ("name", true) => q.order(students::name.desc()),
            ("student_code", false) => q.order(students::student_code.asc()),
            ("student_code", true) => q.order(students::student_code.desc()),
            ("email", false) => q.order(students::email.asc()),
            ("email", true) => q.order(students::email.desc()),
            ("enrollment_year", false) => q.order(students::enrollment_year.asc()),
            ("enrollment_year", true) => q.order(students::enrollment_year.desc()),
            ("created_at", false) => q.order(students::created_at.asc()),
            ("created_at", true) => q.order(students::created_at.desc()),
            // Unknown sort keys fall back to the stable default order.
            _ => q.order(students::id.asc()),
        },
        None => q.order(students::id.asc()),
    }
}

impl StudentReader for DieselRepository {
    fn get_student_by_id(&self, id: i32) -> RepositoryResult<Option<Student>> {
        use crate::models::student::Student as DbStudent;

        let mut conn = self.conn()?;
        let student = students::table
            .find(id)
            .first::<DbStudent>(&mut conn)
            .optional()?;

        Ok(student.map(Into::into))
    }

    fn get_student_by_code(&self, code: &str) -> RepositoryResult<Option<Student>> {
        use crate::models::student::Student as DbStudent;

        let mut conn = self.conn()?;
        let student = students::table
            .filter(students::student_code.eq(code))
            .first::<DbStudent>(&mut conn)
            .optional()?;

        Ok(student.map(Into::into))
    }

    fn list_students(&self, query: &StudentListQuery) -> RepositoryResult<ListPage<Student>> {
        use crate::models::student::Student as DbStudent;

        let mut conn = self.conn()?;

        let total: i64 = filtered(query).count().get_result(&mut conn)?;

        let items = sorted(filtered(query), query.sort.as_ref())
            .limit(query.limit())
            .offset(query.offset())
            .load::<DbStudent>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListPage::new(items, total as usize))
    }
}

impl StudentWriter for DieselRepository {
    fn create_students(&self, new: &[NewStudent]) -> RepositoryResult<usize> {
        use crate::models::student::NewStudent as DbNewStudent;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewStudent> = new.iter().map(Into::into).collect();
        let affected = diesel::insert_into(students::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_student(&self, id: i32, updates: &UpdateStudent) -> RepositoryResult<Student> {
        use crate::models::student::{Student as DbStudent, UpdateStudent as DbUpdateStudent};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateStudent = updates.into();

        let updated = diesel::update(students::table.find(id))
            .set((&db_updates, students::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbStudent>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_student_active(&self, id: i32, active: bool) -> RepositoryResult<Student> {
        use crate::models::student::Student as DbStudent;

        let mut conn = self.conn()?;
        let updated = diesel::update(students::table.find(id))
            .set((
                students::is_active.eq(active),
                students::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbStudent>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_student(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::enrollments;

        let mut conn = self.conn()?;

        // A student's enrollments have no life of their own.
        diesel::delete(enrollments::table.filter(enrollments::student_id.eq(id)))
            .execute(&mut conn)?;
        diesel::delete(students::table.find(id)).execute(&mut conn)?;

        Ok(())
    }
}
