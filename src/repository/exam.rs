use chrono::NaiveTime;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::exam::{Exam, NewExam, UpdateExam};
use crate::listing::{ListPage, Sort};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ExamListQuery, ExamReader, ExamWriter};
use crate::schema::exams;

fn filtered(query: &ExamListQuery) -> exams::BoxedQuery<'_, Sqlite> {
    let mut q = exams::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search_term() {
        let pattern = format!("%{term}%");
        q = q.filter(exams::name.like(pattern));
    }
    if let Some(course_id) = query.filters.course_id {
        q = q.filter(exams::course_id.eq(course_id));
    }
    if let Some(semester_id) = query.filters.semester_id {
        q = q.filter(exams::semester_id.eq(semester_id));
    }
    if let Some(room_id) = query.filters.room_id {
        q = q.filter(exams::room_id.eq(room_id));
    }
    if let Some(from) = query.filters.date_from {
        q = q.filter(exams::starts_at.ge(from.and_time(NaiveTime::MIN)));
    }
    if let Some(to) = query.filters.date_to {
        // Inclusive end date: everything strictly before the next midnight.
        if let Some(next) = to.succ_opt() {
            q = q.filter(exams::starts_at.lt(next.and_time(NaiveTime::MIN)));
        }
    }
    if let Some(is_active) = query.filters.is_active {
        q = q.filter(exams::is_active.eq(is_active));
    }

    q
}

fn sorted<'a>(
    q: exams::BoxedQuery<'a, Sqlite>,
    sort: Option<&Sort>,
) -> exams::BoxedQuery<'a, Sqlite> {
    match sort {
        Some(sort) => match (sort.key.as_str(), sort.descending) {
            ("name", false) => q.order(exams::name.asc()),
            ("name", true) => q.order(exams::name.desc()),
            ("starts_at", false) => q.order(exams::starts_at.asc()),
            ("starts_at", true) => q.order(exams::starts_at.desc()),
            ("duration_minutes", false) => q.order(exams::duration_minutes.asc()),
            ("duration_minutes", true) => q.order(exams::duration_minutes.desc()),
            _ => q.order(exams::id.asc()),
        },
        None => q.order(exams::id.asc()),
    }
}

impl ExamReader for DieselRepository {
    fn get_exam_by_id(&self, id: i32) -> RepositoryResult<Option<Exam>> {
        use crate::models::exam::Exam as DbExam;

        let mut conn = self.conn()?;
        let exam = exams::table.find(id).first::<DbExam>(&mut conn).optional()?;

        Ok(exam.map(Into::into))
    }

    fn list_exams(&self, query: &ExamListQuery) -> RepositoryResult<ListPage<Exam>> {
        use crate::models::exam::Exam as DbExam;

        let mut conn = self.conn()?;

        let total: i64 = filtered(query).count().get_result(&mut conn)?;

        let items = sorted(filtered(query), query.sort.as_ref())
            .limit(query.limit())
            .offset(query.offset())
            .load::<DbExam>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListPage::new(items, total as usize))
    }
}

impl ExamWriter for DieselRepository {
    fn create_exam(&self, new: &NewExam) -> RepositoryResult<Exam> {
        use crate::models::exam::{Exam as DbExam, NewExam as DbNewExam};

        let mut conn = self.conn()?;
        let insertable: DbNewExam = new.into();
        let created = diesel::insert_into(exams::table)
            .values(&insertable)
            .get_result::<DbExam>(&mut conn)?;

        Ok(created.into())
    }

    fn update_exam(&self, id: i32, updates: &UpdateExam) -> RepositoryResult<Exam> {
        use crate::models::exam::{Exam as DbExam, UpdateExam as DbUpdateExam};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateExam = updates.into();
        let updated = diesel::update(exams::table.find(id))
            .set((&db_updates, exams::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbExam>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_exam_active(&self, id: i32, active: bool) -> RepositoryResult<Exam> {
        use crate::models::exam::Exam as DbExam;

        let mut conn = self.conn()?;
        let updated = diesel::update(exams::table.find(id))
            .set((
                exams::is_active.eq(active),
                exams::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbExam>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_exam(&self, id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::delete(exams::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}
