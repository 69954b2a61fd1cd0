use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::enrollment::{Enrollment, EnrollmentStatus, NewEnrollment};
use crate::listing::{ListPage, Sort};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, EnrollmentListQuery, EnrollmentReader, EnrollmentWriter,
};
use crate::schema::enrollments;

fn filtered(query: &EnrollmentListQuery) -> enrollments::BoxedQuery<'_, Sqlite> {
    let mut q = enrollments::table.into_boxed::<Sqlite>();

    // Enrollments have no free-text columns; the search box is a no-op here
    // and the structured filters do the narrowing.
    if let Some(student_id) = query.filters.student_id {
        q = q.filter(enrollments::student_id.eq(student_id));
    }
    if let Some(course_id) = query.filters.course_id {
        q = q.filter(enrollments::course_id.eq(course_id));
    }
    if let Some(semester_id) = query.filters.semester_id {
        q = q.filter(enrollments::semester_id.eq(semester_id));
    }
    if !query.filters.statuses.is_empty() {
        let statuses: Vec<String> = query
            .filters
            .statuses
            .iter()
            .map(ToString::to_string)
            .collect();
        q = q.filter(enrollments::status.eq_any(statuses));
    }

    q
}

fn sorted<'a>(
    q: enrollments::BoxedQuery<'a, Sqlite>,
    sort: Option<&Sort>,
) -> enrollments::BoxedQuery<'a, Sqlite> {
    match sort {
        Some(sort) => match (sort.key.as_str(), sort.descending) {
            ("enrolled_at", false) => q.order(enrollments::enrolled_at.asc()),
            ("enrolled_at", true) => q.order(enrollments::enrolled_at.desc()),
            ("status", false) => q.order(enrollments::status.asc()),
            ("status", true) => q.order(enrollments::status.desc()),
            _ => q.order(enrollments::id.asc()),
        },
        None => q.order(enrollments::id.asc()),
    }
}

fn into_domain(row: crate::models::enrollment::Enrollment) -> RepositoryResult<Enrollment> {
    Enrollment::try_from(row).map_err(RepositoryError::ValidationError)
}

impl EnrollmentReader for DieselRepository {
    fn get_enrollment_by_id(&self, id: i32) -> RepositoryResult<Option<Enrollment>> {
        use crate::models::enrollment::Enrollment as DbEnrollment;

        let mut conn = self.conn()?;
        let enrollment = enrollments::table
            .find(id)
            .first::<DbEnrollment>(&mut conn)
            .optional()?;

        enrollment.map(into_domain).transpose()
    }

    fn list_enrollments(
        &self,
        query: &EnrollmentListQuery,
    ) -> RepositoryResult<ListPage<Enrollment>> {
        use crate::models::enrollment::Enrollment as DbEnrollment;

        let mut conn = self.conn()?;

        let total: i64 = filtered(query).count().get_result(&mut conn)?;

        let items = sorted(filtered(query), query.sort.as_ref())
            .limit(query.limit())
            .offset(query.offset())
            .load::<DbEnrollment>(&mut conn)?
            .into_iter()
            .map(into_domain)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(ListPage::new(items, total as usize))
    }
}

impl EnrollmentWriter for DieselRepository {
    fn create_enrollment(&self, new: &NewEnrollment) -> RepositoryResult<Enrollment> {
        use crate::models::enrollment::{
            Enrollment as DbEnrollment, NewEnrollment as DbNewEnrollment,
        };

        let mut conn = self.conn()?;
        let insertable: DbNewEnrollment = new.into();
        let created = diesel::insert_into(enrollments::table)
            .values(&insertable)
            .get_result::<DbEnrollment>(&mut conn)?;

        into_domain(created)
    }

    fn update_enrollment_status(
        &self,
        id: i32,
        status: EnrollmentStatus,
    ) -> RepositoryResult<Enrollment> {
        use crate::models::enrollment::Enrollment as DbEnrollment;

        let mut conn = self.conn()?;
        let updated = diesel::update(enrollments::table.find(id))
            .set(enrollments::status.eq(status.to_string()))
            .get_result::<DbEnrollment>(&mut conn)?;

        into_domain(updated)
    }

    fn delete_enrollment(&self, id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::delete(enrollments::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}
