//! Diesel repositories for the academic catalogue entities.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::catalog::{
    Course, Department, Major, NewCourse, NewDepartment, NewMajor, NewSemester, Semester,
    UpdateCourse, UpdateDepartment, UpdateMajor, UpdateSemester,
};
use crate::listing::{ListPage, Sort};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CourseListQuery, CourseReader, CourseWriter, DepartmentListQuery, DepartmentReader,
    DepartmentWriter, DieselRepository, MajorListQuery, MajorReader, MajorWriter,
    SemesterListQuery, SemesterReader, SemesterWriter,
};
use crate::schema::{courses, departments, majors, semesters};

fn filtered_departments(query: &DepartmentListQuery) -> departments::BoxedQuery<'_, Sqlite> {
    let mut q = departments::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search_term() {
        let pattern = format!("%{term}%");
        q = q.filter(
            departments::name
                .like(pattern.clone())
                .or(departments::code.like(pattern)),
        );
    }
    if let Some(is_active) = query.filters.is_active {
        q = q.filter(departments::is_active.eq(is_active));
    }

    q
}

fn sorted_departments<'a>(
    q: departments::BoxedQuery<'a, Sqlite>,
    sort: Option<&Sort>,
) -> departments::BoxedQuery<'a, Sqlite> {
    match sort {
        Some(sort) => match (sort.key.as_str(), sort.descending) {
            ("name", false) => q.order(departments::name.asc()),
            ("name", true) => q.order(departments::name.desc()),
            ("code", false) => q.order(departments::code.asc()),
            ("code", true) => q.order(departments::code.desc()),
            ("created_at", false) => q.order(departments::created_at.asc()),
            ("created_at", true) => q.order(departments::created_at.desc()),
            _ => q.order(departments::id.asc()),
        },
        None => q.order(departments::id.asc()),
    }
}

impl DepartmentReader for DieselRepository {
    fn get_department_by_id(&self, id: i32) -> RepositoryResult<Option<Department>> {
        use crate::models::catalog::Department as DbDepartment;

        let mut conn = self.conn()?;
        let department = departments::table
            .find(id)
            .first::<DbDepartment>(&mut conn)
            .optional()?;

        Ok(department.map(Into::into))
    }

    fn list_departments(
        &self,
        query: &DepartmentListQuery,
    ) -> RepositoryResult<ListPage<Department>> {
        use crate::models::catalog::Department as DbDepartment;

        let mut conn = self.conn()?;

        let total: i64 = filtered_departments(query).count().get_result(&mut conn)?;

        let items = sorted_departments(filtered_departments(query), query.sort.as_ref())
            .limit(query.limit())
            .offset(query.offset())
            .load::<DbDepartment>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListPage::new(items, total as usize))
    }
}

impl DepartmentWriter for DieselRepository {
    fn create_department(&self, new: &NewDepartment) -> RepositoryResult<Department> {
        use crate::models::catalog::{
            Department as DbDepartment, NewDepartment as DbNewDepartment,
        };

        let mut conn = self.conn()?;
        let insertable: DbNewDepartment = new.into();
        let created = diesel::insert_into(departments::table)
            .values(&insertable)
            .get_result::<DbDepartment>(&mut conn)?;

        Ok(created.into())
    }

    fn update_department(
        &self,
        id: i32,
        updates: &UpdateDepartment,
    ) -> RepositoryResult<Department> {
        use crate::models::catalog::{
            Department as DbDepartment, UpdateDepartment as DbUpdateDepartment,
        };

        let mut conn = self.conn()?;
        let db_updates: DbUpdateDepartment = updates.into();
        let updated = diesel::update(departments::table.find(id))
            .set((&db_updates, departments::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbDepartment>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_department_active(&self, id: i32, active: bool) -> RepositoryResult<Department> {
        use crate::models::catalog::Department as DbDepartment;

        let mut conn = self.conn()?;
        let updated = diesel::update(departments::table.find(id))
            .set((
                departments::is_active.eq(active),
                departments::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbDepartment>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_department(&self, id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::delete(departments::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}

fn filtered_majors(query: &MajorListQuery) -> majors::BoxedQuery<'_, Sqlite> {
    let mut q = majors::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search_term() {
        let pattern = format!("%{term}%");
        q = q.filter(majors::name.like(pattern.clone()).or(majors::code.like(pattern)));
    }
    if let Some(department_id) = query.filters.department_id {
        q = q.filter(majors::department_id.eq(department_id));
    }
    if let Some(is_active) = query.filters.is_active {
        q = q.filter(majors::is_active.eq(is_active));
    }

    q
}

fn sorted_majors<'a>(
    q: majors::BoxedQuery<'a, Sqlite>,
    sort: Option<&Sort>,
) -> majors::BoxedQuery<'a, Sqlite> {
    match sort {
        Some(sort) => match (sort.key.as_str(), sort.descending) {
            ("name", false) => q.order(majors::name.asc()),
            ("name", true) => q.order(majors::name.desc()),
            ("code", false) => q.order(majors::code.asc()),
            ("code", true) => q.order(majors::code.desc()),
            ("created_at", false) => q.order(majors::created_at.asc()),
            ("created_at", true) => q.order(majors::created_at.desc()),
            _ => q.order(majors::id.asc()),
        },
        None => q.order(majors::id.asc()),
    }
}

impl MajorReader for DieselRepository {
    fn get_major_by_id(&self, id: i32) -> RepositoryResult<Option<Major>> {
        use crate::models::catalog::Major as DbMajor;

        let mut conn = self.conn()?;
        let major = majors::table.find(id).first::<DbMajor>(&mut conn).optional()?;

        Ok(major.map(Into::into))
    }

    fn list_majors(&self, query: &MajorListQuery) -> RepositoryResult<ListPage<Major>> {
        use crate::models::catalog::Major as DbMajor;

        let mut conn = self.conn()?;

        let total: i64 = filtered_majors(query).count().get_result(&mut conn)?;

        let items = sorted_majors(filtered_majors(query), query.sort.as_ref())
            .limit(query.limit())
            .offset(query.offset())
            .load::<DbMajor>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListPage::new(items, total as usize))
    }
}

impl MajorWriter for DieselRepository {
    fn create_major(&self, new: &NewMajor) -> RepositoryResult<Major> {
        use crate::models::catalog::{Major as DbMajor, NewMajor as DbNewMajor};

        let mut conn = self.conn()?;
        let insertable: DbNewMajor = new.into();
        let created = diesel::insert_into(majors::table)
            .values(&insertable)
            .get_result::<DbMajor>(&mut conn)?;

        Ok(created.into())
    }

    fn update_major(&self, id: i32, updates: &UpdateMajor) -> RepositoryResult<Major> {
        use crate::models::catalog::{Major as DbMajor, UpdateMajor as DbUpdateMajor};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateMajor = updates.into();
        let updated = diesel::update(majors::table.find(id))
            .set((&db_updates, majors::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbMajor>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_major_active(&self, id: i32, active: bool) -> RepositoryResult<Major> {
        use crate::models::catalog::Major as DbMajor;

        let mut conn = self.conn()?;
        let updated = diesel::update(majors::table.find(id))
            .set((
                majors::is_active.eq(active),
                majors::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbMajor>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_major(&self, id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::delete(majors::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}

fn filtered_semesters(query: &SemesterListQuery) -> semesters::BoxedQuery<'_, Sqlite> {
    let mut q = semesters::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search_term() {
        let pattern = format!("%{term}%");
        q = q.filter(
            semesters::name
                .like(pattern.clone())
                .or(semesters::code.like(pattern)),
        );
    }
    if let Some(is_active) = query.filters.is_active {
        q = q.filter(semesters::is_active.eq(is_active));
    }

    q
}

fn sorted_semesters<'a>(
    q: semesters::BoxedQuery<'a, Sqlite>,
    sort: Option<&Sort>,
) -> semesters::BoxedQuery<'a, Sqlite> {
    match sort {
        Some(sort) => match (sort.key.as_str(), sort.descending) {
            ("name", false) => q.order(semesters::name.asc()),
            ("name", true) => q.order(semesters::name.desc()),
            ("code", false) => q.order(semesters::code.asc()),
            ("code", true) => q.order(semesters::code.desc()),
            ("starts_on", false) => q.order(semesters::starts_on.asc()),
            ("starts_on", true) => q.order(semesters::starts_on.desc()),
            _ => q.order(semesters::id.asc()),
        },
        None => q.order(semesters::id.asc()),
    }
}

impl SemesterReader for DieselRepository {
    fn get_semester_by_id(&self, id: i32) -> RepositoryResult<Option<Semester>> {
        use crate::models::catalog::Semester as DbSemester;

        let mut conn = self.conn()?;
        let semester = semesters::table
            .find(id)
            .first::<DbSemester>(&mut conn)
            .optional()?;

        Ok(semester.map(Into::into))
    }

    fn list_semesters(&self, query: &SemesterListQuery) -> RepositoryResult<ListPage<Semester>> {
        use crate::models::catalog::Semester as DbSemester;

        let mut conn = self.conn()?;

        let total: i64 = filtered_semesters(query).count().get_result(&mut conn)?;

        let items = sorted_semesters(filtered_semesters(query), query.sort.as_ref())
            .limit(query.limit())
            .offset(query.offset())
            .load::<DbSemester>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListPage::new(items, total as usize))
    }
}

impl SemesterWriter for DieselRepository {
    fn create_semester(&self, new: &NewSemester) -> RepositoryResult<Semester> {
        use crate::models::catalog::{NewSemester as DbNewSemester, Semester as DbSemester};

        let mut conn = self.conn()?;
        let insertable: DbNewSemester = new.into();
        let created = diesel::insert_into(semesters::table)
            .values(&insertable)
            .get_result::<DbSemester>(&mut conn)?;

        Ok(created.into())
    }

    fn update_semester(&self, id: i32, updates: &UpdateSemester) -> RepositoryResult<Semester> {
        use crate::models::catalog::{Semester as DbSemester, UpdateSemester as DbUpdateSemester};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateSemester = updates.into();
        let updated = diesel::update(semesters::table.find(id))
            .set((&db_updates, semesters::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbSemester>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_semester_active(&self, id: i32, active: bool) -> RepositoryResult<Semester> {
        use crate::models::catalog::Semester as DbSemester;

        let mut conn = self.conn()?;
        let updated = diesel::update(semesters::table.find(id))
            .set((
                semesters::is_active.eq(active),
                semesters::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbSemester>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_semester(&self, id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::delete(semesters::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}

fn filtered_courses(query: &CourseListQuery) -> courses::BoxedQuery<'_, Sqlite> {
    let mut q = courses::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search_term() {
        let pattern = format!("%{term}%");
        q = q.filter(
            courses::name
                .like(pattern.clone())
                .or(courses::code.like(pattern)),
        );
    }
    if let Some(department_id) = query.filters.department_id {
        q = q.filter(courses::department_id.eq(department_id));
    }
    if let Some(credits) = query.filters.credits {
        q = q.filter(courses::credits.eq(credits));
    }
    if let Some(is_active) = query.filters.is_active {
        q = q.filter(courses::is_active.eq(is_active));
    }

    q
}

fn sorted_courses<'a>(
    q: courses::BoxedQuery<'a, Sqlite>,
    sort: Option<&Sort>,
) -> courses::BoxedQuery<'a, Sqlite> {
    match sort {
        Some(sort) => match (sort.key.as_str(), sort.descending) {
            ("name", false) => q.order(courses::name.asc()),
            ("name", true) => q.order(courses::name.desc()),
            ("code", false) => q.order(courses::code.asc()),
            ("code", true) => q.order(courses::code.desc()),
            ("credits", false) => q.order(courses::credits.asc()),
            ("credits", true) => q.order(courses::credits.desc()),
            ("created_at", false) => q.order(courses::created_at.asc()),
            ("created_at", true) => q.order(courses::created_at.desc()),
            _ => q.order(courses::id.asc()),
        },
        None => q.order(courses::id.asc()),
    }
}

impl CourseReader for DieselRepository {
    fn get_course_by_id(&self, id: i32) -> RepositoryResult<Option<Course>> {
        use crate::models::catalog::Course as DbCourse;

        let mut conn = self.conn()?;
        let course = courses::table.find(id).first::<DbCourse>(&mut conn).optional()?;

        Ok(course.map(Into::into))
    }

    fn list_courses(&self, query: &CourseListQuery) -> RepositoryResult<ListPage<Course>> {
        use crate::models::catalog::Course as DbCourse;

        let mut conn = self.conn()?;

        let total: i64 = filtered_courses(query).count().get_result(&mut conn)?;

        let items = sorted_courses(filtered_courses(query), query.sort.as_ref())
            .limit(query.limit())
            .offset(query.offset())
            .load::<DbCourse>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListPage::new(items, total as usize))
    }
}

impl CourseWriter for DieselRepository {
    fn create_course(&self, new: &NewCourse) -> RepositoryResult<Course> {
        use crate::models::catalog::{Course as DbCourse, NewCourse as DbNewCourse};

        let mut conn = self.conn()?;
        let insertable: DbNewCourse = new.into();
        let created = diesel::insert_into(courses::table)
            .values(&insertable)
            .get_result::<DbCourse>(&mut conn)?;

        Ok(created.into())
    }

    fn update_course(&self, id: i32, updates: &UpdateCourse) -> RepositoryResult<Course> {
        use crate::models::catalog::{Course as DbCourse, UpdateCourse as DbUpdateCourse};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateCourse = updates.into();
        let updated = diesel::update(courses::table.find(id))
            .set((&db_updates, courses::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbCourse>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_course_active(&self, id: i32, active: bool) -> RepositoryResult<Course> {
        use crate::models::catalog::Course as DbCourse;

        let mut conn = self.conn()?;
        let updated = diesel::update(courses::table.find(id))
            .set((
                courses::is_active.eq(active),
                courses::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbCourse>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_course(&self, id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::delete(courses::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}
