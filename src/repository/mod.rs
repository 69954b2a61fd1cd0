//! Repository traits and the typed list-query shapes consumed by them.
//!
//! Every entity list goes through [`ListQuery`] parameterized with the
//! entity's filter struct below; repositories translate that one shape into
//! SQL (search, filters, sort, limit/offset plus an authoritative count).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{
    Course, Department, Major, NewCourse, NewDepartment, NewMajor, NewSemester, Semester,
    UpdateCourse, UpdateDepartment, UpdateMajor, UpdateSemester,
};
use crate::domain::enrollment::{Enrollment, EnrollmentStatus, NewEnrollment};
use crate::domain::exam::{Exam, NewExam, UpdateExam};
use crate::domain::lecturer::{Lecturer, NewLecturer, UpdateLecturer};
use crate::domain::location::{
    Building, Floor, NewBuilding, NewFloor, NewRoom, Room, UpdateBuilding, UpdateFloor,
    UpdateRoom,
};
use crate::domain::roadmap::{NewRoadmap, NewRoadmapItem, Roadmap, RoadmapItem, UpdateRoadmap};
use crate::domain::student::{NewStudent, Student, UpdateStudent};
use crate::db::DbPool;
use crate::listing::{ListPage, ListQuery};
use crate::repository::errors::RepositoryResult;

pub mod catalog;
pub mod enrollment;
pub mod errors;
pub mod exam;
pub mod lecturer;
pub mod location;
#[cfg(test)]
pub mod mock;
pub mod roadmap;
pub mod student;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentFilters {
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MajorFilters {
    pub department_id: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemesterFilters {
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseFilters {
    pub department_id: Option<i32>,
    pub credits: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingFilters {
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorFilters {
    pub building_id: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomFilters {
    pub floor_id: Option<i32>,
    pub min_capacity: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LecturerFilters {
    pub department_id: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentFilters {
    pub major_id: Option<i32>,
    pub enrollment_year: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentFilters {
    pub student_id: Option<i32>,
    pub course_id: Option<i32>,
    pub semester_id: Option<i32>,
    /// Multi-select; empty means "all statuses".
    #[serde(default)]
    pub statuses: Vec<EnrollmentStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamFilters {
    pub course_id: Option<i32>,
    pub semester_id: Option<i32>,
    pub room_id: Option<i32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapFilters {
    pub major_id: Option<i32>,
    pub is_active: Option<bool>,
}

pub type DepartmentListQuery = ListQuery<DepartmentFilters>;
pub type MajorListQuery = ListQuery<MajorFilters>;
pub type SemesterListQuery = ListQuery<SemesterFilters>;
pub type CourseListQuery = ListQuery<CourseFilters>;
pub type BuildingListQuery = ListQuery<BuildingFilters>;
pub type FloorListQuery = ListQuery<FloorFilters>;
pub type RoomListQuery = ListQuery<RoomFilters>;
pub type LecturerListQuery = ListQuery<LecturerFilters>;
pub type StudentListQuery = ListQuery<StudentFilters>;
pub type EnrollmentListQuery = ListQuery<EnrollmentFilters>;
pub type ExamListQuery = ListQuery<ExamFilters>;
pub type RoadmapListQuery = ListQuery<RoadmapFilters>;

pub trait DepartmentReader {
    fn get_department_by_id(&self, id: i32) -> RepositoryResult<Option<Department>>;
    fn list_departments(&self, query: &DepartmentListQuery) -> RepositoryResult<ListPage<Department>>;
}

pub trait DepartmentWriter {
    fn create_department(&self, new: &NewDepartment) -> RepositoryResult<Department>;
    fn update_department(&self, id: i32, updates: &UpdateDepartment) -> RepositoryResult<Department>;
    fn set_department_active(&self, id: i32, active: bool) -> RepositoryResult<Department>;
    fn delete_department(&self, id: i32) -> RepositoryResult<()>;
}

pub trait MajorReader {
    fn get_major_by_id(&self, id: i32) -> RepositoryResult<Option<Major>>;
    fn list_majors(&self, query: &MajorListQuery) -> RepositoryResult<ListPage<Major>>;
}

pub trait MajorWriter {
    fn create_major(&self, new: &NewMajor) -> RepositoryResult<Major>;
    fn update_major(&self, id: i32, updates: &UpdateMajor) -> RepositoryResult<Major>;
    fn set_major_active(&self, id: i32, active: bool) -> RepositoryResult<Major>;
    fn delete_major(&self, id: i32) -> RepositoryResult<()>;
}

pub trait SemesterReader {
    fn get_semester_by_id(&self, id: i32) -> RepositoryResult<Option<Semester>>;
    fn list_semesters(&self, query: &SemesterListQuery) -> RepositoryResult<ListPage<Semester>>;
}

pub trait SemesterWriter {
    fn create_semester(&self, new: &NewSemester) -> RepositoryResult<Semester>;
    fn update_semester(&self, id: i32, updates: &UpdateSemester) -> RepositoryResult<Semester>;
    fn set_semester_active(&self, id: i32, active: bool) -> RepositoryResult<Semester>;
    fn delete_semester(&self, id: i32) -> RepositoryResult<()>;
}

pub trait CourseReader {
    fn get_course_by_id(&self, id: i32) -> RepositoryResult<Option<Course>>;
    fn list_courses(&self, query: &CourseListQuery) -> RepositoryResult<ListPage<Course>>;
}

pub trait CourseWriter {
    fn create_course(&self, new: &NewCourse) -> RepositoryResult<Course>;
    fn update_course(&self, id: i32, updates: &UpdateCourse) -> RepositoryResult<Course>;
    fn set_course_active(&self, id: i32, active: bool) -> RepositoryResult<Course>;
    fn delete_course(&self, id: i32) -> RepositoryResult<()>;
}

pub trait BuildingReader {
    fn get_building_by_id(&self, id: i32) -> RepositoryResult<Option<Building>>;
    fn list_buildings(&self, query: &BuildingListQuery) -> RepositoryResult<ListPage<Building>>;
}

pub trait BuildingWriter {
    fn create_building(&self, new: &NewBuilding) -> RepositoryResult<Building>;
    fn update_building(&self, id: i32, updates: &UpdateBuilding) -> RepositoryResult<Building>;
    fn set_building_active(&self, id: i32, active: bool) -> RepositoryResult<Building>;
    fn delete_building(&self, id: i32) -> RepositoryResult<()>;
}

pub trait FloorReader {
    fn get_floor_by_id(&self, id: i32) -> RepositoryResult<Option<Floor>>;
    fn list_floors(&self, query: &FloorListQuery) -> RepositoryResult<ListPage<Floor>>;
}

pub trait FloorWriter {
    fn create_floor(&self, new: &NewFloor) -> RepositoryResult<Floor>;
    fn update_floor(&self, id: i32, updates: &UpdateFloor) -> RepositoryResult<Floor>;
    fn set_floor_active(&self, id: i32, active: bool) -> RepositoryResult<Floor>;
    fn delete_floor(&self, id: i32) -> RepositoryResult<()>;
}

pub trait RoomReader {
    fn get_room_by_id(&self, id: i32) -> RepositoryResult<Option<Room>>;
    fn list_rooms(&self, query: &RoomListQuery) -> RepositoryResult<ListPage<Room>>;
}

pub trait RoomWriter {
    fn create_room(&self, new: &NewRoom) -> RepositoryResult<Room>;
    fn update_room(&self, id: i32, updates: &UpdateRoom) -> RepositoryResult<Room>;
    fn set_room_active(&self, id: i32, active: bool) -> RepositoryResult<Room>;
    fn delete_room(&self, id: i32) -> RepositoryResult<()>;
}

pub trait LecturerReader {
    fn get_lecturer_by_id(&self, id: i32) -> RepositoryResult<Option<Lecturer>>;
    fn list_lecturers(&self, query: &LecturerListQuery) -> RepositoryResult<ListPage<Lecturer>>;
}

pub trait LecturerWriter {
    fn create_lecturer(&self, new: &NewLecturer) -> RepositoryResult<Lecturer>;
    fn update_lecturer(&self, id: i32, updates: &UpdateLecturer) -> RepositoryResult<Lecturer>;
    fn set_lecturer_active(&self, id: i32, active: bool) -> RepositoryResult<Lecturer>;
    fn delete_lecturer(&self, id: i32) -> RepositoryResult<()>;
}

pub trait StudentReader {
    fn get_student_by_id(&self, id: i32) -> RepositoryResult<Option<Student>>;
    fn get_student_by_code(&self, code: &str) -> RepositoryResult<Option<Student>>;
    fn list_students(&self, query: &StudentListQuery) -> RepositoryResult<ListPage<Student>>;
}

pub trait StudentWriter {
    /// Bulk insert used both by the single-record form and the CSV import.
    fn create_students(&self, new: &[NewStudent]) -> RepositoryResult<usize>;
    fn update_student(&self, id: i32, updates: &UpdateStudent) -> RepositoryResult<Student>;
    fn set_student_active(&self, id: i32, active: bool) -> RepositoryResult<Student>;
    fn delete_student(&self, id: i32) -> RepositoryResult<()>;
}

pub trait EnrollmentReader {
    fn get_enrollment_by_id(&self, id: i32) -> RepositoryResult<Option<Enrollment>>;
    fn list_enrollments(&self, query: &EnrollmentListQuery) -> RepositoryResult<ListPage<Enrollment>>;
}

pub trait EnrollmentWriter {
    fn create_enrollment(&self, new: &NewEnrollment) -> RepositoryResult<Enrollment>;
    fn update_enrollment_status(
        &self,
        id: i32,
        status: EnrollmentStatus,
    ) -> RepositoryResult<Enrollment>;
    fn delete_enrollment(&self, id: i32) -> RepositoryResult<()>;
}

pub trait ExamReader {
    fn get_exam_by_id(&self, id: i32) -> RepositoryResult<Option<Exam>>;
    fn list_exams(&self, query: &ExamListQuery) -> RepositoryResult<ListPage<Exam>>;
}

pub trait ExamWriter {
    fn create_exam(&self, new: &NewExam) -> RepositoryResult<Exam>;
    fn update_exam(&self, id: i32, updates: &UpdateExam) -> RepositoryResult<Exam>;
    fn set_exam_active(&self, id: i32, active: bool) -> RepositoryResult<Exam>;
    fn delete_exam(&self, id: i32) -> RepositoryResult<()>;
}

pub trait RoadmapReader {
    fn get_roadmap_by_id(&self, id: i32) -> RepositoryResult<Option<Roadmap>>;
    fn list_roadmaps(&self, query: &RoadmapListQuery) -> RepositoryResult<ListPage<Roadmap>>;
    fn list_roadmap_items(&self, roadmap_id: i32) -> RepositoryResult<Vec<RoadmapItem>>;
}

pub trait RoadmapWriter {
    fn create_roadmap(&self, new: &NewRoadmap) -> RepositoryResult<Roadmap>;
    fn update_roadmap(&self, id: i32, updates: &UpdateRoadmap) -> RepositoryResult<Roadmap>;
    fn set_roadmap_active(&self, id: i32, active: bool) -> RepositoryResult<Roadmap>;
    /// Replace the whole course plan of a roadmap in one transaction.
    fn replace_roadmap_items(
        &self,
        roadmap_id: i32,
        items: &[NewRoadmapItem],
    ) -> RepositoryResult<usize>;
    fn delete_roadmap(&self, id: i32) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of all repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}
