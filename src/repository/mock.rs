//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::catalog::{
    Course, Department, Major, NewCourse, NewDepartment, NewMajor, NewSemester, Semester,
    UpdateCourse, UpdateDepartment, UpdateMajor, UpdateSemester,
};
use crate::domain::enrollment::{Enrollment, EnrollmentStatus, NewEnrollment};
use crate::domain::exam::{Exam, NewExam, UpdateExam};
use crate::domain::lecturer::{Lecturer, NewLecturer, UpdateLecturer};
use crate::domain::location::{
    Building, Floor, NewBuilding, NewFloor, NewRoom, Room, UpdateBuilding, UpdateFloor, UpdateRoom,
};
use crate::domain::roadmap::{NewRoadmap, NewRoadmapItem, Roadmap, RoadmapItem, UpdateRoadmap};
use crate::domain::student::{NewStudent, Student, UpdateStudent};
use crate::listing::ListPage;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BuildingListQuery, BuildingReader, BuildingWriter, CourseListQuery, CourseReader, CourseWriter,
    DepartmentListQuery, DepartmentReader, DepartmentWriter, EnrollmentListQuery,
    EnrollmentReader, EnrollmentWriter, ExamListQuery, ExamReader, ExamWriter, FloorListQuery,
    FloorReader, FloorWriter, LecturerListQuery, LecturerReader, LecturerWriter, MajorListQuery,
    MajorReader, MajorWriter, RoadmapListQuery, RoadmapReader, RoadmapWriter, RoomListQuery,
    RoomReader, RoomWriter, SemesterListQuery, SemesterReader, SemesterWriter, StudentListQuery,
    StudentReader, StudentWriter,
};

mock! {
    pub Repository {}

    impl DepartmentReader for Repository {
        fn get_department_by_id(&self, id: i32) -> RepositoryResult<Option<Department>>;
        fn list_departments(&self, query: &DepartmentListQuery) -> RepositoryResult<ListPage<Department>>;
    }

    impl DepartmentWriter for Repository {
        fn create_department(&self, new: &NewDepartment) -> RepositoryResult<Department>;
        fn update_department(&self, id: i32, updates: &UpdateDepartment) -> RepositoryResult<Department>;
        fn set_department_active(&self, id: i32, active: bool) -> RepositoryResult<Department>;
        fn delete_department(&self, id: i32) -> RepositoryResult<()>;
    }

    impl MajorReader for Repository {
        fn get_major_by_id(&self, id: i32) -> RepositoryResult<Option<Major>>;
        fn list_majors(&self, query: &MajorListQuery) -> RepositoryResult<ListPage<Major>>;
    }

    impl MajorWriter for Repository {
        fn create_major(&self, new: &NewMajor) -> RepositoryResult<Major>;
        fn update_major(&self, id: i32, updates: &UpdateMajor) -> RepositoryResult<Major>;
        fn set_major_active(&self, id: i32, active: bool) -> RepositoryResult<Major>;
        fn delete_major(&self, id: i32) -> RepositoryResult<()>;
    }

    impl SemesterReader for Repository {
        fn get_semester_by_id(&self, id: i32) -> RepositoryResult<Option<Semester>>;
        fn list_semesters(&self, query: &SemesterListQuery) -> RepositoryResult<ListPage<Semester>>;
    }

    impl SemesterWriter for Repository {
        fn create_semester(&self, new: &NewSemester) -> RepositoryResult<Semester>;
        fn update_semester(&self, id: i32, updates: &UpdateSemester) -> RepositoryResult<Semester>;
        fn set_semester_active(&self, id: i32, active: bool) -> RepositoryResult<Semester>;
        fn delete_semester(&self, id: i32) -> RepositoryResult<()>;
    }

    impl CourseReader for Repository {
        fn get_course_by_id(&self, id: i32) -> RepositoryResult<Option<Course>>;
        fn list_courses(&self, query: &CourseListQuery) -> RepositoryResult<ListPage<Course>>;
    }

    impl CourseWriter for Repository {
        fn create_course(&self, new: &NewCourse) -> RepositoryResult<Course>;
        fn update_course(&self, id: i32, updates: &UpdateCourse) -> RepositoryResult<Course>;
        fn set_course_active(&self, id: i32, active: bool) -> RepositoryResult<Course>;
        fn delete_course(&self, id: i32) -> RepositoryResult<()>;
    }

    impl BuildingReader for Repository {
        fn get_building_by_id(&self, id: i32) -> RepositoryResult<Option<Building>>;
        fn list_buildings(&self, query: &BuildingListQuery) -> RepositoryResult<ListPage<Building>>;
    }

    impl BuildingWriter for Repository {
        fn create_building(&self, new: &NewBuilding) -> RepositoryResult<Building>;
        fn update_building(&self, id: i32, updates: &UpdateBuilding) -> RepositoryResult<Building>;
        fn set_building_active(&self, id: i32, active: bool) -> RepositoryResult<Building>;
        fn delete_building(&self, id: i32) -> RepositoryResult<()>;
    }

    impl FloorReader for Repository {
        fn get_floor_by_id(&self, id: i32) -> RepositoryResult<Option<Floor>>;
        fn list_floors(&self, query: &FloorListQuery) -> RepositoryResult<ListPage<Floor>>;
    }

    impl FloorWriter for Repository {
        fn create_floor(&self, new: &NewFloor) -> RepositoryResult<Floor>;
        fn update_floor(&self, id: i32, updates: &UpdateFloor) -> RepositoryResult<Floor>;
        fn set_floor_active(&self, id: i32, active: bool) -> RepositoryResult<Floor>;
        fn delete_floor(&self, id: i32) -> RepositoryResult<()>;
    }

    impl RoomReader for Repository {
        fn get_room_by_id(&self, id: i32) -> RepositoryResult<Option<Room>>;
        fn list_rooms(&self, query: &RoomListQuery) -> RepositoryResult<ListPage<Room>>;
    }

    impl RoomWriter for Repository {
        fn create_room(&self, new: &NewRoom) -> RepositoryResult<Room>;
        fn update_room(&self, id: i32, updates: &UpdateRoom) -> RepositoryResult<Room>;
        fn set_room_active(&self, id: i32, active: bool) -> RepositoryResult<Room>;
        fn delete_room(&self, id: i32) -> RepositoryResult<()>;
    }

    impl LecturerReader for Repository {
        fn get_lecturer_by_id(&self, id: i32) -> RepositoryResult<Option<Lecturer>>;
        fn list_lecturers(&self, query: &LecturerListQuery) -> RepositoryResult<ListPage<Lecturer>>;
    }

    impl LecturerWriter for Repository {
        fn create_lecturer(&self, new: &NewLecturer) -> RepositoryResult<Lecturer>;
        fn update_lecturer(&self, id: i32, updates: &UpdateLecturer) -> RepositoryResult<Lecturer>;
        fn set_lecturer_active(&self, id: i32, active: bool) -> RepositoryResult<Lecturer>;
        fn delete_lecturer(&self, id: i32) -> RepositoryResult<()>;
    }

    impl StudentReader for Repository {
        fn get_student_by_id(&self, id: i32) -> RepositoryResult<Option<Student>>;
        fn get_student_by_code(&self, code: &str) -> RepositoryResult<Option<Student>>;
        fn list_students(&self, query: &StudentListQuery) -> RepositoryResult<ListPage<Student>>;
    }

    impl StudentWriter for Repository {
        fn create_students(&self, new: &[NewStudent]) -> RepositoryResult<usize>;
        fn update_student(&self, id: i32, updates: &UpdateStudent) -> RepositoryResult<Student>;
        fn set_student_active(&self, id: i32, active: bool) -> RepositoryResult<Student>;
        fn delete_student(&self, id: i32) -> RepositoryResult<()>;
    }

    impl EnrollmentReader for Repository {
        fn get_enrollment_by_id(&self, id: i32) -> RepositoryResult<Option<Enrollment>>;
        fn list_enrollments(&self, query: &EnrollmentListQuery) -> RepositoryResult<ListPage<Enrollment>>;
    }

    impl EnrollmentWriter for Repository {
        fn create_enrollment(&self, new: &NewEnrollment) -> RepositoryResult<Enrollment>;
        fn update_enrollment_status(&self, id: i32, status: EnrollmentStatus) -> RepositoryResult<Enrollment>;
        fn delete_enrollment(&self, id: i32) -> RepositoryResult<()>;
    }

    impl ExamReader for Repository {
        fn get_exam_by_id(&self, id: i32) -> RepositoryResult<Option<Exam>>;
        fn list_exams(&self, query: &ExamListQuery) -> RepositoryResult<ListPage<Exam>>;
    }

    impl ExamWriter for Repository {
        fn create_exam(&self, new: &NewExam) -> RepositoryResult<Exam>;
        fn update_exam(&self, id: i32, updates: &UpdateExam) -> RepositoryResult<Exam>;
        fn set_exam_active(&self, id: i32, active: bool) -> RepositoryResult<Exam>;
        fn delete_exam(&self, id: i32) -> RepositoryResult<()>;
    }

    impl RoadmapReader for Repository {
        fn get_roadmap_by_id(&self, id: i32) -> RepositoryResult<Option<Roadmap>>;
        fn list_roadmaps(&self, query: &RoadmapListQuery) -> RepositoryResult<ListPage<Roadmap>>;
        fn list_roadmap_items(&self, roadmap_id: i32) -> RepositoryResult<Vec<RoadmapItem>>;
    }

    impl RoadmapWriter for Repository {
        fn create_roadmap(&self, new: &NewRoadmap) -> RepositoryResult<Roadmap>;
        fn update_roadmap(&self, id: i32, updates: &UpdateRoadmap) -> RepositoryResult<Roadmap>;
        fn set_roadmap_active(&self, id: i32, active: bool) -> RepositoryResult<Roadmap>;
        fn replace_roadmap_items(&self, roadmap_id: i32, items: &[NewRoadmapItem]) -> RepositoryResult<usize>;
        fn delete_roadmap(&self, id: i32) -> RepositoryResult<()>;
    }
}
