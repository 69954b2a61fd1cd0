use chrono::NaiveDate;

use campus_admin::domain::catalog::{
    NewCourse, NewDepartment, NewMajor, NewSemester, UpdateDepartment,
};
use campus_admin::domain::enrollment::{EnrollmentStatus, NewEnrollment};
use campus_admin::domain::roadmap::{NewRoadmap, NewRoadmapItem};
use campus_admin::domain::student::{NewStudent, UpdateStudent};
use campus_admin::repository::errors::RepositoryError;
use campus_admin::repository::{
    CourseWriter, DepartmentFilters, DepartmentListQuery, DepartmentReader, DepartmentWriter,
    DieselRepository, EnrollmentFilters, EnrollmentListQuery, EnrollmentReader, EnrollmentWriter,
    MajorWriter, RoadmapReader, RoadmapWriter, SemesterWriter, StudentFilters, StudentListQuery,
    StudentReader, StudentWriter,
};

mod common;

fn seed_department(repo: &DieselRepository, name: &str, code: &str) -> i32 {
    repo.create_department(&NewDepartment {
        name: name.into(),
        code: code.into(),
    })
    .unwrap()
    .id
}

fn seed_major(repo: &DieselRepository, department_id: i32, name: &str, code: &str) -> i32 {
    repo.create_major(&NewMajor {
        department_id,
        name: name.into(),
        code: code.into(),
    })
    .unwrap()
    .id
}

fn seed_semester(repo: &DieselRepository, name: &str, code: &str) -> i32 {
    repo.create_semester(&NewSemester {
        name: name.into(),
        code: code.into(),
        starts_on: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        ends_on: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
    })
    .unwrap()
    .id
}

fn seed_course(repo: &DieselRepository, department_id: i32, name: &str, code: &str) -> i32 {
    repo.create_course(&NewCourse {
        department_id,
        name: name.into(),
        code: code.into(),
        credits: 5,
    })
    .unwrap()
    .id
}

fn new_student(major_id: i32, code: &str, name: &str, year: i32) -> NewStudent {
    NewStudent {
        major_id,
        student_code: code.into(),
        name: name.into(),
        email: format!("{}@example.com", code.to_lowercase()),
        phone: String::new(),
        enrollment_year: year,
        notes: String::new(),
    }
}

#[test]
fn test_department_repository_crud() {
    let test_db = common::TestDb::new("test_department_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let math = repo
        .create_department(&NewDepartment {
            name: "Mathematics".into(),
            code: "MATH".into(),
        })
        .unwrap();
    let physics = repo
        .create_department(&NewDepartment {
            name: "Physics".into(),
            code: "PHYS".into(),
        })
        .unwrap();

    let page = repo.list_departments(&DepartmentListQuery::new()).unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 2);

    let updated = repo
        .update_department(
            math.id,
            &UpdateDepartment {
                name: "Applied Mathematics".into(),
                code: "MATH".into(),
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Applied Mathematics");

    // Deactivated departments drop out of the active-only view.
    repo.set_department_active(physics.id, false).unwrap();
    let active = repo
        .list_departments(&DepartmentListQuery::new().apply_filters(DepartmentFilters {
            is_active: Some(true),
        }))
        .unwrap();
    assert_eq!(active.total, 1);
    assert_eq!(active.items[0].id, math.id);

    repo.delete_department(physics.id).unwrap();
    assert!(repo.get_department_by_id(physics.id).unwrap().is_none());
}

#[test]
fn test_duplicate_department_code_is_rejected() {
    let test_db = common::TestDb::new("test_duplicate_department_code_is_rejected.db");
    let repo = DieselRepository::new(test_db.pool());

    seed_department(&repo, "Mathematics", "MATH");
    let err = repo
        .create_department(&NewDepartment {
            name: "More Mathematics".into(),
            code: "MATH".into(),
        })
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn test_student_repository_search_sort_pagination() {
    let test_db = common::TestDb::new("test_student_repository_search_sort_pagination.db");
    let repo = DieselRepository::new(test_db.pool());

    let department_id = seed_department(&repo, "Mathematics", "MATH");
    let major_id = seed_major(&repo, department_id, "Pure Mathematics", "PM");

    let students: Vec<NewStudent> = (1..=25)
        .map(|i| new_student(major_id, &format!("S{i:03}"), &format!("Student {i:02}"), 2024))
        .collect();
    assert_eq!(repo.create_students(&students).unwrap(), 25);

    // 25 rows at 10 per page: 10, 10, 5.
    let query = StudentListQuery::new().with_per_page(10);
    let page1 = repo.list_students(&query).unwrap();
    assert_eq!(page1.total, 25);
    assert_eq!(page1.items.len(), 10);
    assert_eq!(page1.page_count(10), 3);

    let page2 = repo.list_students(&query.clone().with_page(2)).unwrap();
    assert_eq!(page2.items.len(), 10);
    assert_eq!(page2.items[0].student_code, "S011");
    assert_eq!(page2.items[9].student_code, "S020");

    let page3 = repo
        .list_students(&query.clone().with_page(3))
        .unwrap();
    assert_eq!(page3.total, 25);
    assert_eq!(page3.items.len(), 5);

    // Search matches name, email and student code.
    let by_name = repo
        .list_students(&StudentListQuery::new().with_search("Student 07"))
        .unwrap();
    assert_eq!(by_name.total, 1);
    assert_eq!(by_name.items[0].student_code, "S007");

    let by_code = repo
        .list_students(&StudentListQuery::new().with_search("s013"))
        .unwrap();
    assert_eq!(by_code.total, 1);

    // Toggling the same key twice flips to descending.
    let sorted = repo
        .list_students(
            &StudentListQuery::new()
                .toggle_sort("name")
                .toggle_sort("name"),
        )
        .unwrap();
    assert_eq!(sorted.items[0].name, "Student 25");

    // Structured filters stack with search.
    let filtered = repo
        .list_students(&StudentListQuery::new().apply_filters(StudentFilters {
            major_id: Some(major_id),
            enrollment_year: Some(2024),
            is_active: Some(true),
        }))
        .unwrap();
    assert_eq!(filtered.total, 25);

    let none = repo
        .list_students(&StudentListQuery::new().apply_filters(StudentFilters {
            enrollment_year: Some(1999),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(none.total, 0);
}

#[test]
fn test_student_update_and_code_lookup() {
    let test_db = common::TestDb::new("test_student_update_and_code_lookup.db");
    let repo = DieselRepository::new(test_db.pool());

    let department_id = seed_department(&repo, "Mathematics", "MATH");
    let major_id = seed_major(&repo, department_id, "Pure Mathematics", "PM");

    repo.create_students(&[new_student(major_id, "S001", "Ada", 2024)])
        .unwrap();
    let ada = repo.get_student_by_code("S001").unwrap().unwrap();
    assert_eq!(ada.name, "Ada");
    assert!(repo.get_student_by_code("S999").unwrap().is_none());

    let updated = repo
        .update_student(
            ada.id,
            &UpdateStudent {
                major_id,
                student_code: "S001".into(),
                name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                phone: String::new(),
                enrollment_year: 2023,
                notes: "transfer".into(),
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Ada Lovelace");
    assert_eq!(updated.enrollment_year, 2023);

    let inactive = repo.set_student_active(ada.id, false).unwrap();
    assert!(!inactive.is_active);
}

#[test]
fn test_enrollment_repository_statuses_and_uniqueness() {
    let test_db = common::TestDb::new("test_enrollment_repository_statuses_and_uniqueness.db");
    let repo = DieselRepository::new(test_db.pool());

    let department_id = seed_department(&repo, "Mathematics", "MATH");
    let major_id = seed_major(&repo, department_id, "Pure Mathematics", "PM");
    let semester_id = seed_semester(&repo, "Fall 2026", "F26");
    let algebra_id = seed_course(&repo, department_id, "Algebra", "ALG");
    let calculus_id = seed_course(&repo, department_id, "Calculus", "CALC");

    repo.create_students(&[new_student(major_id, "S001", "Ada", 2024)])
        .unwrap();
    let student = repo.get_student_by_code("S001").unwrap().unwrap();

    let enrollment = repo
        .create_enrollment(&NewEnrollment {
            student_id: student.id,
            course_id: algebra_id,
            semester_id,
            status: EnrollmentStatus::Enrolled,
        })
        .unwrap();
    repo.create_enrollment(&NewEnrollment {
        student_id: student.id,
        course_id: calculus_id,
        semester_id,
        status: EnrollmentStatus::Enrolled,
    })
    .unwrap();

    // Same student, course and semester again is a constraint violation.
    let err = repo
        .create_enrollment(&NewEnrollment {
            student_id: student.id,
            course_id: algebra_id,
            semester_id,
            status: EnrollmentStatus::Enrolled,
        })
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    let dropped = repo
        .update_enrollment_status(enrollment.id, EnrollmentStatus::Dropped)
        .unwrap();
    assert_eq!(dropped.status, EnrollmentStatus::Dropped);

    // Multi-select status filter; empty selection means all.
    let all = repo
        .list_enrollments(&EnrollmentListQuery::new())
        .unwrap();
    assert_eq!(all.total, 2);

    let dropped_only = repo
        .list_enrollments(&EnrollmentListQuery::new().apply_filters(EnrollmentFilters {
            statuses: vec![EnrollmentStatus::Dropped],
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(dropped_only.total, 1);
    assert_eq!(dropped_only.items[0].course_id, algebra_id);

    let both = repo
        .list_enrollments(&EnrollmentListQuery::new().apply_filters(EnrollmentFilters {
            statuses: vec![EnrollmentStatus::Dropped, EnrollmentStatus::Enrolled],
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(both.total, 2);

    // Deleting a student removes their enrollments as well.
    repo.delete_student(student.id).unwrap();
    let after = repo.list_enrollments(&EnrollmentListQuery::new()).unwrap();
    assert_eq!(after.total, 0);
    assert!(repo.get_enrollment_by_id(enrollment.id).unwrap().is_none());
}

#[test]
fn test_roadmap_items_are_replaced_atomically() {
    let test_db = common::TestDb::new("test_roadmap_items_are_replaced_atomically.db");
    let repo = DieselRepository::new(test_db.pool());

    let department_id = seed_department(&repo, "Mathematics", "MATH");
    let major_id = seed_major(&repo, department_id, "Pure Mathematics", "PM");
    let algebra_id = seed_course(&repo, department_id, "Algebra", "ALG");
    let calculus_id = seed_course(&repo, department_id, "Calculus", "CALC");
    let geometry_id = seed_course(&repo, department_id, "Geometry", "GEO");

    let roadmap = repo
        .create_roadmap(&NewRoadmap {
            major_id,
            name: "PM 2026".into(),
        })
        .unwrap();

    let saved = repo
        .replace_roadmap_items(
            roadmap.id,
            &[
                NewRoadmapItem {
                    course_id: algebra_id,
                    semester_no: 1,
                },
                NewRoadmapItem {
                    course_id: calculus_id,
                    semester_no: 2,
                },
            ],
        )
        .unwrap();
    assert_eq!(saved, 2);

    // A later save replaces the plan instead of appending to it.
    let saved = repo
        .replace_roadmap_items(
            roadmap.id,
            &[NewRoadmapItem {
                course_id: geometry_id,
                semester_no: 1,
            }],
        )
        .unwrap();
    assert_eq!(saved, 1);

    let items = repo.list_roadmap_items(roadmap.id).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].course_id, geometry_id);
    assert_eq!(items[0].semester_no, 1);

    repo.delete_roadmap(roadmap.id).unwrap();
    assert!(repo.get_roadmap_by_id(roadmap.id).unwrap().is_none());
    assert!(repo.list_roadmap_items(roadmap.id).unwrap().is_empty());
}
