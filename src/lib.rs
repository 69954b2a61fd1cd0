use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::{middleware as actix_middleware, web, App, HttpServer};
use actix_web_flash_messages::{storage::CookieMessageStore, FlashMessagesFramework};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::api::{api_v1_courses, api_v1_exams, api_v1_students};
use crate::routes::catalog::{
    add_course, add_department, add_major, add_semester, delete_course, delete_department,
    delete_major, delete_semester, save_course, save_department, save_major, save_semester,
    set_course_active, set_department_active, set_major_active, set_semester_active, show_courses,
    show_departments, show_majors, show_semesters,
};
use crate::routes::enrollment::{
    add_enrollment, delete_enrollment, show_enrollments, update_enrollment_status,
};
use crate::routes::exam::{
    add_exam, delete_exam, save_exam, set_exam_active, show_exams,
};
use crate::routes::lecturer::{
    add_lecturer, delete_lecturer, save_lecturer, set_lecturer_active, show_lecturers,
};
use crate::routes::location::{
    add_building, add_floor, add_room, delete_building, delete_floor, delete_room, save_building,
    save_floor, save_room, set_building_active, set_floor_active, set_room_active, show_buildings,
    show_floors, show_rooms,
};
use crate::routes::main::{logout, not_assigned, show_index};
use crate::routes::roadmap::{
    add_roadmap, delete_roadmap, save_roadmap, save_roadmap_items, set_roadmap_active,
    show_roadmap, show_roadmaps,
};
use crate::routes::student::{
    add_student, delete_student, save_student, set_student_active, show_student, show_students,
    upload_students,
};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod listing;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

pub const SERVICE_ACCESS_ROLE: &str = "university";
pub const SERVICE_ADMIN_ROLE: &str = "university_admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(not_assigned)
            .service(
                web::scope("/api")
                    .service(api_v1_students)
                    .service(api_v1_courses)
                    .service(api_v1_exams),
            )
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_index)
                    .service(show_departments)
                    .service(add_department)
                    .service(save_department)
                    .service(set_department_active)
                    .service(delete_department)
                    .service(show_majors)
                    .service(add_major)
                    .service(save_major)
                    .service(set_major_active)
                    .service(delete_major)
                    .service(show_semesters)
                    .service(add_semester)
                    .service(save_semester)
                    .service(set_semester_active)
                    .service(delete_semester)
                    .service(show_courses)
                    .service(add_course)
                    .service(save_course)
                    .service(set_course_active)
                    .service(delete_course)
                    .service(show_buildings)
                    .service(add_building)
                    .service(save_building)
                    .service(set_building_active)
                    .service(delete_building)
                    .service(show_floors)
                    .service(add_floor)
                    .service(save_floor)
                    .service(set_floor_active)
                    .service(delete_floor)
                    .service(show_rooms)
                    .service(add_room)
                    .service(save_room)
                    .service(set_room_active)
                    .service(delete_room)
                    .service(show_lecturers)
                    .service(add_lecturer)
                    .service(save_lecturer)
                    .service(set_lecturer_active)
                    .service(delete_lecturer)
                    .service(show_students)
                    .service(show_student)
                    .service(add_student)
                    .service(save_student)
                    .service(upload_students)
                    .service(set_student_active)
                    .service(delete_student)
                    .service(show_enrollments)
                    .service(add_enrollment)
                    .service(update_enrollment_status)
                    .service(delete_enrollment)
                    .service(show_exams)
                    .service(add_exam)
                    .service(save_exam)
                    .service(set_exam_active)
                    .service(delete_exam)
                    .service(show_roadmaps)
                    .service(show_roadmap)
                    .service(add_roadmap)
                    .service(save_roadmap)
                    .service(save_roadmap_items)
                    .service(set_roadmap_active)
                    .service(delete_roadmap)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
