use actix_multipart::form::MultipartForm;
use actix_web::{get, post, web, Responder};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::student::StudentListParams;
use crate::forms::student::{AddStudentForm, SaveStudentForm, UploadStudentsForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{
    base_context, redirect, render_template, service_error_response, SetActiveForm,
};
use crate::services::student as student_service;
use crate::services::ServiceError;

#[get("/students")]
pub async fn show_students(
    params: web::Query<StudentListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match student_service::list_students(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "students",
        &server_config.auth_service_url,
    );
    context.insert("students", &data.students);
    context.insert("majors", &data.majors);
    context.insert("search_query", &data.search_query);
    context.insert("sort", &data.sort);
    context.insert("filters", &data.filters);

    render_template(&tera, "student/students.html", &context)
}

#[get("/student/{id}")]
pub async fn show_student(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match student_service::load_student_page(repo.get_ref(), &user, id.into_inner()) {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/students"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "students",
        &server_config.auth_service_url,
    );
    context.insert("student", &data.student);
    context.insert("major", &data.major);
    context.insert("enrollments", &data.enrollments);

    render_template(&tera, "student/student.html", &context)
}

#[post("/student/add")]
pub async fn add_student(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddStudentForm>,
) -> impl Responder {
    match student_service::add_student(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Студент добавлен.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при добавлении студента: {err}")).send(),
    }
    redirect("/students")
}

#[post("/student/save")]
pub async fn save_student(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveStudentForm>,
) -> impl Responder {
    let student_id = form.id;
    match student_service::update_student(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Данные студента сохранены.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при сохранении студента: {err}")).send(),
    }
    redirect(&format!("/student/{student_id}"))
}

/// Bulk CSV import of students.
#[post("/students/upload")]
pub async fn upload_students(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<UploadStudentsForm>,
) -> impl Responder {
    let file = form.csv.file.into_file();
    match student_service::import_students(repo.get_ref(), &user, file) {
        Ok(outcome) => {
            FlashMessage::success(format!("Импортировано студентов: {}", outcome.created)).send()
        }
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка импорта: {err}")).send(),
    }
    redirect("/students")
}

#[post("/student/{id}/set_active")]
pub async fn set_student_active(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetActiveForm>,
) -> impl Responder {
    match student_service::set_student_active(repo.get_ref(), &user, id.into_inner(), form.active)
    {
        Ok(()) => FlashMessage::success("Статус студента обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка: {err}")).send(),
    }
    redirect("/students")
}

#[post("/student/{id}/delete")]
pub async fn delete_student(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match student_service::delete_student(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => FlashMessage::success("Студент удалён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при удалении студента: {err}")).send(),
    }
    redirect("/students")
}
