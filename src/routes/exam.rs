use actix_web::{get, post, web, Responder};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::exam::ExamListParams;
use crate::forms::exam::{AddExamForm, SaveExamForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{
    base_context, redirect, render_template, service_error_response, SetActiveForm,
};
use crate::services::exam as exam_service;
use crate::services::ServiceError;

#[get("/exams")]
pub async fn show_exams(
    params: web::Query<ExamListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match exam_service::list_exams(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "exams",
        &server_config.auth_service_url,
    );
    context.insert("exams", &data.exams);
    context.insert("courses", &data.courses);
    context.insert("semesters", &data.semesters);
    context.insert("rooms", &data.rooms);
    context.insert("search_query", &data.search_query);
    context.insert("sort", &data.sort);
    context.insert("filters", &data.filters);

    render_template(&tera, "exam/exams.html", &context)
}

#[post("/exam/add")]
pub async fn add_exam(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddExamForm>,
) -> impl Responder {
    match exam_service::add_exam(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Экзамен добавлен.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при добавлении экзамена: {err}")).send(),
    }
    redirect("/exams")
}

#[post("/exam/save")]
pub async fn save_exam(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveExamForm>,
) -> impl Responder {
    match exam_service::update_exam(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Экзамен обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при сохранении экзамена: {err}")).send(),
    }
    redirect("/exams")
}

#[post("/exam/{id}/set_active")]
pub async fn set_exam_active(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetActiveForm>,
) -> impl Responder {
    match exam_service::set_exam_active(repo.get_ref(), &user, id.into_inner(), form.active) {
        Ok(()) => FlashMessage::success("Статус экзамена обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка: {err}")).send(),
    }
    redirect("/exams")
}

#[post("/exam/{id}/delete")]
pub async fn delete_exam(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match exam_service::delete_exam(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => FlashMessage::success("Экзамен удалён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при удалении экзамена: {err}")).send(),
    }
    redirect("/exams")
}
