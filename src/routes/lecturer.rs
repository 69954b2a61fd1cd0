use actix_web::{get, post, web, Responder};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::lecturer::LecturerListParams;
use crate::forms::lecturer::{AddLecturerForm, SaveLecturerForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{
    base_context, redirect, render_template, service_error_response, SetActiveForm,
};
use crate::services::lecturer as lecturer_service;
use crate::services::ServiceError;

#[get("/lecturers")]
pub async fn show_lecturers(
    params: web::Query<LecturerListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match lecturer_service::list_lecturers(repo.get_ref(), &user, params.into_inner())
    {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "lecturers",
        &server_config.auth_service_url,
    );
    context.insert("lecturers", &data.lecturers);
    context.insert("departments", &data.departments);
    context.insert("search_query", &data.search_query);
    context.insert("sort", &data.sort);
    context.insert("filters", &data.filters);

    render_template(&tera, "lecturer/lecturers.html", &context)
}

#[post("/lecturer/add")]
pub async fn add_lecturer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddLecturerForm>,
) -> impl Responder {
    match lecturer_service::add_lecturer(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Преподаватель добавлен.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            FlashMessage::error(format!("Ошибка при добавлении преподавателя: {err}")).send()
        }
    }
    redirect("/lecturers")
}

#[post("/lecturer/save")]
pub async fn save_lecturer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveLecturerForm>,
) -> impl Responder {
    match lecturer_service::update_lecturer(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Данные преподавателя сохранены.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            FlashMessage::error(format!("Ошибка при сохранении преподавателя: {err}")).send()
        }
    }
    redirect("/lecturers")
}

#[post("/lecturer/{id}/set_active")]
pub async fn set_lecturer_active(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetActiveForm>,
) -> impl Responder {
    match lecturer_service::set_lecturer_active(repo.get_ref(), &user, id.into_inner(), form.active)
    {
        Ok(()) => FlashMessage::success("Статус преподавателя обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка: {err}")).send(),
    }
    redirect("/lecturers")
}

#[post("/lecturer/{id}/delete")]
pub async fn delete_lecturer(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match lecturer_service::delete_lecturer(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => FlashMessage::success("Преподаватель удалён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            FlashMessage::error(format!("Ошибка при удалении преподавателя: {err}")).send()
        }
    }
    redirect("/lecturers")
}
