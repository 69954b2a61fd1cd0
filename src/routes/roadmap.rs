use actix_web::{get, post, web, Responder};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::roadmap::RoadmapListParams;
use crate::forms::roadmap::{AddRoadmapForm, SaveRoadmapForm, SaveRoadmapItemsForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{
    base_context, redirect, render_template, service_error_response, SetActiveForm,
};
use crate::services::roadmap as roadmap_service;
use crate::services::ServiceError;

#[get("/roadmaps")]
pub async fn show_roadmaps(
    params: web::Query<RoadmapListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match roadmap_service::list_roadmaps(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "roadmaps",
        &server_config.auth_service_url,
    );
    context.insert("roadmaps", &data.roadmaps);
    context.insert("majors", &data.majors);
    context.insert("search_query", &data.search_query);
    context.insert("sort", &data.sort);
    context.insert("filters", &data.filters);

    render_template(&tera, "roadmap/roadmaps.html", &context)
}

/// Roadmap editor: the plan items grouped by semester number.
#[get("/roadmap/{id}")]
pub async fn show_roadmap(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match roadmap_service::load_roadmap_page(repo.get_ref(), &user, id.into_inner()) {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/roadmaps"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "roadmaps",
        &server_config.auth_service_url,
    );
    context.insert("roadmap", &data.roadmap);
    context.insert("major", &data.major);
    context.insert("items", &data.items);
    context.insert("courses", &data.courses);

    render_template(&tera, "roadmap/roadmap.html", &context)
}

#[post("/roadmap/add")]
pub async fn add_roadmap(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddRoadmapForm>,
) -> impl Responder {
    match roadmap_service::add_roadmap(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Учебный план добавлен.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при добавлении плана: {err}")).send(),
    }
    redirect("/roadmaps")
}

#[post("/roadmap/save")]
pub async fn save_roadmap(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveRoadmapForm>,
) -> impl Responder {
    let roadmap_id = form.id;
    match roadmap_service::update_roadmap(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Учебный план обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при сохранении плана: {err}")).send(),
    }
    redirect(&format!("/roadmap/{roadmap_id}"))
}

/// Replaces the course plan. The form repeats `course_id` and
/// `semester_no` for every row of the editor, so the body goes through
/// `serde_html_form` instead of `web::Form`.
#[post("/roadmap/items")]
pub async fn save_roadmap_items(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    let form: SaveRoadmapItemsForm = match serde_html_form::from_bytes(&body) {
        Ok(form) => form,
        Err(err) => {
            FlashMessage::error(format!("Некорректная форма: {err}")).send();
            return redirect("/roadmaps");
        }
    };

    let roadmap_id = form.id;
    match roadmap_service::save_roadmap_items(repo.get_ref(), &user, form) {
        Ok(count) => FlashMessage::success(format!("План сохранён, дисциплин: {count}.")).send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при сохранении плана: {err}")).send(),
    }
    redirect(&format!("/roadmap/{roadmap_id}"))
}

#[post("/roadmap/{id}/set_active")]
pub async fn set_roadmap_active(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetActiveForm>,
) -> impl Responder {
    match roadmap_service::set_roadmap_active(repo.get_ref(), &user, id.into_inner(), form.active)
    {
        Ok(()) => FlashMessage::success("Статус плана обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка: {err}")).send(),
    }
    redirect("/roadmaps")
}

#[post("/roadmap/{id}/delete")]
pub async fn delete_roadmap(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match roadmap_service::delete_roadmap(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => FlashMessage::success("Учебный план удалён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при удалении плана: {err}")).send(),
    }
    redirect("/roadmaps")
}
