use actix_web::{get, post, web, HttpRequest, Responder};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::enrollment::EnrollmentListParams;
use crate::forms::enrollment::{AddEnrollmentForm, UpdateEnrollmentStatusForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template, service_error_response};
use crate::services::enrollment as enrollment_service;
use crate::services::ServiceError;

/// The status filter repeats its key, so the query string goes through
/// `serde_html_form` instead of `web::Query`.
#[get("/enrollments")]
pub async fn show_enrollments(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params: EnrollmentListParams =
        serde_html_form::from_str(req.query_string()).unwrap_or_default();

    let data = match enrollment_service::list_enrollments(repo.get_ref(), &user, params) {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "enrollments",
        &server_config.auth_service_url,
    );
    context.insert("enrollments", &data.enrollments);
    context.insert("semesters", &data.semesters);
    context.insert("sort", &data.sort);
    context.insert("filters", &data.filters);

    render_template(&tera, "enrollment/enrollments.html", &context)
}

#[post("/enrollment/add")]
pub async fn add_enrollment(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddEnrollmentForm>,
) -> impl Responder {
    match enrollment_service::add_enrollment(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Запись на курс добавлена.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при записи на курс: {err}")).send(),
    }
    redirect("/enrollments")
}

#[post("/enrollment/status")]
pub async fn update_enrollment_status(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdateEnrollmentStatusForm>,
) -> impl Responder {
    match enrollment_service::update_enrollment_status(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Статус записи обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при обновлении статуса: {err}")).send(),
    }
    redirect("/enrollments")
}

#[post("/enrollment/{id}/delete")]
pub async fn delete_enrollment(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match enrollment_service::delete_enrollment(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => FlashMessage::success("Запись удалена.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при удалении записи: {err}")).send(),
    }
    redirect("/enrollments")
}
