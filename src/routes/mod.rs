//! Route handlers and the shared helpers they render with.

use actix_web::http::header;
use actix_web::HttpResponse;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::models::auth::{check_role, AuthenticatedUser};
use crate::services::ServiceError;

pub mod api;
pub mod catalog;
pub mod enrollment;
pub mod exam;
pub mod lecturer;
pub mod location;
pub mod main;
pub mod roadmap;
pub mod student;

/// 303 redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Maps a flash message level onto the alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Redirects to the not-assigned page unless the user carries the role.
pub fn ensure_role(
    user: &AuthenticatedUser,
    role: &str,
    redirect_to: Option<&str>,
) -> Result<(), HttpResponse> {
    if check_role(role, &user.roles) {
        Ok(())
    } else {
        Err(redirect(redirect_to.unwrap_or("/na")))
    }
}

/// Context pre-filled with the pieces every page needs: flash alerts, the
/// current user, the active navigation entry and the auth service URL.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    current_page: &str,
    home_url: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", user);
    context.insert("current_page", current_page);
    context.insert("home_url", home_url);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            log::error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Turns a service failure into the appropriate response for page
/// handlers: form and not-found problems flash and go back, everything
/// else is a server error.
pub fn service_error_response(err: ServiceError, back: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => redirect("/na"),
        ServiceError::NotFound => {
            FlashMessage::error("Запись не найдена.").send();
            redirect(back)
        }
        ServiceError::Form(msg) => {
            FlashMessage::error(msg).send();
            redirect(back)
        }
        ServiceError::Repository(e) => {
            log::error!("Repository failure: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Deserialize)]
/// Form used by the activate/deactivate toggles.
pub struct SetActiveForm {
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_levels_map_to_bootstrap_classes() {
        assert_eq!(alert_level_to_str(&Level::Error), "danger");
        assert_eq!(alert_level_to_str(&Level::Success), "success");
        assert_eq!(alert_level_to_str(&Level::Info), "info");
    }
}
