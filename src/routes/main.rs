use actix_identity::Identity;
use actix_web::{get, web, HttpResponse, Responder};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, ensure_role, redirect, render_template};
use crate::SERVICE_ACCESS_ROLE;

#[get("/")]
pub async fn show_index(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let context = base_context(
        &flash_messages,
        &user,
        "index",
        &server_config.auth_service_url,
    );

    render_template(&tera, "main/index.html", &context)
}

/// Landing page for signed-in users without the access role.
#[get("/na")]
pub async fn not_assigned(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "main/not_assigned.html", &Context::new())
}

#[get("/logout")]
pub async fn logout(
    identity: Option<Identity>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    redirect(&server_config.auth_service_url)
}

#[cfg(test)]
mod tests {
    use actix_identity::IdentityMiddleware;
    use actix_session::{storage::CookieSessionStore, SessionMiddleware};
    use actix_web::cookie::Key;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use super::*;

    #[actix_web::test]
    async fn logout_redirects_to_the_auth_service() {
        let config = ServerConfig {
            domain: "example.edu".to_string(),
            address: "127.0.0.1".to_string(),
            port: 8080,
            database_url: ":memory:".to_string(),
            templates_dir: "templates/**/*".to_string(),
            secret: "secret".to_string(),
            auth_service_url: "https://auth.example.edu".to_string(),
        };

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .wrap(IdentityMiddleware::default())
                .wrap(SessionMiddleware::new(
                    CookieSessionStore::default(),
                    Key::from(&[0; 64]),
                ))
                .service(logout),
        )
        .await;

        let req = test::TestRequest::get().uri("/logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get("location").unwrap(),
            "https://auth.example.edu"
        );
    }
}
