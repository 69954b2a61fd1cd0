use actix_web::{get, web, HttpResponse, Responder};
use log::error;
use serde_json::json;

use crate::dto::catalog::CourseListParams;
use crate::dto::exam::ExamListParams;
use crate::dto::student::StudentListParams;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::api as api_service;
use crate::services::ServiceError;

fn api_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(json!({ "error": "unauthorized" }))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({ "error": "not found" })),
        ServiceError::Form(msg) => HttpResponse::BadRequest().json(json!({ "error": msg })),
        ServiceError::Repository(e) => {
            error!("Repository failure: {e}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal error" }))
        }
    }
}

#[get("/v1/students")]
pub async fn api_v1_students(
    params: web::Query<StudentListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_students(repo.get_ref(), &user, params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => api_error_response(err),
    }
}

#[get("/v1/courses")]
pub async fn api_v1_courses(
    params: web::Query<CourseListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_courses(repo.get_ref(), &user, params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => api_error_response(err),
    }
}

#[get("/v1/exams")]
pub async fn api_v1_exams(
    params: web::Query<ExamListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_exams(repo.get_ref(), &user, params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => api_error_response(err),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    use super::*;

    #[actix_web::test]
    async fn form_errors_become_json_bad_requests() {
        let resp = api_error_response(ServiceError::Form("credits out of range".into()));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "credits out of range");
    }

    #[actix_web::test]
    async fn unauthorized_maps_to_401() {
        let resp = api_error_response(ServiceError::Unauthorized);
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
