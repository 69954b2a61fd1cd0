use actix_web::{get, post, web, Responder};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::catalog::{
    CourseListParams, DepartmentListParams, MajorListParams, SemesterListParams,
};
use crate::forms::catalog::{
    AddCourseForm, AddDepartmentForm, AddMajorForm, AddSemesterForm, SaveCourseForm,
    SaveDepartmentForm, SaveMajorForm, SaveSemesterForm,
};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{
    base_context, redirect, render_template, service_error_response, SetActiveForm,
};
use crate::services::catalog as catalog_service;
use crate::services::ServiceError;

#[get("/departments")]
pub async fn show_departments(
    params: web::Query<DepartmentListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data =
        match catalog_service::list_departments(repo.get_ref(), &user, params.into_inner()) {
            Ok(data) => data,
            Err(err) => return service_error_response(err, "/"),
        };

    let mut context = base_context(
        &flash_messages,
        &user,
        "departments",
        &server_config.auth_service_url,
    );
    context.insert("departments", &data.departments);
    context.insert("search_query", &data.search_query);
    context.insert("sort", &data.sort);
    context.insert("filters", &data.filters);

    render_template(&tera, "catalog/departments.html", &context)
}

#[post("/department/add")]
pub async fn add_department(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddDepartmentForm>,
) -> impl Responder {
    match catalog_service::add_department(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Кафедра добавлена.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при добавлении кафедры: {err}")).send(),
    }
    redirect("/departments")
}

#[post("/department/save")]
pub async fn save_department(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveDepartmentForm>,
) -> impl Responder {
    match catalog_service::update_department(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Кафедра обновлена.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при сохранении кафедры: {err}")).send(),
    }
    redirect("/departments")
}

#[post("/department/{id}/set_active")]
pub async fn set_department_active(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetActiveForm>,
) -> impl Responder {
    match catalog_service::set_department_active(repo.get_ref(), &user, id.into_inner(), form.active)
    {
        Ok(()) => FlashMessage::success("Статус кафедры обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка: {err}")).send(),
    }
    redirect("/departments")
}

#[post("/department/{id}/delete")]
pub async fn delete_department(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog_service::delete_department(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => FlashMessage::success("Кафедра удалена.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при удалении кафедры: {err}")).send(),
    }
    redirect("/departments")
}

#[get("/majors")]
pub async fn show_majors(
    params: web::Query<MajorListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match catalog_service::list_majors(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "majors",
        &server_config.auth_service_url,
    );
    context.insert("majors", &data.majors);
    context.insert("departments", &data.departments);
    context.insert("search_query", &data.search_query);
    context.insert("sort", &data.sort);
    context.insert("filters", &data.filters);

    render_template(&tera, "catalog/majors.html", &context)
}

#[post("/major/add")]
pub async fn add_major(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddMajorForm>,
) -> impl Responder {
    match catalog_service::add_major(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Направление добавлено.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            FlashMessage::error(format!("Ошибка при добавлении направления: {err}")).send()
        }
    }
    redirect("/majors")
}

#[post("/major/save")]
pub async fn save_major(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveMajorForm>,
) -> impl Responder {
    match catalog_service::update_major(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Направление обновлено.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            FlashMessage::error(format!("Ошибка при сохранении направления: {err}")).send()
        }
    }
    redirect("/majors")
}

#[post("/major/{id}/set_active")]
pub async fn set_major_active(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetActiveForm>,
) -> impl Responder {
    match catalog_service::set_major_active(repo.get_ref(), &user, id.into_inner(), form.active) {
        Ok(()) => FlashMessage::success("Статус направления обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка: {err}")).send(),
    }
    redirect("/majors")
}

#[post("/major/{id}/delete")]
pub async fn delete_major(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog_service::delete_major(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => FlashMessage::success("Направление удалено.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при удалении направления: {err}")).send(),
    }
    redirect("/majors")
}

#[get("/semesters")]
pub async fn show_semesters(
    params: web::Query<SemesterListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match catalog_service::list_semesters(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "semesters",
        &server_config.auth_service_url,
    );
    context.insert("semesters", &data.semesters);
    context.insert("search_query", &data.search_query);
    context.insert("sort", &data.sort);
    context.insert("filters", &data.filters);

    render_template(&tera, "catalog/semesters.html", &context)
}

#[post("/semester/add")]
pub async fn add_semester(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddSemesterForm>,
) -> impl Responder {
    match catalog_service::add_semester(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Семестр добавлен.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при добавлении семестра: {err}")).send(),
    }
    redirect("/semesters")
}

#[post("/semester/save")]
pub async fn save_semester(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveSemesterForm>,
) -> impl Responder {
    match catalog_service::update_semester(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Семестр обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при сохранении семестра: {err}")).send(),
    }
    redirect("/semesters")
}

#[post("/semester/{id}/set_active")]
pub async fn set_semester_active(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetActiveForm>,
) -> impl Responder {
    match catalog_service::set_semester_active(repo.get_ref(), &user, id.into_inner(), form.active)
    {
        Ok(()) => FlashMessage::success("Статус семестра обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка: {err}")).send(),
    }
    redirect("/semesters")
}

#[post("/semester/{id}/delete")]
pub async fn delete_semester(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog_service::delete_semester(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => FlashMessage::success("Семестр удалён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при удалении семестра: {err}")).send(),
    }
    redirect("/semesters")
}

#[get("/courses")]
pub async fn show_courses(
    params: web::Query<CourseListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match catalog_service::list_courses(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "courses",
        &server_config.auth_service_url,
    );
    context.insert("courses", &data.courses);
    context.insert("departments", &data.departments);
    context.insert("search_query", &data.search_query);
    context.insert("sort", &data.sort);
    context.insert("filters", &data.filters);

    render_template(&tera, "catalog/courses.html", &context)
}

#[post("/course/add")]
pub async fn add_course(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCourseForm>,
) -> impl Responder {
    match catalog_service::add_course(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Дисциплина добавлена.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            FlashMessage::error(format!("Ошибка при добавлении дисциплины: {err}")).send()
        }
    }
    redirect("/courses")
}

#[post("/course/save")]
pub async fn save_course(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveCourseForm>,
) -> impl Responder {
    match catalog_service::update_course(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Дисциплина обновлена.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            FlashMessage::error(format!("Ошибка при сохранении дисциплины: {err}")).send()
        }
    }
    redirect("/courses")
}

#[post("/course/{id}/set_active")]
pub async fn set_course_active(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetActiveForm>,
) -> impl Responder {
    match catalog_service::set_course_active(repo.get_ref(), &user, id.into_inner(), form.active) {
        Ok(()) => FlashMessage::success("Статус дисциплины обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка: {err}")).send(),
    }
    redirect("/courses")
}

#[post("/course/{id}/delete")]
pub async fn delete_course(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog_service::delete_course(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => FlashMessage::success("Дисциплина удалена.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при удалении дисциплины: {err}")).send(),
    }
    redirect("/courses")
}
