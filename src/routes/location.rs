use actix_web::{get, post, web, Responder};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::location::{BuildingListParams, FloorListParams, RoomListParams};
use crate::forms::location::{
    AddBuildingForm, AddFloorForm, AddRoomForm, SaveBuildingForm, SaveFloorForm, SaveRoomForm,
};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{
    base_context, redirect, render_template, service_error_response, SetActiveForm,
};
use crate::services::location as location_service;
use crate::services::ServiceError;

#[get("/buildings")]
pub async fn show_buildings(
    params: web::Query<BuildingListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match location_service::list_buildings(repo.get_ref(), &user, params.into_inner())
    {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "buildings",
        &server_config.auth_service_url,
    );
    context.insert("buildings", &data.buildings);
    context.insert("search_query", &data.search_query);
    context.insert("sort", &data.sort);
    context.insert("filters", &data.filters);

    render_template(&tera, "location/buildings.html", &context)
}

#[post("/building/add")]
pub async fn add_building(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddBuildingForm>,
) -> impl Responder {
    match location_service::add_building(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Корпус добавлен.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при добавлении корпуса: {err}")).send(),
    }
    redirect("/buildings")
}

#[post("/building/save")]
pub async fn save_building(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveBuildingForm>,
) -> impl Responder {
    match location_service::update_building(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Корпус обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при сохранении корпуса: {err}")).send(),
    }
    redirect("/buildings")
}

#[post("/building/{id}/set_active")]
pub async fn set_building_active(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetActiveForm>,
) -> impl Responder {
    match location_service::set_building_active(repo.get_ref(), &user, id.into_inner(), form.active)
    {
        Ok(()) => FlashMessage::success("Статус корпуса обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка: {err}")).send(),
    }
    redirect("/buildings")
}

#[post("/building/{id}/delete")]
pub async fn delete_building(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match location_service::delete_building(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => FlashMessage::success("Корпус удалён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при удалении корпуса: {err}")).send(),
    }
    redirect("/buildings")
}

#[get("/floors")]
pub async fn show_floors(
    params: web::Query<FloorListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match location_service::list_floors(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "floors",
        &server_config.auth_service_url,
    );
    context.insert("floors", &data.floors);
    context.insert("buildings", &data.buildings);
    context.insert("search_query", &data.search_query);
    context.insert("sort", &data.sort);
    context.insert("filters", &data.filters);

    render_template(&tera, "location/floors.html", &context)
}

#[post("/floor/add")]
pub async fn add_floor(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddFloorForm>,
) -> impl Responder {
    match location_service::add_floor(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Этаж добавлен.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при добавлении этажа: {err}")).send(),
    }
    redirect("/floors")
}

#[post("/floor/save")]
pub async fn save_floor(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveFloorForm>,
) -> impl Responder {
    match location_service::update_floor(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Этаж обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при сохранении этажа: {err}")).send(),
    }
    redirect("/floors")
}

#[post("/floor/{id}/set_active")]
pub async fn set_floor_active(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetActiveForm>,
) -> impl Responder {
    match location_service::set_floor_active(repo.get_ref(), &user, id.into_inner(), form.active) {
        Ok(()) => FlashMessage::success("Статус этажа обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка: {err}")).send(),
    }
    redirect("/floors")
}

#[post("/floor/{id}/delete")]
pub async fn delete_floor(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match location_service::delete_floor(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => FlashMessage::success("Этаж удалён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при удалении этажа: {err}")).send(),
    }
    redirect("/floors")
}

#[get("/rooms")]
pub async fn show_rooms(
    params: web::Query<RoomListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match location_service::list_rooms(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => data,
        Err(err) => return service_error_response(err, "/"),
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "rooms",
        &server_config.auth_service_url,
    );
    context.insert("rooms", &data.rooms);
    context.insert("floors", &data.floors);
    context.insert("search_query", &data.search_query);
    context.insert("sort", &data.sort);
    context.insert("filters", &data.filters);

    render_template(&tera, "location/rooms.html", &context)
}

#[post("/room/add")]
pub async fn add_room(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddRoomForm>,
) -> impl Responder {
    match location_service::add_room(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Аудитория добавлена.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при добавлении аудитории: {err}")).send(),
    }
    redirect("/rooms")
}

#[post("/room/save")]
pub async fn save_room(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveRoomForm>,
) -> impl Responder {
    match location_service::update_room(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Аудитория обновлена.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при сохранении аудитории: {err}")).send(),
    }
    redirect("/rooms")
}

#[post("/room/{id}/set_active")]
pub async fn set_room_active(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetActiveForm>,
) -> impl Responder {
    match location_service::set_room_active(repo.get_ref(), &user, id.into_inner(), form.active) {
        Ok(()) => FlashMessage::success("Статус аудитории обновлён.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка: {err}")).send(),
    }
    redirect("/rooms")
}

#[post("/room/{id}/delete")]
pub async fn delete_room(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match location_service::delete_room(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => FlashMessage::success("Аудитория удалена.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => FlashMessage::error(format!("Ошибка при удалении аудитории: {err}")).send(),
    }
    redirect("/rooms")
}
