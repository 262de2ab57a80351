use actix_web::{Responder, get, post, web};

use crate::dto::ban::{BanUserRequest, UnbanUserRequest};
use crate::repository::InMemoryRepository;
use crate::routes::{AuthenticatedAdmin, error_response, ok};
use crate::services::bans as bans_service;

#[post("/admin/users/ban")]
pub async fn ban_user(
    admin: AuthenticatedAdmin,
    repo: web::Data<InMemoryRepository>,
    web::Json(request): web::Json<BanUserRequest>,
) -> impl Responder {
    let admin_id = match admin.0.admin_id() {
        Ok(id) => id,
        Err(err) => return error_response(err),
    };
    match bans_service::ban_user(repo.get_ref(), admin_id, request) {
        Ok(_) => ok("User banned", "User banned"),
        Err(err) => error_response(err),
    }
}

#[post("/admin/users/unban")]
pub async fn unban_user(
    _admin: AuthenticatedAdmin,
    repo: web::Data<InMemoryRepository>,
    web::Json(request): web::Json<UnbanUserRequest>,
) -> impl Responder {
    match bans_service::unban_user(repo.get_ref(), request) {
        Ok(_) => ok("User unbanned", "User unbanned"),
        Err(err) => error_response(err),
    }
}

#[get("/admin/users/{id}/ban-status")]
pub async fn ban_status(
    _admin: AuthenticatedAdmin,
    id: web::Path<i64>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match bans_service::ban_status(repo.get_ref(), id.into_inner()) {
        Ok(banned) => ok(banned, "OK"),
        Err(err) => error_response(err),
    }
}

#[get("/admin/users/{id}/ban-details")]
pub async fn ban_details(
    _admin: AuthenticatedAdmin,
    id: web::Path<i64>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match bans_service::ban_details(repo.get_ref(), id.into_inner()) {
        Ok(details) => ok(details, "OK"),
        Err(err) => error_response(err),
    }
}
