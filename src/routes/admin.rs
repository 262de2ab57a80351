use actix_web::{Responder, get, post, web};

use crate::dto::auth::LoginRequest;
use crate::repository::InMemoryRepository;
use crate::routes::{AuthenticatedAdmin, error_response, ok};
use crate::services::admins as admins_service;
use crate::services::auth::{self as auth_service, JwtKeys};

#[post("/admin/login")]
pub async fn login(
    repo: web::Data<InMemoryRepository>,
    keys: web::Data<JwtKeys>,
    web::Json(request): web::Json<LoginRequest>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), keys.get_ref(), request) {
        Ok(response) => ok(response, "Login successful"),
        Err(err) => error_response(err),
    }
}

#[get("/admin/{id}")]
pub async fn get_admin(
    _admin: AuthenticatedAdmin,
    id: web::Path<i64>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match admins_service::get_admin(repo.get_ref(), id.into_inner()) {
        Ok(admin) => ok(admin, "OK"),
        Err(err) => error_response(err),
    }
}

