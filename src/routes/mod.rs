//! Actix-web handlers of the mock admin API.
//!
//! Every body, including errors, is an [`ApiResponse`] envelope whose `code`
//! mirrors the HTTP status.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use serde::Serialize;
use thiserror::Error;

use crate::dto::envelope::ApiResponse;
use crate::services::ServiceError;
use crate::services::auth::{self, Claims, JwtKeys};

pub mod admin;
pub mod bans;
pub mod health;
pub mod lists;

/// Claims of the admin that signed the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin(pub Claims);

/// Missing or rejected bearer token.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct AuthError(&'static str);

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized().json(ApiResponse::error(401, self.0))
    }
}

fn authenticate_request(req: &HttpRequest) -> Result<AuthenticatedAdmin, AuthError> {
    let keys = req
        .app_data::<web::Data<JwtKeys>>()
        .ok_or(AuthError("Authentication is not configured"))?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthError("Missing bearer token"))?;

    auth::authenticate(keys, token)
        .map(AuthenticatedAdmin)
        .map_err(|_| AuthError("Invalid or expired token"))
}

impl FromRequest for AuthenticatedAdmin {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate_request(req))
    }
}

/// `200` envelope around `data`.
pub fn ok<T: Serialize>(data: T, message: &str) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(data, message))
}

/// Maps a service failure onto its HTTP status and an error envelope.
pub fn error_response(err: ServiceError) -> HttpResponse {
    let status = match &err {
        ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) => StatusCode::BAD_REQUEST,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        log::error!("Request failed: {err}");
    }
    HttpResponse::build(status).json(ApiResponse::error(
        i32::from(status.as_u16()),
        err.to_string(),
    ))
}

/// Registers every endpoint under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(health::health)
            .service(admin::login)
            .service(lists::list_users)
            .service(lists::list_user_domains)
            .service(lists::list_dns_records)
            .service(bans::ban_user)
            .service(bans::unban_user)
            .service(bans::ban_status)
            .service(bans::ban_details)
            .service(admin::get_admin),
    );
}

/// JSON extractor settings that answer malformed bodies with a 400 envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid request body: {err}");
        let response = HttpResponse::BadRequest().json(ApiResponse::error(400, message));
        InternalError::from_response(err, response).into()
    })
}
