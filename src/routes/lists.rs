//! The three paginated list endpoints. Queries travel as JSON bodies.

use actix_web::{Responder, post, web};

use crate::dto::query::{DnsRecordQuery, DomainQuery, UserQuery};
use crate::repository::InMemoryRepository;
use crate::routes::{AuthenticatedAdmin, error_response, ok};
use crate::services::{dns_records, domains, users};

#[post("/admin/users/info")]
pub async fn list_users(
    _admin: AuthenticatedAdmin,
    repo: web::Data<InMemoryRepository>,
    web::Json(query): web::Json<UserQuery>,
) -> impl Responder {
    match users::list_users(repo.get_ref(), query) {
        Ok(page) => ok(page, "Users loaded"),
        Err(err) => error_response(err),
    }
}

#[post("/admin/users/domains")]
pub async fn list_user_domains(
    _admin: AuthenticatedAdmin,
    repo: web::Data<InMemoryRepository>,
    web::Json(query): web::Json<DomainQuery>,
) -> impl Responder {
    match domains::list_user_domains(repo.get_ref(), query) {
        Ok(page) => ok(page, "User domains loaded"),
        Err(err) => error_response(err),
    }
}

#[post("/admin/users/dns-records")]
pub async fn list_dns_records(
    _admin: AuthenticatedAdmin,
    repo: web::Data<InMemoryRepository>,
    web::Json(query): web::Json<DnsRecordQuery>,
) -> impl Responder {
    match dns_records::list_dns_records(repo.get_ref(), query) {
        Ok(page) => ok(page, "DNS records loaded"),
        Err(err) => error_response(err),
    }
}
