use actix_web::{Responder, get};

use crate::routes::ok;

#[get("/health")]
pub async fn health() -> impl Responder {
    ok("UP", "OK")
}
