//! Domain entities exchanged with the admin REST API.

pub mod admin;
pub mod dns_record;
pub mod types;
pub mod user;
pub mod user_ban;
pub mod user_domain;
