//! Request and response payloads exchanged with the admin REST API.

pub mod auth;
pub mod ban;
pub mod envelope;
pub mod query;
