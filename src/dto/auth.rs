use serde::{Deserialize, Serialize};

use crate::domain::admin::Admin;

/// Body of `POST /admin/login`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload of a successful login.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub admin: Admin,
    pub token: String,
}
