//! Admin sign-in and bearer token verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::admin::Admin;
use crate::domain::types::AdminId;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::repository::AdminReader;
use crate::services::{ServiceError, ServiceResult};

/// Payload of every token the server issues.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Admin id.
    pub sub: String,
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn admin_id(&self) -> ServiceResult<AdminId> {
        let id = self
            .sub
            .parse::<i64>()
            .map_err(|_| ServiceError::Unauthorized)?;
        AdminId::new(id).map_err(|_| ServiceError::Unauthorized)
    }
}

/// HS256 signing and verification keys.
#[derive(Clone)]
pub struct JwtKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys").field("ttl", &self.ttl).finish()
    }
}

impl JwtKeys {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::hours(ttl_hours),
        }
    }

    pub fn issue(&self, admin: &Admin) -> ServiceResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: admin.id.to_string(),
            username: admin.username.clone(),
            role: admin.role.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::Internal(format!("Failed to encode token: {e}")))
    }

    pub fn decode(&self, token: &str) -> ServiceResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("Rejected bearer token: {e}");
                ServiceError::Unauthorized
            })
    }
}

/// Checks the credentials and issues a token for the admin.
pub fn login<R>(repo: &R, keys: &JwtKeys, request: LoginRequest) -> ServiceResult<LoginResponse>
where
    R: AdminReader + ?Sized,
{
    let username = request.username.trim();
    if username.is_empty() || request.password.is_empty() {
        return Err(ServiceError::Form(
            "Username and password are required".to_string(),
        ));
    }

    let admin = repo
        .verify_admin_credentials(username, &request.password)
        .map_err(|e| {
            log::error!("Failed to check admin credentials: {e}");
            ServiceError::from(e)
        })?
        .ok_or_else(|| ServiceError::Form("Invalid username or password".to_string()))?;

    let token = keys.issue(&admin)?;
    log::info!("Admin {} signed in", admin.username);

    Ok(LoginResponse { admin, token })
}

/// Verifies a bearer token.
pub fn authenticate(keys: &JwtKeys, token: &str) -> ServiceResult<Claims> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ServiceError::Unauthorized);
    }
    keys.decode(token)
}
