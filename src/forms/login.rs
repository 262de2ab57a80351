use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::dto::auth::LoginRequest;
use crate::forms::FormError;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Credentials entered on the login screen.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "not_blank", message = "username is required"))]
    pub username: String,
    #[validate(custom(function = "not_blank", message = "password is required"))]
    pub password: String,
}

impl TryFrom<LoginForm> for LoginRequest {
    type Error = FormError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            username: form.username.trim().to_string(),
            password: form.password,
        })
    }
}
