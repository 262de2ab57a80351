//! The ban dialog: a preset reason or free text, capped at 500 characters.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::types::{BanReason, MAX_BAN_REASON_LEN, UserId};
use crate::dto::ban::BanUserRequest;
use crate::forms::FormError;

/// Preset selected when the administrator types a custom reason.
pub const OTHER_REASON: &str = "Other";

/// Reasons offered in the ban dialog.
pub const BAN_REASON_PRESETS: &[&str] = &[
    "Violation of the user agreement",
    "Malicious use of the service",
    "Publishing illegal content",
    "Attacking the platform",
    "Repeated policy violations",
    OTHER_REASON,
];

fn trimmed_within_limit(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() > MAX_BAN_REASON_LEN {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct BanForm {
    pub user_id: i64,
    /// One of [`BAN_REASON_PRESETS`].
    pub reason: String,
    #[validate(custom(function = "trimmed_within_limit"))]
    pub custom_reason: Option<String>,
}

impl BanForm {
    /// Reason text that will be submitted.
    pub fn final_reason(&self) -> String {
        if self.reason == OTHER_REASON {
            self.custom_reason
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string()
        } else {
            self.reason.clone()
        }
    }
}

impl TryFrom<BanForm> for BanUserRequest {
    type Error = FormError;

    fn try_from(form: BanForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let user_id = UserId::new(form.user_id).map_err(|_| FormError::InvalidUserId)?;
        let ban_reason = BanReason::new(form.final_reason()).map_err(FormError::InvalidBanReason)?;
        Ok(Self {
            user_id,
            ban_reason,
        })
    }
}
