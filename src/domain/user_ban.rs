use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AdminId, UserId};

/// Ban state of a single user as shown in the ban dialog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserBanDetails {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub status: String,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub banned_by: Option<AdminId>,
    pub ban_time: Option<NaiveDateTime>,
}
