use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{UserId, UserRole};

/// Row of the users list screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub create_time: NaiveDateTime,
    pub update_time: NaiveDateTime,
    pub domain_count: u32,
    pub dns_record_count: u32,
    pub last_login_time: Option<NaiveDateTime>,
    pub status: Option<String>,
}

impl UserInfo {
    /// Case-insensitive keyword match over username and email.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.username.to_lowercase().contains(&keyword)
            || self.email.to_lowercase().contains(&keyword)
    }
}
