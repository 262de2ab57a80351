use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{DomainId, DomainStatus, UserId};

/// A subdomain registered by a platform user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDomainInfo {
    pub id: DomainId,
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    /// Prefix chosen by the user, e.g. `blog`.
    pub subdomain: String,
    /// Parent zone, e.g. `example.com`.
    pub domain: String,
    /// `subdomain.domain`.
    pub full_domain: String,
    pub status: DomainStatus,
    pub remark: String,
    pub create_time: NaiveDateTime,
    pub update_time: NaiveDateTime,
}

impl UserDomainInfo {
    /// Case-insensitive keyword match over the searchable text columns.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        [
            &self.username,
            &self.email,
            &self.subdomain,
            &self.domain,
            &self.full_domain,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&keyword))
    }
}
