use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{DnsRecordId, DnsRecordStatus, DnsRecordType, DomainId, SyncStatus, UserId};

/// DNS record attached to one of a user's subdomains.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDnsRecordInfo {
    pub id: DnsRecordId,
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub subdomain_id: DomainId,
    pub subdomain: String,
    pub domain: String,
    pub full_domain: String,
    /// Identifier assigned by the upstream DNS provider.
    pub record_id: i64,
    /// Host record (`@`, `www`, ...).
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub value: String,
    pub line: String,
    pub line_id: String,
    pub ttl: u32,
    pub mx: Option<u16>,
    pub weight: Option<u16>,
    pub status: DnsRecordStatus,
    pub remark: String,
    pub monitor_status: Option<String>,
    pub updated_on: String,
    pub sync_status: SyncStatus,
    pub sync_error: Option<String>,
    pub create_time: NaiveDateTime,
    pub update_time: NaiveDateTime,
}

impl UserDnsRecordInfo {
    /// Case-insensitive keyword match over owner, host and value columns.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        [
            &self.username,
            &self.email,
            &self.full_domain,
            &self.name,
            &self.value,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&keyword))
    }
}
