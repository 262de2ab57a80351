use serde::{Deserialize, Serialize};

use crate::domain::types::{BanReason, UserId};

/// Body of `POST /admin/users/ban`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BanUserRequest {
    pub user_id: UserId,
    pub ban_reason: BanReason,
}

/// Body of `POST /admin/users/unban`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnbanUserRequest {
    pub user_id: UserId,
}
