use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::AdminId;

/// Administrator account as returned by `POST /admin/login`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: AdminId,
    pub username: String,
    pub email: String,
    /// Free-form role label, `ADMIN` for every account the backend issues today.
    pub role: String,
    pub create_time: NaiveDateTime,
    pub update_time: NaiveDateTime,
}
