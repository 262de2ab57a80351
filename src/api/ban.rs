use crate::domain::types::UserId;
use crate::domain::user_ban::UserBanDetails;
use crate::dto::ban::{BanUserRequest, UnbanUserRequest};
use crate::dto::envelope::ApiResponse;
use crate::forms::ban::BanForm;
use crate::http::{ClientResult, HttpClient};

#[derive(Clone, Debug)]
pub struct BanApi {
    http: HttpClient,
}

impl BanApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Bans the user; the reason is checked before anything is sent.
    pub async fn ban_user(&self, form: BanForm) -> ClientResult<ApiResponse<String>> {
        let request = BanUserRequest::try_from(form)?;
        self.http.post("admin/users/ban", &request).await
    }

    pub async fn unban_user(&self, user_id: UserId) -> ClientResult<ApiResponse<String>> {
        self.http
            .post("admin/users/unban", &UnbanUserRequest { user_id })
            .await
    }

    pub async fn ban_status(&self, user_id: UserId) -> ClientResult<ApiResponse<bool>> {
        self.http
            .get(&format!("admin/users/{user_id}/ban-status"))
            .await
    }

    pub async fn ban_details(&self, user_id: UserId) -> ClientResult<ApiResponse<UserBanDetails>> {
        self.http
            .get(&format!("admin/users/{user_id}/ban-details"))
            .await
    }
}
