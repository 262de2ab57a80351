use async_trait::async_trait;

use crate::api::ListEndpoint;
use crate::domain::user::UserInfo;
use crate::dto::envelope::ApiResponse;
use crate::dto::query::{ListQuery, UserQuery};
use crate::http::{ClientResult, HttpClient};
use crate::pagination::Page;

/// `POST /admin/users/info`.
#[derive(Clone, Debug)]
pub struct UserApi {
    http: HttpClient,
}

impl UserApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ListEndpoint for UserApi {
    type Query = UserQuery;
    type Item = UserInfo;

    async fn fetch_page(&self, query: &UserQuery) -> ClientResult<ApiResponse<Page<UserInfo>>> {
        self.http
            .post("admin/users/info", &query.normalized())
            .await
    }
}
