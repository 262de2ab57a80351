use async_trait::async_trait;

use crate::api::ListEndpoint;
use crate::domain::user_domain::UserDomainInfo;
use crate::dto::envelope::ApiResponse;
use crate::dto::query::{DomainQuery, ListQuery};
use crate::http::{ClientResult, HttpClient};
use crate::pagination::Page;

/// `POST /admin/users/domains`.
#[derive(Clone, Debug)]
pub struct DomainApi {
    http: HttpClient,
}

impl DomainApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ListEndpoint for DomainApi {
    type Query = DomainQuery;
    type Item = UserDomainInfo;

    async fn fetch_page(
        &self,
        query: &DomainQuery,
    ) -> ClientResult<ApiResponse<Page<UserDomainInfo>>> {
        self.http
            .post("admin/users/domains", &query.normalized())
            .await
    }
}
