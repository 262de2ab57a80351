use async_trait::async_trait;

use crate::api::ListEndpoint;
use crate::domain::dns_record::UserDnsRecordInfo;
use crate::dto::envelope::ApiResponse;
use crate::dto::query::{DnsRecordQuery, ListQuery};
use crate::http::{ClientResult, HttpClient};
use crate::pagination::Page;

/// `POST /admin/users/dns-records`.
#[derive(Clone, Debug)]
pub struct DnsRecordApi {
    http: HttpClient,
}

impl DnsRecordApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ListEndpoint for DnsRecordApi {
    type Query = DnsRecordQuery;
    type Item = UserDnsRecordInfo;

    async fn fetch_page(
        &self,
        query: &DnsRecordQuery,
    ) -> ClientResult<ApiResponse<Page<UserDnsRecordInfo>>> {
        self.http
            .post("admin/users/dns-records", &query.normalized())
            .await
    }
}
