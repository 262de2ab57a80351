//! Typed bindings for the admin REST endpoints.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::dto::envelope::ApiResponse;
use crate::dto::query::ListQuery;
use crate::http::{ClientResult, HttpClient, Navigator};
use crate::models::config::ClientConfig;
use crate::pagination::Page;
use crate::session::SessionStore;
use crate::storage::{ClientStorage, FileStorage, MemoryStorage};

pub mod admin;
pub mod ban;
pub mod dns_records;
pub mod domains;
pub mod users;

pub use admin::AdminApi;
pub use ban::BanApi;
pub use dns_records::DnsRecordApi;
pub use domains::DomainApi;
pub use users::UserApi;

/// A list endpoint that answers a query with one page of items.
#[async_trait]
pub trait ListEndpoint: Send + Sync {
    type Query: ListQuery;
    type Item: Clone + Debug + Send + Sync + 'static;

    async fn fetch_page(&self, query: &Self::Query)
    -> ClientResult<ApiResponse<Page<Self::Item>>>;
}

/// Application context of the console: one session, one client, every API.
#[derive(Clone, Debug)]
pub struct AdminConsole {
    pub session: Arc<SessionStore>,
    pub http: HttpClient,
    pub admin: AdminApi,
    pub users: UserApi,
    pub domains: DomainApi,
    pub dns_records: DnsRecordApi,
    pub bans: BanApi,
}

impl AdminConsole {
    /// Opens storage, rehydrates the session and wires the API bindings.
    pub fn new(config: &ClientConfig, navigator: Arc<dyn Navigator>) -> ClientResult<Self> {
        let storage: Arc<dyn ClientStorage> = match &config.storage_path {
            Some(path) => Arc::new(FileStorage::open(path)?),
            None => Arc::new(MemoryStorage::new()),
        };
        Self::with_storage(config, storage, navigator)
    }

    pub fn with_storage(
        config: &ClientConfig,
        storage: Arc<dyn ClientStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        let session = Arc::new(SessionStore::new(storage));
        if session.initialize_from_storage() {
            log::info!("Restored admin session from storage");
        }
        let http = HttpClient::new(config, session.clone(), navigator)?;

        Ok(Self {
            admin: AdminApi::new(http.clone()),
            users: UserApi::new(http.clone()),
            domains: DomainApi::new(http.clone()),
            dns_records: DnsRecordApi::new(http.clone()),
            bans: BanApi::new(http.clone()),
            session,
            http,
        })
    }
}
