//! List state shared by every paginated console screen.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::api::ListEndpoint;
use crate::http::{ClientError, ClientResult};
use crate::pagination::PageInfo;

/// What a list screen renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceState<T> {
    pub loading: bool,
    pub items: Vec<T>,
    pub pagination: PageInfo,
    /// Message of the last failed fetch, cleared when a new one starts.
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            items: Vec::new(),
            pagination: PageInfo::default(),
            error: None,
        }
    }
}

/// Whether a completed fetch was committed to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer fetch was started meanwhile; this response was dropped.
    Stale,
}

/// Loading flag, items and pagination of one list endpoint.
///
/// Every fetch takes a generation number and only the newest generation may
/// write to the state, so a slow response can never overwrite a later one.
pub struct PaginatedResource<E: ListEndpoint> {
    endpoint: Arc<E>,
    state: Mutex<ResourceState<E::Item>>,
    generation: AtomicU64,
    last_query: Mutex<Option<E::Query>>,
}

impl<E: ListEndpoint> std::fmt::Debug for PaginatedResource<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedResource")
            .field("state", &*self.state.lock())
            .field("generation", &self.generation.load(Ordering::Relaxed))
            .finish()
    }
}

impl<E: ListEndpoint> PaginatedResource<E> {
    pub fn new(endpoint: Arc<E>) -> Self {
        Self {
            endpoint,
            state: Mutex::new(ResourceState::default()),
            generation: AtomicU64::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn state(&self) -> ResourceState<E::Item> {
        self.state.lock().clone()
    }

    pub fn last_query(&self) -> Option<E::Query> {
        self.last_query.lock().clone()
    }

    /// Loads one page. On failure the previous items stay in place.
    pub async fn fetch(&self, query: &E::Query) -> ClientResult<FetchOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        *self.last_query.lock() = Some(query.clone());
        {
            let mut state = self.state.lock();
            state.loading = true;
            state.error = None;
        }

        let result = match self.endpoint.fetch_page(query).await {
            Ok(response) if response.is_success() => Ok(response.data),
            Ok(response) => Err(ClientError::Business {
                code: response.code,
                message: response.message,
            }),
            Err(e) => Err(e),
        };

        if self.generation.load(Ordering::Acquire) != generation {
            log::debug!("Dropping response of superseded fetch #{generation}");
            return Ok(FetchOutcome::Stale);
        }

        let mut state = self.state.lock();
        state.loading = false;
        match result {
            Ok(page) => {
                let (items, pagination) = page.into_parts();
                state.items = items;
                state.pagination = pagination;
                Ok(FetchOutcome::Applied)
            }
            Err(e) => {
                log::error!("Failed to load list: {e}");
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Re-issues the most recent query, or the default one if none was made.
    pub async fn refresh(&self) -> ClientResult<FetchOutcome> {
        let query = self.last_query().unwrap_or_default();
        self.fetch(&query).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use super::*;
    use crate::dto::envelope::ApiResponse;
    use crate::dto::query::DomainQuery;
    use crate::pagination::Page;

    pub(crate) type Reply = ClientResult<ApiResponse<Page<u32>>>;

    /// Endpoint answering with whatever the test pushes, in call order.
    #[derive(Default)]
    pub(crate) struct ScriptedEndpoint {
        replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
        pub(crate) queries: Mutex<Vec<DomainQuery>>,
    }

    impl ScriptedEndpoint {
        /// Queues a reply slot and returns the sender that fills it.
        pub(crate) fn expect(&self) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.replies.lock().push_back(rx);
            tx
        }

        pub(crate) fn reply_now(&self, reply: Reply) {
            let _ = self.expect().send(reply);
        }
    }

    #[async_trait]
    impl ListEndpoint for ScriptedEndpoint {
        type Query = DomainQuery;
        type Item = u32;

        async fn fetch_page(&self, query: &DomainQuery) -> Reply {
            self.queries.lock().push(query.clone());
            let reply = self.replies.lock().pop_front();
            match reply {
                Some(rx) => rx.await.unwrap_or_else(|_| {
                    Err(ClientError::Decode("reply dropped".to_string()))
                }),
                None => Err(ClientError::Decode("unexpected call".to_string())),
            }
        }
    }

    pub(crate) fn ok_page(items: Vec<u32>, page: u32, total: u64) -> Reply {
        Ok(ApiResponse::ok(Page::new(items, page, 20, total), "ok"))
    }

    #[tokio::test]
    async fn successful_fetch_replaces_items_and_clears_loading() {
        let endpoint = Arc::new(ScriptedEndpoint::default());
        endpoint.reply_now(ok_page(vec![1, 2, 3], 1, 3));
        let resource = PaginatedResource::new(endpoint);

        let outcome = resource.fetch(&DomainQuery::default()).await.unwrap();

        assert_eq!(outcome, FetchOutcome::Applied);
        let state = resource.state();
        assert_eq!(state.items, vec![1, 2, 3]);
        assert!(!state.loading);
        assert_eq!(state.pagination.total, 3);
        assert_eq!(state.pagination.total_pages, 1);
        assert!(!state.pagination.has_next);
    }

    #[tokio::test]
    async fn failure_keeps_previous_items_and_records_error() {
        let endpoint = Arc::new(ScriptedEndpoint::default());
        endpoint.reply_now(ok_page(vec![7, 8], 1, 2));
        endpoint.reply_now(Err(ClientError::Business {
            code: 500,
            message: "backend unavailable".to_string(),
        }));
        let resource = PaginatedResource::new(endpoint);

        resource.fetch(&DomainQuery::default()).await.unwrap();
        let error = resource.refresh().await.unwrap_err();

        assert!(matches!(error, ClientError::Business { code: 500, .. }));
        let state = resource.state();
        assert_eq!(state.items, vec![7, 8]);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("backend unavailable"));
    }

    #[tokio::test]
    async fn non_success_envelope_is_a_business_error() {
        let endpoint = Arc::new(ScriptedEndpoint::default());
        endpoint.reply_now(Ok(ApiResponse::with_code(
            400,
            Page::new(vec![9], 1, 20, 1),
            "bad params",
        )));
        let resource = PaginatedResource::new(endpoint);

        let error = resource.fetch(&DomainQuery::default()).await.unwrap_err();
        assert!(matches!(error, ClientError::Business { code: 400, .. }));
        assert!(resource.state().items.is_empty());
    }

    #[tokio::test]
    async fn slow_stale_response_does_not_overwrite_newer_one() {
        let endpoint = Arc::new(ScriptedEndpoint::default());
        let slow = endpoint.expect();
        let fast = endpoint.expect();
        let resource = PaginatedResource::new(endpoint);

        let first = DomainQuery::default();
        let mut second = DomainQuery::default();
        second.keyword = Some("example".to_string());

        let (old, new, ()) = tokio::join!(resource.fetch(&first), resource.fetch(&second), async {
            let _ = fast.send(ok_page(vec![2], 1, 1));
            tokio::task::yield_now().await;
            let _ = slow.send(ok_page(vec![1, 1, 1], 1, 3));
        });

        assert_eq!(old.unwrap(), FetchOutcome::Stale);
        assert_eq!(new.unwrap(), FetchOutcome::Applied);
        let state = resource.state();
        assert_eq!(state.items, vec![2]);
        assert!(!state.loading);
        assert_eq!(resource.last_query(), Some(second));
    }

    #[tokio::test]
    async fn loading_is_set_while_request_is_in_flight() {
        let endpoint = Arc::new(ScriptedEndpoint::default());
        let reply = endpoint.expect();
        let resource = PaginatedResource::new(endpoint);

        let query = DomainQuery::default();
        let (outcome, ()) = tokio::join!(resource.fetch(&query), async {
            tokio::task::yield_now().await;
            assert!(resource.state().loading);
            let _ = reply.send(ok_page(vec![], 1, 0));
        });

        assert_eq!(outcome.unwrap(), FetchOutcome::Applied);
        assert!(!resource.state().loading);
    }
}
