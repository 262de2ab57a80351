//! Binds filter, sort and paging controls of a list screen to its resource.
//!
//! Anything that changes what is listed sends the query back to page 1;
//! moving between pages keeps every other parameter. Keyword edits are not
//! searched until submitted.

use std::sync::Arc;

use crate::api::ListEndpoint;
use crate::domain::types::SortDirection;
use crate::dto::query::ListQuery;
use crate::http::ClientResult;
use crate::resource::{FetchOutcome, PaginatedResource, ResourceState};

pub struct ListPage<E: ListEndpoint> {
    resource: PaginatedResource<E>,
    query: E::Query,
}

impl<E: ListEndpoint> std::fmt::Debug for ListPage<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListPage")
            .field("query", &self.query)
            .field("resource", &self.resource)
            .finish()
    }
}

impl<E: ListEndpoint> ListPage<E> {
    pub fn new(endpoint: Arc<E>) -> Self {
        Self::with_query(endpoint, E::Query::default())
    }

    pub fn with_query(endpoint: Arc<E>, query: E::Query) -> Self {
        Self {
            resource: PaginatedResource::new(endpoint),
            query: query.normalized(),
        }
    }

    pub fn query(&self) -> &E::Query {
        &self.query
    }

    pub fn state(&self) -> ResourceState<E::Item> {
        self.resource.state()
    }

    pub fn resource(&self) -> &PaginatedResource<E> {
        &self.resource
    }

    /// First load when the screen opens.
    pub async fn mount(&mut self) -> ClientResult<FetchOutcome> {
        self.fetch().await
    }

    /// Search button.
    pub async fn search(&mut self) -> ClientResult<FetchOutcome> {
        self.restart().await
    }

    /// Enter in the keyword field.
    pub async fn submit_keyword(&mut self, keyword: impl Into<String>) -> ClientResult<FetchOutcome> {
        self.query.set_keyword(Some(keyword.into()));
        self.restart().await
    }

    /// Typing in the keyword field. Nothing is fetched.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.query.set_keyword(Some(keyword.into()));
    }

    /// Changes resource-specific filters, then reloads from page 1.
    pub async fn apply_filter<F>(&mut self, change: F) -> ClientResult<FetchOutcome>
    where
        F: FnOnce(&mut E::Query),
    {
        change(&mut self.query);
        self.restart().await
    }

    pub async fn set_size(&mut self, size: u32) -> ClientResult<FetchOutcome> {
        self.query.set_size(size);
        self.restart().await
    }

    /// Clicking a column header: the active column flips direction, a new one starts descending.
    pub async fn sort_by(
        &mut self,
        field: <E::Query as ListQuery>::SortField,
    ) -> ClientResult<FetchOutcome> {
        let (current, direction) = self.query.sort();
        let direction = if current == field {
            direction.toggled()
        } else {
            SortDirection::Desc
        };
        self.query.set_sort(field, direction);
        self.restart().await
    }

    /// Jumps to `page`; `None` when the page does not exist.
    pub async fn go_to_page(&mut self, page: u32) -> ClientResult<Option<FetchOutcome>> {
        let total_pages = self.resource.state().pagination.total_pages;
        if page == 0 || (total_pages > 0 && page > total_pages) {
            return Ok(None);
        }
        self.query.set_page(page);
        self.fetch().await.map(Some)
    }

    pub async fn next_page(&mut self) -> ClientResult<Option<FetchOutcome>> {
        let pagination = self.resource.state().pagination;
        if !pagination.has_next {
            return Ok(None);
        }
        self.go_to_page(pagination.page + 1).await
    }

    pub async fn previous_page(&mut self) -> ClientResult<Option<FetchOutcome>> {
        let pagination = self.resource.state().pagination;
        if !pagination.has_previous {
            return Ok(None);
        }
        self.go_to_page(pagination.page.saturating_sub(1)).await
    }

    /// Re-runs the current query unchanged.
    pub async fn retry(&mut self) -> ClientResult<FetchOutcome> {
        self.fetch().await
    }

    async fn restart(&mut self) -> ClientResult<FetchOutcome> {
        self.query.set_page(1);
        self.fetch().await
    }

    async fn fetch(&self) -> ClientResult<FetchOutcome> {
        self.resource.fetch(&self.query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::DomainStatus;
    use crate::dto::envelope::ApiResponse;
    use crate::dto::query::{DomainQuery, DomainSortField};
    use crate::pagination::Page;
    use crate::resource::tests::{ScriptedEndpoint, ok_page};

    fn page_on_third_of_five() -> (Arc<ScriptedEndpoint>, ListPage<ScriptedEndpoint>) {
        let endpoint = Arc::new(ScriptedEndpoint::default());
        let query = DomainQuery {
            page: 3,
            keyword: Some("shop".to_string()),
            status: Some(DomainStatus::Active),
            ..DomainQuery::default()
        };
        let page = ListPage::with_query(endpoint.clone(), query);
        (endpoint, page)
    }

    #[tokio::test]
    async fn filter_change_resets_to_first_page() {
        let (endpoint, mut page) = page_on_third_of_five();
        endpoint.reply_now(ok_page(vec![1], 3, 100));
        page.mount().await.unwrap();

        endpoint.reply_now(ok_page(vec![2], 1, 10));
        page.apply_filter(|q| q.status = Some(DomainStatus::Inactive))
            .await
            .unwrap();

        let sent = endpoint.queries.lock().clone();
        assert_eq!(sent[0].page, 3);
        assert_eq!(sent[1].page, 1);
        assert_eq!(sent[1].status, Some(DomainStatus::Inactive));
        assert_eq!(sent[1].keyword.as_deref(), Some("shop"));
    }

    #[tokio::test]
    async fn navigation_preserves_filters() {
        let (endpoint, mut page) = page_on_third_of_five();
        endpoint.reply_now(ok_page(vec![1], 3, 100));
        page.mount().await.unwrap();

        endpoint.reply_now(ok_page(vec![2], 4, 100));
        assert_eq!(
            page.next_page().await.unwrap(),
            Some(FetchOutcome::Applied)
        );
        endpoint.reply_now(ok_page(vec![3], 3, 100));
        page.previous_page().await.unwrap();

        let sent = endpoint.queries.lock().clone();
        assert_eq!(sent[1].page, 4);
        assert_eq!(sent[2].page, 3);
        for query in &sent {
            assert_eq!(query.keyword.as_deref(), Some("shop"));
            assert_eq!(query.status, Some(DomainStatus::Active));
            assert_eq!(query.sort_dir, SortDirection::Desc);
        }
    }

    #[tokio::test]
    async fn navigation_past_the_edges_is_a_no_op() {
        let endpoint = Arc::new(ScriptedEndpoint::default());
        let mut page = ListPage::new(endpoint.clone());
        endpoint.reply_now(ok_page(vec![1, 2], 1, 2));
        page.mount().await.unwrap();

        assert_eq!(page.previous_page().await.unwrap(), None);
        assert_eq!(page.next_page().await.unwrap(), None);
        assert_eq!(page.go_to_page(0).await.unwrap(), None);
        assert_eq!(page.go_to_page(5).await.unwrap(), None);
        assert_eq!(endpoint.queries.lock().len(), 1);
    }

    #[tokio::test]
    async fn previous_from_malformed_page_zero_is_a_no_op() {
        let endpoint = Arc::new(ScriptedEndpoint::default());
        let mut page = ListPage::new(endpoint.clone());
        let mut broken = Page::new(vec![1], 1, 20, 40);
        broken.page = 0;
        broken.has_previous = true;
        endpoint.reply_now(Ok(ApiResponse::ok(broken, "ok")));
        page.mount().await.unwrap();

        assert_eq!(page.previous_page().await.unwrap(), None);
        assert_eq!(endpoint.queries.lock().len(), 1);
    }

    #[tokio::test]
    async fn keyword_is_only_searched_when_submitted() {
        let (endpoint, mut page) = page_on_third_of_five();
        page.set_keyword("example");
        assert!(endpoint.queries.lock().is_empty());

        endpoint.reply_now(ok_page(vec![1, 2], 1, 2));
        page.search().await.unwrap();
        endpoint.reply_now(ok_page(vec![1], 1, 1));
        page.submit_keyword("  example.org ").await.unwrap();

        let sent = endpoint.queries.lock().clone();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].keyword.as_deref(), Some("example"));
        assert_eq!(sent[0].page, 1);
        assert_eq!(sent[1].keyword.as_deref(), Some("example.org"));
    }

    #[tokio::test]
    async fn sorting_toggles_and_resets_page() {
        let (endpoint, mut page) = page_on_third_of_five();
        for _ in 0..3 {
            endpoint.reply_now(ok_page(vec![], 1, 0));
        }

        page.sort_by(DomainSortField::CreateTime).await.unwrap();
        page.sort_by(DomainSortField::CreateTime).await.unwrap();
        page.sort_by(DomainSortField::FullDomain).await.unwrap();

        let sent = endpoint.queries.lock().clone();
        let sorts: Vec<_> = sent.iter().map(|q| (q.sort_by, q.sort_dir, q.page)).collect();
        assert_eq!(
            sorts,
            vec![
                (DomainSortField::CreateTime, SortDirection::Asc, 1),
                (DomainSortField::CreateTime, SortDirection::Desc, 1),
                (DomainSortField::FullDomain, SortDirection::Desc, 1),
            ]
        );
    }

    #[tokio::test]
    async fn size_change_is_clamped_and_resets_page() {
        let (endpoint, mut page) = page_on_third_of_five();
        endpoint.reply_now(ok_page(vec![], 1, 0));
        page.set_size(5).await.unwrap();

        let sent = endpoint.queries.lock().clone();
        assert_eq!(sent[0].size, 20);
        assert_eq!(sent[0].page, 1);
    }

    #[tokio::test]
    async fn retry_repeats_the_failed_query() {
        let (endpoint, mut page) = page_on_third_of_five();
        endpoint.reply_now(Err(crate::http::ClientError::Timeout));
        assert!(page.mount().await.is_err());
        assert_eq!(page.state().error.as_deref(), Some("request timed out"));

        endpoint.reply_now(ok_page(vec![4], 3, 60));
        page.retry().await.unwrap();

        let sent = endpoint.queries.lock().clone();
        assert_eq!(sent[0], sent[1]);
        let state = page.state();
        assert_eq!(state.items, vec![4]);
        assert!(state.error.is_none());
    }
}
