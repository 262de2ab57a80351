use crate::domain::user_domain::UserDomainInfo;
use crate::dto::query::{DomainQuery, DomainSortField, ListQuery};
use crate::pagination::Page;
use crate::repository::DomainReader;
use crate::services::{ServiceError, ServiceResult, directed};

fn matches(query: &DomainQuery, domain: &UserDomainInfo) -> bool {
    query.user_id.is_none_or(|id| domain.user_id == id)
        && query.status.is_none_or(|status| domain.status == status)
        && query
            .domain
            .as_deref()
            .is_none_or(|zone| domain.domain == zone)
        && query
            .keyword
            .as_deref()
            .is_none_or(|keyword| domain.matches_keyword(keyword))
}

/// Filters, sorts and paginates the subdomains registered by users.
pub fn list_user_domains<R>(repo: &R, query: DomainQuery) -> ServiceResult<Page<UserDomainInfo>>
where
    R: DomainReader + ?Sized,
{
    let query = query.normalized();

    let mut domains = repo.list_user_domains().map_err(|e| {
        log::error!("Failed to list user domains: {e}");
        ServiceError::from(e)
    })?;
    domains.retain(|domain| matches(&query, domain));

    domains.sort_by(|a, b| {
        let ordering = match query.sort_by {
            DomainSortField::CreateTime => a.create_time.cmp(&b.create_time),
            DomainSortField::UpdateTime => a.update_time.cmp(&b.update_time),
            DomainSortField::FullDomain => a.full_domain.cmp(&b.full_domain),
            DomainSortField::Status => a.status.as_str().cmp(b.status.as_str()),
        };
        directed(ordering, query.sort_dir)
    });

    Ok(Page::slice(domains, query.page, query.size))
}
