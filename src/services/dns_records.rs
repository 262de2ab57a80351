use crate::domain::dns_record::UserDnsRecordInfo;
use crate::dto::query::{DnsRecordQuery, DnsRecordSortField, ListQuery};
use crate::pagination::Page;
use crate::repository::DnsRecordReader;
use crate::services::{ServiceError, ServiceResult, directed};

fn matches(query: &DnsRecordQuery, record: &UserDnsRecordInfo) -> bool {
    query.user_id.is_none_or(|id| record.user_id == id)
        && query
            .record_type
            .is_none_or(|record_type| record.record_type == record_type)
        && query.status.is_none_or(|status| record.status == status)
        && query
            .sync_status
            .is_none_or(|sync| record.sync_status == sync)
        && query
            .domain
            .as_deref()
            .is_none_or(|zone| record.domain == zone || record.full_domain == zone)
        && query
            .keyword
            .as_deref()
            .is_none_or(|keyword| record.matches_keyword(keyword))
}

/// Filters, sorts and paginates DNS records across all users.
pub fn list_dns_records<R>(
    repo: &R,
    query: DnsRecordQuery,
) -> ServiceResult<Page<UserDnsRecordInfo>>
where
    R: DnsRecordReader + ?Sized,
{
    let query = query.normalized();

    let mut records = repo.list_dns_records().map_err(|e| {
        log::error!("Failed to list DNS records: {e}");
        ServiceError::from(e)
    })?;
    records.retain(|record| matches(&query, record));

    records.sort_by(|a, b| {
        let ordering = match query.sort_by {
            DnsRecordSortField::CreateTime => a.create_time.cmp(&b.create_time),
            DnsRecordSortField::UpdateTime => a.update_time.cmp(&b.update_time),
            DnsRecordSortField::Name => a.name.cmp(&b.name),
            DnsRecordSortField::Type => a.record_type.as_str().cmp(b.record_type.as_str()),
            DnsRecordSortField::Status => a.status.as_str().cmp(b.status.as_str()),
        };
        directed(ordering, query.sort_dir)
    });

    Ok(Page::slice(records, query.page, query.size))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::types::{DnsRecordType, SyncStatus};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::repository::seed::seed_data;

    #[test]
    fn filters_by_type_and_sync_status() {
        let mut repo = MockRepository::new();
        repo.expect_list_dns_records()
            .times(1)
            .returning(|| Ok(seed_data().unwrap().dns_records));

        let query = DnsRecordQuery {
            record_type: Some(DnsRecordType::A),
            sync_status: Some(SyncStatus::Success),
            ..DnsRecordQuery::default()
        };
        let page = list_dns_records(&repo, query).unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.content[0].value, "203.0.113.10");
    }

    #[test]
    fn repository_failure_is_internal() {
        let mut repo = MockRepository::new();
        repo.expect_list_dns_records()
            .returning(|| Err(RepositoryError::Unexpected("disk on fire".to_string())));

        let result = list_dns_records(&repo, DnsRecordQuery::default());
        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }
}
