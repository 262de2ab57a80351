//! Query parameter objects sent to the list endpoints.
//!
//! All three resources share the same paging/sorting/keyword shape and differ
//! only in their filters and sortable columns. [`ListQuery`] is the common
//! surface the list state and page controllers work against.

use std::fmt::Debug;

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    DnsRecordStatus, DnsRecordType, DomainStatus, SortDirection, SyncStatus, UserId, UserRole,
    wire_enum,
};
use crate::pagination::DEFAULT_PAGE_SIZE;

pub const MIN_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 3000;

/// Common paging, sorting and keyword accessors of a list query.
pub trait ListQuery:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Columns the resource can be sorted by.
    type SortField: Copy + Debug + PartialEq + Send + Sync + 'static;

    /// Inclusive page size bounds enforced for this resource.
    const SIZE_BOUNDS: (u32, u32) = (MIN_PAGE_SIZE, MAX_PAGE_SIZE);

    fn page(&self) -> u32;
    fn set_page(&mut self, page: u32);
    fn size(&self) -> u32;
    fn set_size(&mut self, size: u32);
    fn keyword(&self) -> Option<&str>;
    fn set_keyword(&mut self, keyword: Option<String>);
    fn sort(&self) -> (Self::SortField, SortDirection);
    fn set_sort(&mut self, field: Self::SortField, direction: SortDirection);

    /// Clamps a requested page size into [`Self::SIZE_BOUNDS`].
    fn clamp_size(size: u32) -> u32 {
        let (min, max) = Self::SIZE_BOUNDS;
        size.clamp(min, max)
    }

    /// Copy with page >= 1, a clamped size and a trimmed keyword.
    fn normalized(&self) -> Self {
        let mut query = self.clone();
        let page = query.page().max(1);
        query.set_page(page);
        let size = Self::clamp_size(query.size());
        query.set_size(size);
        let keyword = query.keyword().map(str::to_string);
        query.set_keyword(keyword);
        query
    }
}

fn normalize_keyword(keyword: Option<String>) -> Option<String> {
    keyword
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

macro_rules! impl_list_query {
    ($query:ty, $field:ty) => {
        impl ListQuery for $query {
            type SortField = $field;

            fn page(&self) -> u32 {
                self.page
            }

            fn set_page(&mut self, page: u32) {
                self.page = page.max(1);
            }

            fn size(&self) -> u32 {
                self.size
            }

            fn set_size(&mut self, size: u32) {
                self.size = Self::clamp_size(size);
            }

            fn keyword(&self) -> Option<&str> {
                self.keyword.as_deref()
            }

            fn set_keyword(&mut self, keyword: Option<String>) {
                self.keyword = normalize_keyword(keyword);
            }

            fn sort(&self) -> ($field, SortDirection) {
                (self.sort_by, self.sort_dir)
            }

            fn set_sort(&mut self, field: $field, direction: SortDirection) {
                self.sort_by = field;
                self.sort_dir = direction;
            }
        }
    };
}

wire_enum! {
    /// Sortable columns of the users list.
    UserSortField {
        Id => "id",
        Username => "username",
        Email => "email",
        CreateTime => "create_time",
        UpdateTime => "update_time",
    }
}

wire_enum! {
    /// Sortable columns of the user domains list.
    DomainSortField {
        CreateTime => "create_time",
        UpdateTime => "update_time",
        FullDomain => "full_domain",
        Status => "status",
    }
}

wire_enum! {
    /// Sortable columns of the DNS records list.
    DnsRecordSortField {
        CreateTime => "create_time",
        UpdateTime => "update_time",
        Name => "name",
        Type => "type",
        Status => "status",
    }
}

impl Default for UserSortField {
    fn default() -> Self {
        UserSortField::CreateTime
    }
}

impl Default for DomainSortField {
    fn default() -> Self {
        DomainSortField::CreateTime
    }
}

impl Default for DnsRecordSortField {
    fn default() -> Self {
        DnsRecordSortField::CreateTime
    }
}

/// Body of `POST /admin/users/info`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserQuery {
    pub page: u32,
    pub size: u32,
    pub sort_by: UserSortField,
    pub sort_dir: SortDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_start: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_end: Option<NaiveDateTime>,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            sort_by: UserSortField::default(),
            sort_dir: SortDirection::default(),
            keyword: None,
            user_id: None,
            role: None,
            create_time_start: None,
            create_time_end: None,
        }
    }
}

impl_list_query!(UserQuery, UserSortField);

/// Body of `POST /admin/users/domains`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DomainQuery {
    pub page: u32,
    pub size: u32,
    pub sort_by: DomainSortField,
    pub sort_dir: SortDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DomainStatus>,
    /// Exact parent zone filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl Default for DomainQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            sort_by: DomainSortField::default(),
            sort_dir: SortDirection::default(),
            keyword: None,
            user_id: None,
            status: None,
            domain: None,
        }
    }
}

impl_list_query!(DomainQuery, DomainSortField);

/// Body of `POST /admin/users/dns-records`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DnsRecordQuery {
    pub page: u32,
    pub size: u32,
    pub sort_by: DnsRecordSortField,
    pub sort_dir: SortDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<DnsRecordType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DnsRecordStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_status: Option<SyncStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl Default for DnsRecordQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            sort_by: DnsRecordSortField::default(),
            sort_dir: SortDirection::default(),
            keyword: None,
            user_id: None,
            record_type: None,
            status: None,
            sync_status: None,
            domain: None,
        }
    }
}

impl_list_query!(DnsRecordQuery, DnsRecordSortField);
