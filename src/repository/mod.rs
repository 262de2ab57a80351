//! Storage seams of the mock admin API.
//!
//! Services only see these traits; [`InMemoryRepository`] is the seeded
//! implementation the server runs on and `MockRepository` the test double.

use crate::domain::admin::Admin;
use crate::domain::dns_record::UserDnsRecordInfo;
use crate::domain::types::{AdminId, BanReason, UserId};
use crate::domain::user::UserInfo;
use crate::domain::user_ban::UserBanDetails;
use crate::domain::user_domain::UserDomainInfo;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod seed;

pub use memory::InMemoryRepository;

pub trait AdminReader {
    fn get_admin_by_id(&self, id: AdminId) -> RepositoryResult<Option<Admin>>;
    /// Returns the admin only when both the username and password match.
    fn verify_admin_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> RepositoryResult<Option<Admin>>;
}

pub trait UserReader {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<UserInfo>>;
    fn list_users(&self) -> RepositoryResult<Vec<UserInfo>>;
}

pub trait DomainReader {
    fn list_user_domains(&self) -> RepositoryResult<Vec<UserDomainInfo>>;
}

pub trait DnsRecordReader {
    fn list_dns_records(&self) -> RepositoryResult<Vec<UserDnsRecordInfo>>;
}

pub trait BanReader {
    fn get_ban_details(&self, id: UserId) -> RepositoryResult<Option<UserBanDetails>>;
}

pub trait BanWriter {
    fn ban_user(
        &self,
        id: UserId,
        reason: &BanReason,
        banned_by: AdminId,
    ) -> RepositoryResult<UserBanDetails>;
    fn unban_user(&self, id: UserId) -> RepositoryResult<UserBanDetails>;
}
