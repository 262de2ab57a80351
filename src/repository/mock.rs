//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::admin::Admin;
use crate::domain::dns_record::UserDnsRecordInfo;
use crate::domain::types::{AdminId, BanReason, UserId};
use crate::domain::user::UserInfo;
use crate::domain::user_ban::UserBanDetails;
use crate::domain::user_domain::UserDomainInfo;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AdminReader, BanReader, BanWriter, DnsRecordReader, DomainReader, UserReader,
};

mock! {
    pub Repository {}

    impl AdminReader for Repository {
        fn get_admin_by_id(&self, id: AdminId) -> RepositoryResult<Option<Admin>>;
        fn verify_admin_credentials(
            &self,
            username: &str,
            password: &str,
        ) -> RepositoryResult<Option<Admin>>;
    }

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<UserInfo>>;
        fn list_users(&self) -> RepositoryResult<Vec<UserInfo>>;
    }

    impl DomainReader for Repository {
        fn list_user_domains(&self) -> RepositoryResult<Vec<UserDomainInfo>>;
    }

    impl DnsRecordReader for Repository {
        fn list_dns_records(&self) -> RepositoryResult<Vec<UserDnsRecordInfo>>;
    }

    impl BanReader for Repository {
        fn get_ban_details(&self, id: UserId) -> RepositoryResult<Option<UserBanDetails>>;
    }

    impl BanWriter for Repository {
        fn ban_user(
            &self,
            id: UserId,
            reason: &BanReason,
            banned_by: AdminId,
        ) -> RepositoryResult<UserBanDetails>;
        fn unban_user(&self, id: UserId) -> RepositoryResult<UserBanDetails>;
    }
}
