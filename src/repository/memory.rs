use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::admin::Admin;
use crate::domain::dns_record::UserDnsRecordInfo;
use crate::domain::types::{AdminId, BanReason, UserId};
use crate::domain::user::UserInfo;
use crate::domain::user_ban::UserBanDetails;
use crate::domain::user_domain::UserDomainInfo;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::seed::{
    AdminAccount, BanRecord, STATUS_ACTIVE, STATUS_BANNED, SeedData, seed_data,
};
use crate::repository::{
    AdminReader, BanReader, BanWriter, DnsRecordReader, DomainReader, UserReader,
};

#[derive(Debug, Default)]
struct Store {
    admins: Vec<AdminAccount>,
    users: Vec<UserInfo>,
    domains: Vec<UserDomainInfo>,
    dns_records: Vec<UserDnsRecordInfo>,
    bans: HashMap<UserId, BanRecord>,
}

impl Store {
    fn ban_details(&self, user: &UserInfo) -> UserBanDetails {
        let ban = self.bans.get(&user.id);
        UserBanDetails {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            status: if ban.is_some() { STATUS_BANNED } else { STATUS_ACTIVE }.to_string(),
            is_banned: ban.is_some(),
            ban_reason: ban.map(|b| b.reason.clone()),
            banned_by: ban.map(|b| b.banned_by),
            ban_time: ban.map(|b| b.ban_time),
        }
    }

    fn user_mut(&mut self, id: UserId) -> RepositoryResult<&mut UserInfo> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)
    }
}

/// Thread-safe in-memory repository shared by every server worker.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRepository {
    pub fn new(data: SeedData) -> Self {
        let store = Store {
            admins: data.admins,
            users: data.users,
            domains: data.domains,
            dns_records: data.dns_records,
            bans: data.bans.into_iter().collect(),
        };
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Repository holding the standard seed dataset.
    pub fn seeded() -> RepositoryResult<Self> {
        Ok(Self::new(seed_data()?))
    }
}

impl AdminReader for InMemoryRepository {
    fn get_admin_by_id(&self, id: AdminId) -> RepositoryResult<Option<Admin>> {
        let store = self.store.read();
        Ok(store
            .admins
            .iter()
            .find(|a| a.admin.id == id)
            .map(|a| a.admin.clone()))
    }

    fn verify_admin_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> RepositoryResult<Option<Admin>> {
        let store = self.store.read();
        Ok(store
            .admins
            .iter()
            .find(|a| a.admin.username == username && a.password == password)
            .map(|a| a.admin.clone()))
    }
}

impl UserReader for InMemoryRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<UserInfo>> {
        let store = self.store.read();
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    fn list_users(&self) -> RepositoryResult<Vec<UserInfo>> {
        Ok(self.store.read().users.clone())
    }
}

impl DomainReader for InMemoryRepository {
    fn list_user_domains(&self) -> RepositoryResult<Vec<UserDomainInfo>> {
        Ok(self.store.read().domains.clone())
    }
}

impl DnsRecordReader for InMemoryRepository {
    fn list_dns_records(&self) -> RepositoryResult<Vec<UserDnsRecordInfo>> {
        Ok(self.store.read().dns_records.clone())
    }
}

impl BanReader for InMemoryRepository {
    fn get_ban_details(&self, id: UserId) -> RepositoryResult<Option<UserBanDetails>> {
        let store = self.store.read();
        Ok(store
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|user| store.ban_details(user)))
    }
}

impl BanWriter for InMemoryRepository {
    fn ban_user(
        &self,
        id: UserId,
        reason: &BanReason,
        banned_by: AdminId,
    ) -> RepositoryResult<UserBanDetails> {
        let mut store = self.store.write();
        if store.bans.contains_key(&id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "user {id} is already banned"
            )));
        }

        let now = Utc::now().naive_utc();
        let user = store.user_mut(id)?;
        user.status = Some(STATUS_BANNED.to_string());
        user.update_time = now;
        let user = user.clone();

        store.bans.insert(
            id,
            BanRecord {
                reason: reason.as_str().to_string(),
                banned_by,
                ban_time: now,
            },
        );
        Ok(store.ban_details(&user))
    }

    fn unban_user(&self, id: UserId) -> RepositoryResult<UserBanDetails> {
        let mut store = self.store.write();
        store.user_mut(id)?;
        if store.bans.remove(&id).is_none() {
            return Err(RepositoryError::ConstraintViolation(format!(
                "user {id} is not banned"
            )));
        }

        let user = store.user_mut(id)?;
        user.status = Some(STATUS_ACTIVE.to_string());
        user.update_time = Utc::now().naive_utc();
        let user = user.clone();
        Ok(store.ban_details(&user))
    }
}
