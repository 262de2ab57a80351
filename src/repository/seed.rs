//! Fixed dataset the mock server starts with.
//!
//! Five users, five domains (two of them under `example.org`) and a handful
//! of DNS records. `erin` starts out banned.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::admin::Admin;
use crate::domain::dns_record::UserDnsRecordInfo;
use crate::domain::types::{
    AdminId, DnsRecordId, DnsRecordStatus, DnsRecordType, DomainId, DomainStatus, SyncStatus,
    UserId, UserRole,
};
use crate::domain::user::UserInfo;
use crate::domain::user_domain::UserDomainInfo;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub const SEED_ADMIN_USERNAME: &str = "admin";
pub const SEED_ADMIN_PASSWORD: &str = "admin";

pub const STATUS_ACTIVE: &str = "ACTIVE";
pub const STATUS_BANNED: &str = "BANNED";

#[derive(Clone, Debug)]
pub struct AdminAccount {
    pub admin: Admin,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct BanRecord {
    pub reason: String,
    pub banned_by: AdminId,
    pub ban_time: NaiveDateTime,
}

#[derive(Clone, Debug, Default)]
pub struct SeedData {
    pub admins: Vec<AdminAccount>,
    pub users: Vec<UserInfo>,
    pub domains: Vec<UserDomainInfo>,
    pub dns_records: Vec<UserDnsRecordInfo>,
    pub bans: Vec<(UserId, BanRecord)>,
}

fn at(month: u32, day: u32, hour: u32) -> RepositoryResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .ok_or_else(|| RepositoryError::Unexpected(format!("invalid seed date 2024-{month}-{day}")))
}

const USERS: &[(i64, &str, &str)] = &[
    (1, "alice", "alice@mail.test"),
    (2, "bob", "bob@mail.test"),
    (3, "carol", "carol@mail.test"),
    (4, "dave", "dave@mail.test"),
    (5, "erin", "erin@mail.test"),
];

const DOMAINS: &[(i64, i64, &str, &str, DomainStatus)] = &[
    (1, 1, "blog", "example.org", DomainStatus::Active),
    (2, 2, "shop", "webdom.net", DomainStatus::Active),
    (3, 3, "www", "example.org", DomainStatus::Inactive),
    (4, 4, "api", "webdom.net", DomainStatus::Active),
    (5, 5, "mail", "dnsbox.io", DomainStatus::Deleted),
];

/// (id, domain id, name, type, value, mx, status, sync)
type RecordRow = (
    i64,
    i64,
    &'static str,
    DnsRecordType,
    &'static str,
    Option<u16>,
    DnsRecordStatus,
    SyncStatus,
);

const RECORDS: &[RecordRow] = &[
    (1, 1, "@", DnsRecordType::A, "203.0.113.10", None, DnsRecordStatus::Enable, SyncStatus::Success),
    (2, 1, "www", DnsRecordType::Cname, "blog.example.org", None, DnsRecordStatus::Enable, SyncStatus::Success),
    (3, 2, "@", DnsRecordType::A, "198.51.100.7", None, DnsRecordStatus::Enable, SyncStatus::Pending),
    (4, 2, "@", DnsRecordType::Mx, "mx.shop.webdom.net", Some(10), DnsRecordStatus::Enable, SyncStatus::Success),
    (5, 3, "@", DnsRecordType::Aaaa, "2001:db8::1", None, DnsRecordStatus::Disable, SyncStatus::Failed),
    (6, 4, "_verify", DnsRecordType::Txt, "webdom-site-verification=4f1c", None, DnsRecordStatus::Enable, SyncStatus::Success),
    (7, 5, "@", DnsRecordType::Ns, "ns1.dnsbox.io", None, DnsRecordStatus::Disable, SyncStatus::Success),
];

/// Builds the dataset; per-user counters are derived from the rows.
pub fn seed_data() -> RepositoryResult<SeedData> {
    let admin = Admin {
        id: AdminId::new(1)?,
        username: SEED_ADMIN_USERNAME.to_string(),
        email: "admin@webdom.test".to_string(),
        role: "ADMIN".to_string(),
        create_time: at(1, 1, 8)?,
        update_time: at(1, 1, 8)?,
    };

    let mut domains = Vec::with_capacity(DOMAINS.len());
    for &(id, user_id, subdomain, domain, status) in DOMAINS {
        let (_, username, email) = USERS[(user_id - 1) as usize];
        let created = at(3, id as u32, 10)?;
        domains.push(UserDomainInfo {
            id: DomainId::new(id)?,
            user_id: UserId::new(user_id)?,
            username: username.to_string(),
            email: email.to_string(),
            subdomain: subdomain.to_string(),
            domain: domain.to_string(),
            full_domain: format!("{subdomain}.{domain}"),
            status,
            remark: String::new(),
            create_time: created,
            update_time: at(4, id as u32, 10)?,
        });
    }

    let mut dns_records = Vec::with_capacity(RECORDS.len());
    for &(id, domain_id, name, record_type, value, mx, status, sync_status) in RECORDS {
        let owner = &domains[(domain_id - 1) as usize];
        let updated = at(5, id as u32, 12)?;
        dns_records.push(UserDnsRecordInfo {
            id: DnsRecordId::new(id)?,
            user_id: owner.user_id,
            username: owner.username.clone(),
            email: owner.email.clone(),
            subdomain_id: owner.id,
            subdomain: owner.subdomain.clone(),
            domain: owner.domain.clone(),
            full_domain: owner.full_domain.clone(),
            record_id: 1_000_000 + id,
            name: name.to_string(),
            record_type,
            value: value.to_string(),
            line: "default".to_string(),
            line_id: "0".to_string(),
            ttl: 600,
            mx,
            weight: None,
            status,
            remark: String::new(),
            monitor_status: None,
            updated_on: updated.format("%Y-%m-%d %H:%M:%S").to_string(),
            sync_status,
            sync_error: (sync_status == SyncStatus::Failed)
                .then(|| "upstream rejected the record".to_string()),
            create_time: at(5, id as u32, 9)?,
            update_time: updated,
        });
    }

    let erin = UserId::new(5)?;
    let mut users = Vec::with_capacity(USERS.len());
    for &(id, username, email) in USERS {
        let user_id = UserId::new(id)?;
        let count = |owner: UserId| -> u32 {
            dns_records.iter().filter(|r| r.user_id == owner).count() as u32
        };
        users.push(UserInfo {
            id: user_id,
            username: username.to_string(),
            email: email.to_string(),
            role: UserRole::User,
            create_time: at(2, id as u32, 9)?,
            update_time: at(2, id as u32 + 10, 9)?,
            domain_count: domains.iter().filter(|d| d.user_id == user_id).count() as u32,
            dns_record_count: count(user_id),
            last_login_time: Some(at(6, id as u32, 18)?),
            status: Some(if user_id == erin { STATUS_BANNED } else { STATUS_ACTIVE }.to_string()),
        });
    }

    let bans = vec![(
        erin,
        BanRecord {
            reason: "Repeated policy violations".to_string(),
            banned_by: admin.id,
            ban_time: at(6, 20, 15)?,
        },
    )];

    Ok(SeedData {
        admins: vec![AdminAccount {
            admin,
            password: SEED_ADMIN_PASSWORD.to_string(),
        }],
        users,
        domains,
        dns_records,
        bans,
    })
}
