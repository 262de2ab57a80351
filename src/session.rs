//! Authenticated admin context shared by the HTTP client and the API bindings.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::admin::Admin;
use crate::dto::auth::LoginResponse;
use crate::storage::{
    ADMIN_INFO_KEY, ADMIN_TOKEN_KEY, ClientStorage, LEGACY_TOKEN_KEY, StorageError,
};

/// In-memory view of the current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub admin: Option<Admin>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

/// Holder of the admin identity and token, backed by durable storage.
///
/// Constructed explicitly and shared by `Arc`; every test gets its own.
#[derive(Debug)]
pub struct SessionStore {
    storage: Arc<dyn ClientStorage>,
    state: Mutex<Session>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn ClientStorage>) -> Self {
        Self {
            storage,
            state: Mutex::new(Session::default()),
        }
    }

    pub fn set_admin(&self, admin: Option<Admin>) {
        self.state.lock().admin = admin;
    }

    pub fn set_token(&self, token: Option<String>) {
        self.state.lock().token = token;
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        self.state.lock().is_authenticated = authenticated;
    }

    /// Drops the in-memory session. Storage is left alone.
    pub fn clear_admin(&self) {
        *self.state.lock() = Session::default();
    }

    /// Rehydrates memory from storage and returns whether the session is live.
    ///
    /// Never writes to storage, so calling it repeatedly is harmless.
    pub fn initialize_from_storage(&self) -> bool {
        let token = self.storage.get(ADMIN_TOKEN_KEY);
        let info = self.storage.get(ADMIN_INFO_KEY);

        let restored = match (token, info) {
            (Some(token), Some(info)) => match serde_json::from_str::<Admin>(&info) {
                Ok(admin) => Some(Session {
                    admin: Some(admin),
                    token: Some(token),
                    is_authenticated: true,
                }),
                Err(e) => {
                    log::warn!("Stored admin info is corrupt, ignoring it: {e}");
                    None
                }
            },
            _ => None,
        };

        let next = restored.unwrap_or_default();
        let mut state = self.state.lock();
        if *state != next {
            *state = next;
        }
        state.is_authenticated
    }

    pub fn snapshot(&self) -> Session {
        self.state.lock().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.lock().token.clone()
    }

    pub fn admin(&self) -> Option<Admin> {
        self.state.lock().admin.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.lock().is_authenticated
    }

    /// Stores a successful login durably, then in memory.
    pub fn persist_login(&self, login: &LoginResponse) -> Result<(), StorageError> {
        let info = serde_json::to_string(&login.admin)?;
        self.storage.set(ADMIN_TOKEN_KEY, &login.token)?;
        if let Err(e) = self.storage.set(ADMIN_INFO_KEY, &info) {
            if let Err(rollback) = self.storage.remove(ADMIN_TOKEN_KEY) {
                log::error!("Failed to roll back {ADMIN_TOKEN_KEY}: {rollback}");
            }
            return Err(e);
        }

        let mut state = self.state.lock();
        state.admin = Some(login.admin.clone());
        state.token = Some(login.token.clone());
        state.is_authenticated = true;
        Ok(())
    }

    /// Explicit sign-out: forgets the admin token and record.
    pub fn logout(&self) -> Result<(), StorageError> {
        let removed = self
            .storage
            .remove(ADMIN_TOKEN_KEY)
            .and_then(|_| self.storage.remove(ADMIN_INFO_KEY));
        self.clear_admin();
        removed
    }

    /// Forced sign-out after the backend rejected our credentials.
    ///
    /// Also drops the legacy token so the next request goes out anonymous.
    pub fn teardown(&self) {
        for key in [ADMIN_TOKEN_KEY, ADMIN_INFO_KEY, LEGACY_TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::error!("Failed to remove {key} from storage: {e}");
            }
        }
        self.clear_admin();
    }

    /// Token for the `Authorization` header; the admin token wins over the legacy one.
    pub fn bearer_token(&self) -> Option<String> {
        self.storage
            .get(ADMIN_TOKEN_KEY)
            .or_else(|| self.storage.get(LEGACY_TOKEN_KEY))
            .filter(|token| !token.is_empty())
    }
}
