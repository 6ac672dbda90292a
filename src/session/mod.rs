//! Session store: owns the current identity and mediates every identity
//! transition (restore, login, register, logout, profile updates).
//!
//! Every mutating operation persists the full serialized identity through the
//! storage port before returning; the persisted blob is the durability
//! boundary, there is no server round-trip.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::data;
use crate::models::{Role, User};
use crate::storage::KeyValueStorage;

/// Storage key holding the serialized current identity
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Demo-grade credential check: every seed account shares this password.
/// Not a security boundary.
const SENTINEL_PASSWORD: &str = "password";

const DEFAULT_AVATAR: &str =
    "https://images.pexels.com/photos/771742/pexels-photo-771742.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop";

/// Input for account registration
#[derive(Debug, Clone)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone: Option<String>,
    pub company: Option<String>,
}

/// Partial profile update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

pub struct SessionStore {
    users: RwLock<Vec<User>>,
    current: RwLock<Option<User>>,
    storage: Arc<dyn KeyValueStorage>,
    latency: Duration,
}

impl SessionStore {
    /// Create a session store seeded with the demo accounts
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_latency(storage, Duration::from_millis(1000))
    }

    /// Create a session store with custom simulated request latency.
    /// Tests pass `Duration::ZERO` to make the async boundary deterministic.
    pub fn with_latency(storage: Arc<dyn KeyValueStorage>, latency: Duration) -> Self {
        Self {
            users: RwLock::new(data::seed_users()),
            current: RwLock::new(None),
            storage,
            latency,
        }
    }

    /// Load a previously persisted identity, if any. A malformed blob is
    /// logged and treated as anonymous rather than failing startup.
    pub fn restore(&self) {
        match self.storage.get(CURRENT_USER_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<User>(&blob) {
                Ok(user) => {
                    info!("Restored session for {}", user.email);
                    *self.current.write().unwrap() = Some(user);
                }
                Err(e) => {
                    warn!("Discarding malformed persisted session: {}", e);
                }
            },
            Ok(None) => debug!("No persisted session found"),
            Err(e) => warn!("Failed to read persisted session: {}", e),
        }
    }

    /// Authenticate against the seed accounts. Succeeds only when the email
    /// matches a known account and the password equals the shared sentinel.
    /// On failure nothing changes.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        tokio::time::sleep(self.latency).await;

        let user = {
            let users = self.users.read().unwrap();
            users.iter().find(|u| u.email == email).cloned()
        };

        match user {
            Some(user) if password == SENTINEL_PASSWORD => {
                info!("Login succeeded for {} ({:?})", user.email, user.role);
                self.persist(&user);
                *self.current.write().unwrap() = Some(user);
                true
            }
            _ => {
                warn!("Login failed for {}", email);
                false
            }
        }
    }

    /// Register a new account and sign it in. Never fails under normal input:
    /// the identity is synthesized, appended to the account list, made
    /// current, and persisted.
    pub async fn register(&self, data: RegisterData) -> bool {
        tokio::time::sleep(self.latency).await;

        let user = User {
            id: Utc::now().timestamp_millis().to_string(),
            name: data.name,
            email: data.email,
            avatar: DEFAULT_AVATAR.to_string(),
            role: data.role,
            favorites: Vec::new(),
            phone: data.phone,
            company: data.company,
            join_date: Some(Utc::now().format("%Y-%m-%d").to_string()),
            verified: false,
            license_number: None,
        };

        info!("Registered {} ({:?})", user.email, user.role);
        self.users.write().unwrap().push(user.clone());
        self.persist(&user);
        *self.current.write().unwrap() = Some(user);
        true
    }

    /// Clear the current identity and delete the persisted record
    pub fn logout(&self) {
        if let Some(user) = self.current.write().unwrap().take() {
            info!("Logged out {}", user.email);
        }
        if let Err(e) = self.storage.remove(CURRENT_USER_KEY) {
            warn!("Failed to clear persisted session: {}", e);
        }
    }

    /// Merge the given fields into the current identity, re-persist it, and
    /// update the matching account-list entry. No-op when anonymous.
    pub fn update_profile(&self, update: ProfileUpdate) {
        let mut current = self.current.write().unwrap();
        let Some(user) = current.as_mut() else {
            return;
        };

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }
        if let Some(phone) = update.phone {
            user.phone = Some(phone);
        }
        if let Some(company) = update.company {
            user.company = Some(company);
        }

        self.persist(user);
        self.sync_user_list(user);
    }

    /// Replace the current identity's favorite set and persist it.
    /// Returns false (and changes nothing) when anonymous.
    pub(crate) fn set_favorites(&self, favorites: Vec<String>) -> bool {
        let mut current = self.current.write().unwrap();
        let Some(user) = current.as_mut() else {
            return false;
        };

        user.favorites = favorites;
        self.persist(user);
        self.sync_user_list(user);
        true
    }

    pub fn current_user(&self) -> Option<User> {
        self.current.read().unwrap().clone()
    }

    /// Number of known accounts (seed accounts plus registrations)
    pub fn user_count(&self) -> usize {
        self.users.read().unwrap().len()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().unwrap().is_some()
    }

    fn persist(&self, user: &User) {
        let blob = match serde_json::to_string(user) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Failed to serialize session: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(CURRENT_USER_KEY, &blob) {
            warn!("Failed to persist session: {}", e);
        }
    }

    fn sync_user_list(&self, updated: &User) {
        let mut users = self.users.write().unwrap();
        if let Some(entry) = users.iter_mut().find(|u| u.id == updated.id) {
            *entry = updated.clone();
        }
    }
}
