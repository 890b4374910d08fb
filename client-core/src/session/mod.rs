//! Persisted session state.
//!
//! The backend owns all durable data; the only thing the client keeps on
//! device is the session: auth token, role, and a handful of profile
//! fields. The store is written at login/registration, read on screen
//! mount, and cleared at logout. Consumers receive the store as an
//! injected capability rather than reaching for ambient globals.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Well-known session keys, matching the backend's field names.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const ROLE: &str = "role";
    pub const USER_ID: &str = "userId";
    pub const FULL_NAME: &str = "fullName";
    pub const TELEPHONE: &str = "telephone";
    pub const PROFILE_IMAGE_URL: &str = "profileImageUrl";
}

/// Key-value storage for the device session.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;
    fn put(&self, key: &str, value: &str) -> Result<(), ClientError>;
    fn delete(&self, key: &str) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Tenant,
    Owner,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenant => "TENANT",
            Self::Owner => "OWNER",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "TENANT" => Some(Self::Tenant),
            "OWNER" => Some(Self::Owner),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile fields persisted alongside the token at login/registration.
#[derive(Debug, Clone)]
pub struct SessionProfile {
    pub user_id: String,
    pub full_name: String,
    pub telephone: String,
    pub profile_image_url: Option<String>,
}

/// Typed view over a [`SessionStore`].
#[derive(Clone)]
pub struct UserSession {
    store: Arc<dyn SessionStore>,
}

impl UserSession {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Result<Option<String>, ClientError> {
        self.store.get(keys::TOKEN)
    }

    pub fn role(&self) -> Result<Option<UserRole>, ClientError> {
        Ok(self
            .store
            .get(keys::ROLE)?
            .as_deref()
            .and_then(UserRole::parse))
    }

    pub fn user_id(&self) -> Result<Option<String>, ClientError> {
        self.store.get(keys::USER_ID)
    }

    pub fn full_name(&self) -> Result<Option<String>, ClientError> {
        self.store.get(keys::FULL_NAME)
    }

    pub fn telephone(&self) -> Result<Option<String>, ClientError> {
        self.store.get(keys::TELEPHONE)
    }

    pub fn profile_image_url(&self) -> Result<Option<String>, ClientError> {
        self.store.get(keys::PROFILE_IMAGE_URL)
    }

    pub fn is_logged_in(&self) -> Result<bool, ClientError> {
        Ok(self.token()?.is_some())
    }

    /// Persist a fresh login: token, role, and profile fields together.
    pub fn store_login(
        &self,
        token: &str,
        role: UserRole,
        profile: &SessionProfile,
    ) -> Result<(), ClientError> {
        self.store.put(keys::TOKEN, token)?;
        self.store.put(keys::ROLE, role.as_str())?;
        self.store.put(keys::USER_ID, &profile.user_id)?;
        self.update_profile(
            &profile.full_name,
            &profile.telephone,
            profile.profile_image_url.as_deref(),
        )
    }

    /// Refresh the persisted profile fields after a profile update.
    pub fn update_profile(
        &self,
        full_name: &str,
        telephone: &str,
        profile_image_url: Option<&str>,
    ) -> Result<(), ClientError> {
        self.store.put(keys::FULL_NAME, full_name)?;
        self.store.put(keys::TELEPHONE, telephone)?;
        match profile_image_url {
            Some(url) => self.store.put(keys::PROFILE_IMAGE_URL, url),
            None => self.store.delete(keys::PROFILE_IMAGE_URL),
        }
    }

    pub fn clear(&self) -> Result<(), ClientError> {
        self.store.clear()
    }
}

/// Session store persisted as a JSON object on disk.
///
/// The whole map is rewritten on every mutation; session payloads are a
/// handful of short strings.
pub struct FileSessionStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileSessionStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| ClientError::Session("session lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ClientError::Session("session lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn delete(&self, key: &str) -> Result<(), ClientError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ClientError::Session("session lock poisoned".to_string()))?;
        entries.remove(key);
        self.persist(&entries)
    }

    fn clear(&self) -> Result<(), ClientError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ClientError::Session("session lock poisoned".to_string()))?;
        entries.clear();
        self.persist(&entries)
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| ClientError::Session("session lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ClientError::Session("session lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), ClientError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ClientError::Session("session lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ClientError::Session("session lock poisoned".to_string()))?;
        entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session_path() -> PathBuf {
        std::env::temp_dir().join(format!("rentify_session_{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn file_store_round_trips_across_reopen() {
        let path = temp_session_path();

        {
            let store = FileSessionStore::open(&path).unwrap();
            store.put(keys::TOKEN, "abc123").unwrap();
            store.put(keys::ROLE, "TENANT").unwrap();
        }

        let reopened = FileSessionStore::open(&path).unwrap();
        assert_eq!(reopened.get(keys::TOKEN).unwrap().as_deref(), Some("abc123"));
        assert_eq!(reopened.get(keys::ROLE).unwrap().as_deref(), Some("TENANT"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn clear_wipes_every_key() {
        let path = temp_session_path();
        let store = FileSessionStore::open(&path).unwrap();
        store.put(keys::TOKEN, "abc123").unwrap();
        store.put(keys::USER_ID, "u-1").unwrap();

        store.clear().unwrap();

        assert_eq!(store.get(keys::TOKEN).unwrap(), None);
        assert_eq!(store.get(keys::USER_ID).unwrap(), None);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn user_session_stores_and_reads_login() {
        let store = Arc::new(MemorySessionStore::new());
        let session = UserSession::new(store);

        session
            .store_login(
                "tok-1",
                UserRole::Owner,
                &SessionProfile {
                    user_id: "u-9".to_string(),
                    full_name: "Aline U.".to_string(),
                    telephone: "+250780000001".to_string(),
                    profile_image_url: None,
                },
            )
            .unwrap();

        assert!(session.is_logged_in().unwrap());
        assert_eq!(session.role().unwrap(), Some(UserRole::Owner));
        assert_eq!(session.full_name().unwrap().as_deref(), Some("Aline U."));
        assert_eq!(session.profile_image_url().unwrap(), None);

        session.clear().unwrap();
        assert!(!session.is_logged_in().unwrap());
    }

    #[test]
    fn role_parse_rejects_unknown_values() {
        assert_eq!(UserRole::parse("TENANT"), Some(UserRole::Tenant));
        assert_eq!(UserRole::parse("landlord"), None);
    }
}
