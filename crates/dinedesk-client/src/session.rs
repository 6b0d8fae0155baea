//! Session holder and persisted token storage.
//!
//! # Design
//! - [`Session`] is an explicit handle passed to the dispatcher; clones share
//!   the same token slot, so an update is seen by every request built after it.
//! - The token is read when a request is built, never bound into long-lived
//!   headers. In-flight requests keep the value they captured.
//! - [`SessionHolder`] owns the single `Session` for an application and seeds
//!   it from a [`TokenStore`] on first access.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::OnceCell;

use crate::error::StoreError;

/// Storage key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Shared bearer-token slot read by every outgoing request.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Create a session holding `token`.
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token)),
        }
    }

    /// Snapshot of the current token.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the current token. No validation is performed.
    pub fn set_access_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Drop the current token.
    pub fn clear(&self) {
        self.set_access_token(None);
    }

    /// Whether a non-empty token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some_and(|token| !token.is_empty())
    }

    /// Whether both handles refer to the same token slot.
    #[must_use]
    pub fn same_holder(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.token, &other.token)
    }

    /// `Authorization` header value for the current token.
    ///
    /// A missing token renders as the literal `Bearer null`; callers that need
    /// a real credential check [`Session::is_authenticated`] first.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        match self.access_token() {
            Some(token) => format!("Bearer {token}"),
            None => "Bearer null".to_string(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Persisted key/value storage for the bearer token.
pub trait TokenStore: Send + Sync {
    /// Read the stored token. Empty values count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be written.
    fn save(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be written.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-process token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Create a store pre-populated with `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|token| !token.is_empty()))
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Token store backed by a JSON object of string values on disk, the CLI's
/// counterpart of browser local storage. Unrelated keys are preserved.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store rooted at `path`; the file is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => return Err(self.io_error(source)),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::Format {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let encoded = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Format {
            path: self.path.display().to_string(),
            source,
        })?;
        fs::write(&self.path, encoded).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .read_entries()?
            .remove(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty()))
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(ACCESS_TOKEN_KEY.to_string(), token.to_string());
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        if entries.remove(ACCESS_TOKEN_KEY).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

/// Owner of the application's single [`Session`].
pub struct SessionHolder {
    session: OnceCell<Session>,
    store: Option<Arc<dyn TokenStore>>,
}

impl SessionHolder {
    /// Holder that seeds its session from `store` on first access.
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            session: OnceCell::new(),
            store: Some(store),
        }
    }

    /// Holder with no persisted storage; sessions start unauthenticated.
    #[must_use]
    pub fn without_store() -> Self {
        Self {
            session: OnceCell::new(),
            store: None,
        }
    }

    /// Return the session, constructing it from storage on first access.
    pub fn get_instance(&self) -> Session {
        self.session
            .get_or_init(|| Session::new(self.restore()))
            .clone()
    }

    /// Return the session after applying an explicit token.
    ///
    /// On first access the explicit token wins over storage (an empty string
    /// counts as no token); afterwards it overwrites the current token as-is.
    pub fn get_instance_with(&self, token: Option<String>) -> Session {
        let mut constructed = false;
        let session = self.session.get_or_init(|| {
            constructed = true;
            Session::new(token.clone().filter(|value| !value.is_empty()))
        });
        if !constructed {
            session.set_access_token(token);
        }
        session.clone()
    }

    /// Persist `token` and make it the current token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the token cannot be persisted; the in-memory
    /// token is left untouched in that case.
    pub fn sign_in(&self, token: &str) -> Result<Session, StoreError> {
        if let Some(store) = &self.store {
            store.save(token)?;
        }
        Ok(self.get_instance_with(Some(token.to_string())))
    }

    /// Forget the token in memory and in storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when storage cannot be cleared; the in-memory
    /// token is cleared regardless.
    pub fn sign_out(&self) -> Result<(), StoreError> {
        self.get_instance().clear();
        match &self.store {
            Some(store) => store.clear(),
            None => Ok(()),
        }
    }

    fn restore(&self) -> Option<String> {
        let store = self.store.as_ref()?;
        match store.load() {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read persisted access token");
                None
            }
        }
    }
}

impl fmt::Debug for SessionHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHolder")
            .field("session", &self.session.get())
            .field("persisted", &self.store.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_instance_returns_the_same_holder() {
        let holder = SessionHolder::new(Arc::new(MemoryTokenStore::with_token("stored")));
        let first = holder.get_instance();
        let second = holder.get_instance();
        assert!(first.same_holder(&second));
        assert_eq!(second.access_token().as_deref(), Some("stored"));
    }

    #[test]
    fn explicit_token_is_retained_by_later_plain_access() {
        let holder = SessionHolder::new(Arc::new(MemoryTokenStore::with_token("stored")));
        let first = holder.get_instance_with(Some("explicit".into()));
        let second = holder.get_instance();
        assert!(first.same_holder(&second));
        assert_eq!(second.access_token().as_deref(), Some("explicit"));
    }

    #[test]
    fn explicit_token_overwrites_existing_session() {
        let holder = SessionHolder::without_store();
        let session = holder.get_instance();
        assert_eq!(session.access_token(), None);
        holder.get_instance_with(Some("fresh".into()));
        assert_eq!(session.access_token().as_deref(), Some("fresh"));
        holder.get_instance_with(None);
        assert_eq!(session.access_token(), None);
    }

    #[test]
    fn unreadable_storage_starts_unauthenticated() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").expect("write");
        let holder = SessionHolder::new(Arc::new(FileTokenStore::new(&path)));
        assert!(!holder.get_instance().is_authenticated());
    }

    #[test]
    fn bearer_header_renders_missing_token_as_null() {
        let session = Session::default();
        assert_eq!(session.bearer_header(), "Bearer null");
        session.set_access_token(Some("abc".into()));
        assert_eq!(session.bearer_header(), "Bearer abc");
    }

    #[test]
    fn file_store_round_trips_and_preserves_other_keys() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("nested").join("storage.json");
        let store = FileTokenStore::new(&path);
        assert_eq!(store.load().expect("load"), None);

        store.save("token-1").expect("save");
        let mut entries: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
        entries.insert("theme".into(), "dark".into());
        fs::write(&path, serde_json::to_string(&entries).expect("encode")).expect("write");

        assert_eq!(store.load().expect("load").as_deref(), Some("token-1"));
        store.clear().expect("clear");
        assert_eq!(store.load().expect("load"), None);
        let remaining: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(remaining.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn sign_in_and_out_update_memory_and_storage() {
        let store = Arc::new(MemoryTokenStore::default());
        let holder = SessionHolder::new(store.clone());
        let session = holder.sign_in("issued").expect("sign in");
        assert_eq!(store.load().expect("load").as_deref(), Some("issued"));
        assert!(session.is_authenticated());

        holder.sign_out().expect("sign out");
        assert!(!session.is_authenticated());
        assert_eq!(store.load().expect("load"), None);
    }
}
