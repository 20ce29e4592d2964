// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state: the caller's role and bearer token.
//!
//! Both live as string entries (`token`, `userRole`) in a [`SessionStore`].
//! Every component that needs the session receives a [`Session`] snapshot
//! explicitly.

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tempfile::NamedTempFile;

/// Store key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Store key holding the role tag.
pub const ROLE_KEY: &str = "userRole";

/// Who is using the portal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// `admin`: may add, edit and delete doctors
    Admin,
    /// `doctor`: sees the appointment dashboard
    Doctor,
    /// `patient`: browsing without logging in
    Guest,
    /// `loggedPatient`: may book appointments
    AuthenticatedPatient,
    /// No role stored, or a tag this portal does not know
    #[default]
    Anonymous,
}

impl Role {
    /// Parse a stored role tag. Unknown or absent tags map to `Anonymous`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("admin") => Role::Admin,
            Some("doctor") => Role::Doctor,
            Some("patient") => Role::Guest,
            Some("loggedPatient") => Role::AuthenticatedPatient,
            _ => Role::Anonymous,
        }
    }

    /// The tag persisted for this role.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Role::Admin => Some("admin"),
            Role::Doctor => Some("doctor"),
            Role::Guest => Some("patient"),
            Role::AuthenticatedPatient => Some("loggedPatient"),
            Role::Anonymous => None,
        }
    }
}

/// Snapshot of the session at the moment a component needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub token: Option<String>,
}

impl Session {
    pub fn new(role: Role, token: Option<String>) -> Self {
        Self { role, token }
    }

    /// Read the session from a store.
    pub fn load(store: &dyn SessionStore) -> Result<Self, StoreError> {
        let role = Role::from_tag(store.get(ROLE_KEY)?.as_deref());
        let token = store.get(TOKEN_KEY)?.filter(|t| !t.is_empty());
        Ok(Self { role, token })
    }

    /// The bearer token, if one is stored.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Errors from session storage
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read session file: {0}")]
    Read(String),

    #[error("Failed to write session file: {0}")]
    Write(String),

    #[error("Corrupt session file: {0}")]
    Corrupt(String),
}

/// Persistent key-value storage for session entries.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, scoped to the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a role and optional token.
    pub fn with_session(role: Role, token: Option<&str>) -> Self {
        let store = Self::new();
        if let Some(tag) = role.tag() {
            store.entries.insert(ROLE_KEY.to_string(), tag.to_string());
        }
        if let Some(token) = token {
            store.entries.insert(TOKEN_KEY.to_string(), token.to_string());
        }
        store
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON-file store so a CLI session survives between invocations.
///
/// Each write replaces the whole file atomically: entries go to a temporary
/// file in the same directory (owner-only permissions) that is then renamed
/// over the target. There is no cross-process locking.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.lock
            .lock()
            .map_err(|_| StoreError::Write("session lock poisoned".to_string()))
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StoreError::Read(e.to_string())),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let json =
            serde_json::to_vec_pretty(entries).map_err(|e| StoreError::Write(e.to_string()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file =
            NamedTempFile::new_in(dir).map_err(|e| StoreError::Write(e.to_string()))?;
        restrict_to_owner(file.path())?;
        file.write_all(&json)
            .and_then(|()| file.as_file().sync_all())
            .map_err(|e| StoreError::Write(e.to_string()))?;
        file.persist(&self.path)
            .map_err(|e| StoreError::Write(e.error.to_string()))?;
        Ok(())
    }

    fn update<F>(&self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.guard()?;
        let mut entries = self.read_entries()?;
        f(&mut entries);
        self.write_entries(&entries)
    }
}

/// The file holds a bearer token: owner read/write only.
#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| StoreError::Write(e.to_string()))
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.guard()?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

/// Handle to the session store, shared by every dashboard.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Current session. A store read failure is logged and treated as
    /// an anonymous session.
    pub fn current(&self) -> Session {
        Session::load(self.store.as_ref()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read session, continuing anonymously");
            Session::default()
        })
    }

    /// Persist a freshly issued token together with its role.
    /// Overwrites whatever was stored before.
    pub fn sign_in(&self, role: Role, token: &str) -> Result<Session, StoreError> {
        self.store.set(TOKEN_KEY, token)?;
        match role.tag() {
            Some(tag) => self.store.set(ROLE_KEY, tag)?,
            None => self.store.remove(ROLE_KEY)?,
        }
        tracing::info!(role = ?role, "Session stored");
        Ok(Session::new(role, Some(token.to_string())))
    }

    /// Clear the token and role.
    pub fn sign_out(&self) -> Result<(), StoreError> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(ROLE_KEY)?;
        tracing::info!("Session cleared");
        Ok(())
    }

    /// Record the role without a token (e.g. choosing "patient" on the landing page).
    pub fn set_role(&self, role: Role) -> Result<(), StoreError> {
        match role.tag() {
            Some(tag) => self.store.set(ROLE_KEY, tag),
            None => self.store.remove(ROLE_KEY),
        }
    }
}
