//! # Identity & Local Store
//!
//! Keeps the signed-in user across runs.
//!
//! ```text
//! <data_dir>/store.json
//! {
//!   "authToken": "...",
//!   "userData":  "{\"id\":..., \"email\":..., \"name\":..., \"stats\":{...}}",
//!   "userEmail": "..."
//! }
//! ```
//!
//! `SessionStore` is a tiny string key-value file. `AuthContext` is the
//! in-memory identity built from it at start-up and handed to screens through
//! `App`; login writes both, logout clears both.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`).

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const KEY_AUTH_TOKEN: &str = "authToken";
pub const KEY_USER_DATA: &str = "userData";
pub const KEY_USER_EMAIL: &str = "userEmail";

const STORE_FILE: &str = "store.json";

// ============================================================================
// User profile
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub avg_score: f64,
    pub streak: u32,
    pub total_quizzes: u32,
    pub completed_quizzes: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub stats: UserStats,
}

impl User {
    /// Two-letter avatar text, e.g. "Jane Doe" → "JA".
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store I/O error: {e}"),
            StoreError::Parse(e) => write!(f, "store parse error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Parse(e)
    }
}

// ============================================================================
// Key-value store
// ============================================================================

/// String key-value pairs persisted as one JSON object.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl SessionStore {
    /// Open (or lazily create) the store inside `dir`.
    ///
    /// A corrupt file is logged and treated as empty so a bad write can never
    /// lock the user out of the app.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(STORE_FILE);
        let entries = if path.exists() {
            let json = fs::read_to_string(&path)?;
            match serde_json::from_str(&json) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring unreadable store {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };
        debug!("Opened store at {} ({} keys)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.into());
        self.flush()
    }

    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    /// Drop every key in `keys` from memory, then write once.
    pub fn remove_all(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        let before = self.entries.len();
        self.entries.retain(|k, _| !keys.contains(&k.as_str()));
        if self.entries.len() != before {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), StoreError> {
        atomic_write_json(&self.path, &self.entries)
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

// ============================================================================
// Auth context
// ============================================================================

/// The current identity. Passed to screens via `App`; never global.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthContext {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl AuthContext {
    /// Rebuild the identity from the store. Both token and profile must be
    /// present and the profile must parse; otherwise the user is signed out.
    pub fn restore(store: &mut SessionStore) -> Self {
        let (Some(token), Some(user_json)) = (store.get(KEY_AUTH_TOKEN), store.get(KEY_USER_DATA))
        else {
            debug!("No stored identity");
            return Self::default();
        };

        let user: User = match serde_json::from_str(user_json) {
            Ok(user) => user,
            Err(e) => {
                warn!("Stored user profile is unreadable, signing out: {}", e);
                return Self::default();
            }
        };
        let token = token.to_string();

        // Quiz attempts are attributed by email; keep it in step with the profile.
        if store.get(KEY_USER_EMAIL) != Some(user.email.as_str()) {
            if let Err(e) = store.set(KEY_USER_EMAIL, user.email.clone()) {
                warn!("Failed to refresh stored email: {}", e);
            }
        }

        info!("Restored session for {}", user.email);
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    /// Persist a fresh login and adopt it.
    pub fn login(
        &mut self,
        store: &mut SessionStore,
        token: String,
        user: User,
    ) -> Result<(), StoreError> {
        store.set(KEY_AUTH_TOKEN, token.clone())?;
        store.set(KEY_USER_DATA, serde_json::to_string(&user)?)?;
        store.remove(KEY_USER_EMAIL)?;
        store.set(KEY_USER_EMAIL, user.email.clone())?;

        info!("User logged in: {}", user.email);
        self.token = Some(token);
        self.user = Some(user);
        Ok(())
    }

    /// Clear the in-memory identity and every stored key. The in-memory state
    /// is cleared even if the store cannot be written.
    pub fn logout(&mut self, store: &mut SessionStore) -> Result<(), StoreError> {
        self.token = None;
        self.user = None;
        store.remove_all(&[KEY_AUTH_TOKEN, KEY_USER_DATA, KEY_USER_EMAIL])?;
        info!("User logged out");
        Ok(())
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("User", |u| u.name.as_str())
    }
}
