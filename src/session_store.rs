use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

const LOGGED_IN_VALUE: &str = "true";

/// On-disk shape: `{"isLoggedIn": "true"}` while logged in, `{}` otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(rename = "isLoggedIn", skip_serializing_if = "Option::is_none")]
    is_logged_in: Option<String>,
}

impl StoredSession {
    fn logged_in(&self) -> bool {
        self.is_logged_in.as_deref() == Some(LOGGED_IN_VALUE)
    }
}

/// Persists the single "logged in" flag across restarts.
pub struct SessionStore {
    path: PathBuf,
    data: RwLock<StoredSession>,
}

impl SessionStore {
    /// Reads the flag once. A missing or unreadable file means logged out.
    pub fn open(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read session from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log::warn!(
                    "Discarding unreadable session file {}: {err}",
                    path.display()
                );
                StoredSession::default()
            })
        } else {
            StoredSession::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn is_logged_in(&self) -> bool {
        match self.data.read() {
            Ok(guard) => guard.logged_in(),
            Err(poisoned) => poisoned.into_inner().logged_in(),
        }
    }

    pub fn mark_logged_in(&self) -> Result<()> {
        self.update(|data| data.is_logged_in = Some(LOGGED_IN_VALUE.into()))
    }

    /// Removes the flag entirely rather than writing `false`.
    pub fn clear(&self) -> Result<()> {
        self.update(|data| data.is_logged_in = None)
    }

    fn update<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut StoredSession),
    {
        let mut guard = match self.data.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        apply(&mut *guard);
        self.persist(&guard)
    }

    fn persist(&self, data: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create session directory {}", parent.display())
            })?;
        }
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write session to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json")).unwrap();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn login_survives_reopen_and_logout_removes_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::open(path.clone()).unwrap();
        store.mark_logged_in().unwrap();
        assert!(SessionStore::open(path.clone()).unwrap().is_logged_in());

        store.clear().unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("isLoggedIn"));
        assert!(!SessionStore::open(path).unwrap().is_logged_in());
    }

    #[test]
    fn corrupt_file_is_treated_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();
        assert!(!SessionStore::open(path).unwrap().is_logged_in());
    }

    #[test]
    fn only_the_literal_true_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"isLoggedIn":"yes"}"#).unwrap();
        assert!(!SessionStore::open(path).unwrap().is_logged_in());
    }
}
