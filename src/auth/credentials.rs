//! # Credential Store
//!
//! Single source of truth for the two client-held secrets: the bearer
//! `access token` and the 8-character `decryption code`. Both survive
//! process restarts through a small JSON file next to the client.
//!
//! ## Guarantees
//!
//! - Writes update the in-memory cache and the durable file together; a
//!   reader never observes the two out of sync within this process.
//! - Cold reads (nothing cached yet) fall back to the durable file once.
//! - Durable storage failure degrades silently: the store keeps working
//!   in memory for the rest of the process lifetime and logs a warning.
//!
//! The store is shared via `Arc` and written only by the auth flows
//! (login, register, logout); all other components read.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// On-disk shape of the persisted credentials.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    decryption_code: Option<String>,
}

#[derive(Debug, Default)]
struct Cache {
    loaded: bool,
    token: Option<String>,
    code: Option<String>,
}

/// Persistent store for the auth token and decryption code.
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    cache: Mutex<Cache>,
}

impl CredentialStore {
    /// Create a store backed by the given file. The file is not touched
    /// until the first read or write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: Mutex::new(Cache::default()),
        }
    }

    /// Set or clear the auth token. `None` clears it from memory and disk.
    pub fn set_token(&self, token: Option<String>) {
        let mut cache = self.cache.lock().unwrap();
        self.ensure_loaded(&mut cache);
        cache.token = token;
        self.persist(&cache);
    }

    /// Set or clear the decryption code. `None` clears it from memory and
    /// disk.
    pub fn set_code(&self, code: Option<String>) {
        let mut cache = self.cache.lock().unwrap();
        self.ensure_loaded(&mut cache);
        cache.code = code;
        self.persist(&cache);
    }

    /// The cached token, reading the durable file on first access.
    pub fn token(&self) -> Option<String> {
        let mut cache = self.cache.lock().unwrap();
        self.ensure_loaded(&mut cache);
        cache.token.clone()
    }

    /// The cached decryption code, reading the durable file on first access.
    pub fn code(&self) -> Option<String> {
        let mut cache = self.cache.lock().unwrap();
        self.ensure_loaded(&mut cache);
        cache.code.clone()
    }

    /// True iff a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Base request headers: JSON content type always, bearer auth iff a
    /// token is present.
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_string())];
        if let Some(token) = self.token() {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }
        headers
    }

    fn ensure_loaded(&self, cache: &mut Cache) {
        if cache.loaded {
            return;
        }
        cache.loaded = true;
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<PersistedCredentials>(&content) {
                Ok(persisted) => {
                    cache.token = persisted.auth_token;
                    cache.code = persisted.decryption_code;
                }
                Err(e) => {
                    warn!("credential file {} unreadable: {}", self.path.display(), e);
                }
            },
            // Missing file is the normal logged-out cold start.
            Err(_) => {}
        }
    }

    fn persist(&self, cache: &Cache) {
        let persisted = PersistedCredentials {
            auth_token: cache.token.clone(),
            decryption_code: cache.code.clone(),
        };
        let result = serde_json::to_string_pretty(&persisted)
            .map_err(anyhow::Error::from)
            .and_then(|json| fs::write(&self.path, json).map_err(anyhow::Error::from));

        if let Err(e) = result {
            // Memory-only from here on; the current session keeps working.
            warn!(
                "could not persist credentials to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("credentials.json"))
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set_token(Some("tok".to_string()));
        store.set_code(Some("AB12CD34".to_string()));

        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(store.code().as_deref(), Some("AB12CD34"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_cold_read_falls_back_to_durable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let writer = CredentialStore::new(&path);
        writer.set_token(Some("persisted-token".to_string()));
        writer.set_code(Some("CODE1234".to_string()));

        // Fresh store, empty cache: must read the file.
        let reader = CredentialStore::new(&path);
        assert_eq!(reader.token().as_deref(), Some("persisted-token"));
        assert_eq!(reader.code().as_deref(), Some("CODE1234"));
    }

    #[test]
    fn test_clearing_removes_from_durable_storage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let store = CredentialStore::new(&path);
        store.set_token(Some("tok".to_string()));
        store.set_token(None);

        let reader = CredentialStore::new(&path);
        assert_eq!(reader.token(), None);
        assert!(!reader.is_authenticated());
    }

    #[test]
    fn test_absent_file_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.token(), None);
        assert_eq!(store.code(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_unwritable_path_degrades_to_memory_only() {
        // Directory path can't be written as a file.
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path());

        store.set_token(Some("tok".to_string()));
        // Still usable for this process lifetime.
        assert_eq!(store.token().as_deref(), Some("tok"));
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, "{ not json").unwrap();

        let store = CredentialStore::new(&path);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_auth_headers_include_bearer_only_when_token_present() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let headers = store.auth_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].0, "Content-Type");

        store.set_token(Some("tok".to_string()));
        let headers = store.auth_headers();
        assert!(headers
            .iter()
            .any(|(k, v)| *k == "Authorization" && v == "Bearer tok"));
    }
}
