//! File-backed secure key-value store.
//!
//! One file per key under the secure directory, written atomically
//! (temp file + fsync + rename) with owner-only permissions on Unix.
//!
//! Per the [`SecureStore`] contract every failure is absorbed here:
//! unreadable values degrade to `None`, failed writes and deletes are
//! logged and swallowed. The session store on top treats a missing value
//! as "no session".

use std::fs::{self, File};
use std::io::{self, Write as IoWrite};
use std::path::PathBuf;

use async_trait::async_trait;
use satchel_core::storage::SecureStore;

use crate::paths::{PathError, SatchelPaths};

/// Secure key-value store backed by one file per key.
///
/// # Security Note
///
/// A portable crate cannot reach the platform keychain, so this mirrors
/// how secrets-on-disk are handled elsewhere in the config directory:
/// entries are plain files restricted to mode 600 (and the directory to
/// 700) on Unix. Keys are fixed identifiers chosen by the caller, not
/// user input.
pub struct SecureFileStore {
    dir: PathBuf,
}

impl SecureFileStore {
    /// Creates a store rooted at the default secure directory.
    pub fn new() -> Result<Self, PathError> {
        Ok(Self {
            dir: SatchelPaths::secure_dir()?,
        })
    }

    /// Creates a store rooted at a custom directory (for testing).
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn read_value(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write_value(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700))?;
        }

        let path = self.key_path(key);
        let tmp_path = path.with_extension("tmp");

        let mut tmp_file = File::create(&tmp_path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp_file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        tmp_file.write_all(value.as_bytes())?;

        // Ensure data is written to disk before the rename makes it live.
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove_value(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl SecureStore for SecureFileStore {
    async fn get(&self, key: &str) -> Option<String> {
        match self.read_value(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, "secure store read failed: {err}");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.write_value(key, value) {
            tracing::warn!(key, "secure store write failed: {err}");
        }
    }

    async fn delete(&self, key: &str) {
        if let Err(err) = self.remove_value(key) {
            tracing::warn!(key, "secure store delete failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, SecureFileStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = SecureFileStore::with_dir(temp_dir.path().join("secure"));
        (temp_dir, store)
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let (_guard, store) = store();
        store.set("user_token", "tok123").await;
        assert_eq!(store.get("user_token").await.as_deref(), Some("tok123"));
    }

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let (_guard, store) = store();
        assert!(store.get("user_token").await.is_none());
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let (_guard, store) = store();
        store.set("user_token", "old").await;
        store.set("user_token", "new").await;
        assert_eq!(store.get("user_token").await.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn delete_removes_the_value_and_is_idempotent() {
        let (_guard, store) = store();
        store.set("user_token", "tok123").await;
        store.delete("user_token").await;
        assert!(store.get("user_token").await.is_none());
        // Deleting again must not blow up.
        store.delete("user_token").await;
    }

    #[tokio::test]
    async fn unreadable_value_degrades_to_none() {
        let (_guard, store) = store();
        store.set("user_data", "placeholder").await;
        // Corrupt the entry with invalid UTF-8; read_to_string will fail.
        fs::write(store.key_path("user_data"), [0xff, 0xfe, 0x00]).unwrap();
        assert!(store.get("user_data").await.is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn entries_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let (_guard, store) = store();
        store.set("user_token", "tok123").await;

        let mode = fs::metadata(store.key_path("user_token"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
