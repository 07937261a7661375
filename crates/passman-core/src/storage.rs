//! Persistent key-value storage backing the vault
//!
//! The engine persists the whole vault under a single fixed key. `FileStore`
//! maps each key to a JSON file under a base directory and writes atomically
//! (write to temp, then rename), so a failed write never replaces the last
//! durable value.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::VaultResult;

/// Default storage directory name
const STORE_DIR: &str = ".passman";

/// Key the whole vault is stored under
pub const VAULT_KEY: &str = "passwords";

/// Get the default storage directory path
pub fn default_store_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORE_DIR)
}

/// Durable key-value storage for string payloads.
///
/// `set` must be all-or-nothing: after a failed write, `get` still returns
/// the previously stored value.
#[allow(async_fn_in_trait)]
pub trait PersistentStore {
    /// Read the value stored under `key`, or `None` if absent
    async fn get(&self, key: &str) -> VaultResult<Option<String>>;

    /// Durably replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> VaultResult<()>;
}

/// File-backed store: one `<key>.json` file per key under a base directory
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Path of the file backing `key`
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    /// Ensure the base directory exists with owner-only permissions
    async fn ensure_dir(&self) -> VaultResult<()> {
        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir).await?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let perms = std::fs::Permissions::from_mode(0o700);
                std::fs::set_permissions(&self.base_dir, perms)?;
            }
        }
        Ok(())
    }
}

impl PersistentStore for FileStore {
    async fn get(&self, key: &str) -> VaultResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path).await?;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &str) -> VaultResult<()> {
        self.ensure_dir().await?;
        let path = self.key_path(key);

        // The previous value stays authoritative until the rename lands.
        let temp_path = path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(value.as_bytes()).await?;
            file.sync_all().await?;
        }

        // Owner-only, the file holds plaintext credentials
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&temp_path, perms)?;
        }

        fs::rename(&temp_path, &path).await?;
        Ok(())
    }
}

/// In-memory store for tests and embedding. Clones share the same values.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistentStore for MemoryStore {
    async fn get(&self, key: &str) -> VaultResult<Option<String>> {
        let values = self.values.lock().expect("store mutex poisoned");
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> VaultResult<()> {
        let mut values = self.values.lock().expect("store mutex poisoned");
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
