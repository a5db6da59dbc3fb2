//! Key-value storage backends scoped to one session

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure in a file-backed session
    #[error("session storage I/O error: {0}")]
    Io(#[from] io::Error),
    /// No location is available for session files
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value store cleared when the session ends
#[cfg_attr(test, mockall::automock)]
pub trait SessionStorage {
    /// Read the value stored under `key`, `None` when absent
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-memory storage; the default backend
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage in a per-session directory that is removed on drop
#[derive(Debug)]
pub struct FileSessionStorage {
    session_dir: PathBuf,
}

impl FileSessionStorage {
    /// Create a session directory under the user cache directory
    pub fn in_cache_dir() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("io", "loyalty", "loyalty-tui").ok_or_else(|| {
            StorageError::Unavailable("no home directory for session files".to_string())
        })?;
        Self::new_in(dirs.cache_dir().join("sessions"))
    }

    /// Create a fresh session directory under `root`
    pub fn new_in(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let session_dir = root.as_ref().join(Uuid::new_v4().to_string());
        fs::create_dir_all(&session_dir)?;
        Ok(Self { session_dir })
    }

    pub fn session_dir(&self) -> &Path {
        &self.session_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.session_dir.join(format!("{file_name}.json"))
    }
}

impl SessionStorage for FileSessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

impl Drop for FileSessionStorage {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.session_dir) {
            tracing::warn!(
                "Failed to remove session directory {}: {e}",
                self.session_dir.display()
            );
        }
    }
}
