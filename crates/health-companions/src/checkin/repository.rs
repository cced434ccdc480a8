use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{UserKey, UserRecord};

/// Key-value gateway for user records. Writes replace the whole record.
pub trait RecordStore: Send + Sync {
    fn get(&self, key: &UserKey) -> Result<Option<UserRecord>, StoreError>;
    /// Insert or replace the record stored under `record.email`.
    fn set(&self, record: UserRecord) -> Result<(), StoreError>;
    /// Store `record` only when its key is free. Returns `false` and leaves the store alone
    /// when a record already exists.
    fn insert_new(&self, record: UserRecord) -> Result<bool, StoreError>;
    /// Read, change, and write back the record under `key` without letting another writer in
    /// between. Nothing is written when `change` fails; `Ok(None)` means no such record.
    fn update<T, E, F>(&self, key: &UserKey, change: F) -> Result<Option<T>, E>
    where
        Self: Sized,
        F: FnOnce(&mut UserRecord) -> Result<T, E>,
        E: From<StoreError>;
    fn current_session(&self) -> Result<Option<UserKey>, StoreError>;
    fn set_current_session(&self, key: &UserKey) -> Result<(), StoreError>;
    fn clear_current_session(&self) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("store at {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Serialized shape shared by both stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    users: BTreeMap<UserKey, UserRecord>,
    #[serde(default)]
    current_session: Option<UserKey>,
}

fn lock(state: &Mutex<StoreDocument>) -> Result<MutexGuard<'_, StoreDocument>, StoreError> {
    state
        .lock()
        .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))
}

/// Process-lifetime store; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &UserKey) -> Result<Option<UserRecord>, StoreError> {
        Ok(lock(&self.state)?.users.get(key).cloned())
    }

    fn set(&self, record: UserRecord) -> Result<(), StoreError> {
        lock(&self.state)?.users.insert(record.email.clone(), record);
        Ok(())
    }

    fn insert_new(&self, record: UserRecord) -> Result<bool, StoreError> {
        let mut document = lock(&self.state)?;
        if document.users.contains_key(&record.email) {
            return Ok(false);
        }
        document.users.insert(record.email.clone(), record);
        Ok(true)
    }

    fn update<T, E, F>(&self, key: &UserKey, change: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&mut UserRecord) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut document = lock(&self.state)?;
        let Some(stored) = document.users.get_mut(key) else {
            return Ok(None);
        };
        let mut record = stored.clone();
        let value = change(&mut record)?;
        *stored = record;
        Ok(Some(value))
    }

    fn current_session(&self) -> Result<Option<UserKey>, StoreError> {
        Ok(lock(&self.state)?.current_session.clone())
    }

    fn set_current_session(&self, key: &UserKey) -> Result<(), StoreError> {
        lock(&self.state)?.current_session = Some(key.clone());
        Ok(())
    }

    fn clear_current_session(&self) -> Result<(), StoreError> {
        lock(&self.state)?.current_session = None;
        Ok(())
    }
}

/// Single JSON document on disk, rewritten through a sibling temp file and a rename.
///
/// The document is loaded once at open. Two processes writing the same file do not see
/// each other's changes and the last write wins.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: Mutex<StoreDocument>,
}

impl JsonFileStore {
    /// Open `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let document = match fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => StoreDocument::default(),
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => StoreDocument::default(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        info!(
            path = %path.display(),
            users = document.users.len(),
            "opened companion store"
        );
        Ok(Self {
            path,
            state: Mutex::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate(&self, change: impl FnOnce(&mut StoreDocument)) -> Result<(), StoreError> {
        let mut document = lock(&self.state)?;
        let mut next = document.clone();
        change(&mut next);
        self.commit(&mut document, next)
    }

    /// Write `next` to disk, then make it the in-memory document. The caller holds the lock.
    fn commit(&self, document: &mut StoreDocument, next: StoreDocument) -> Result<(), StoreError> {
        self.persist(&next)?;
        *document = next;
        Ok(())
    }

    fn persist(&self, document: &StoreDocument) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let bytes = serde_json::to_vec_pretty(document).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, bytes).map_err(io_error)?;
        fs::rename(&staging, &self.path).map_err(io_error)?;

        debug!(path = %self.path.display(), "companion store written");
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn get(&self, key: &UserKey) -> Result<Option<UserRecord>, StoreError> {
        Ok(lock(&self.state)?.users.get(key).cloned())
    }

    fn set(&self, record: UserRecord) -> Result<(), StoreError> {
        self.mutate(|document| {
            document.users.insert(record.email.clone(), record);
        })
    }

    fn insert_new(&self, record: UserRecord) -> Result<bool, StoreError> {
        let mut document = lock(&self.state)?;
        if document.users.contains_key(&record.email) {
            return Ok(false);
        }
        let mut next = document.clone();
        next.users.insert(record.email.clone(), record);
        self.commit(&mut document, next)?;
        Ok(true)
    }

    fn update<T, E, F>(&self, key: &UserKey, change: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&mut UserRecord) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut document = lock(&self.state)?;
        let Some(stored) = document.users.get(key) else {
            return Ok(None);
        };
        let mut record = stored.clone();
        let value = change(&mut record)?;
        let mut next = document.clone();
        next.users.insert(key.clone(), record);
        self.commit(&mut document, next)?;
        Ok(Some(value))
    }

    fn current_session(&self) -> Result<Option<UserKey>, StoreError> {
        Ok(lock(&self.state)?.current_session.clone())
    }

    fn set_current_session(&self, key: &UserKey) -> Result<(), StoreError> {
        self.mutate(|document| document.current_session = Some(key.clone()))
    }

    fn clear_current_session(&self) -> Result<(), StoreError> {
        self.mutate(|document| document.current_session = None)
    }
}
