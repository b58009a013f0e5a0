//! File-backed token store implementation
//!
//! This module keeps every outstanding verification record in memory and
//! mirrors the complete mapping to a JSON file after each mutation:
//! - Reads run concurrently under a shared lock
//! - Mutations hold the exclusive lock across the in-memory change and the
//!   durable write, and roll the change back if the write fails
//! - Snapshots are written to a temporary file in the target directory,
//!   synced, then renamed over the target, so readers of the file never see
//!   a truncated snapshot
//!
//! File layout (pretty-printed JSON object keyed by token):
//!
//! ```json
//! {
//!   "3f9a...c1": { "email": "alice@example.com", "token": "3f9a...c1" }
//! }
//! ```

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use verimail_core::{PersistenceError, TokenStore, VerificationRecord};

type Records = BTreeMap<String, VerificationRecord>;

/// Durable token store backed by a single JSON snapshot file
///
/// Cloning is cheap and every clone shares the same mapping.
#[derive(Clone)]
pub struct FileTokenStore {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    records: RwLock<Records>,
}

impl FileTokenStore {
    /// Open the store at `path`, loading any previous snapshot
    ///
    /// A missing file means no prior state. A file that exists but cannot be
    /// parsed is reported as [`PersistenceError::Corrupt`] instead of being
    /// discarded.
    ///
    /// # Example
    /// ```no_run
    /// use verimail_infra::storage::FileTokenStore;
    ///
    /// let store = FileTokenStore::open("verifications.json").unwrap();
    /// ```
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        let records = load_snapshot(&path)?;

        debug!(
            path = %path.display(),
            records = records.len(),
            "Token store opened"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                path,
                records: RwLock::new(records),
            }),
        })
    }

    /// Location of the snapshot file
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Run a mutation under the exclusive lock on a blocking worker
    ///
    /// The closure runs to completion even if the calling future is dropped,
    /// so a mutation is never left half applied.
    async fn mutate<T, F>(&self, op: F) -> Result<T, PersistenceError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Records, &Path) -> Result<T, PersistenceError> + Send + 'static,
    {
        let inner = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut records = inner.records.blocking_write();
            op(&mut records, &inner.path)
        })
        .await
        .map_err(|e| PersistenceError::Interrupted {
            message: e.to_string(),
        })?
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn put(&self, token: &str, record: VerificationRecord) -> Result<(), PersistenceError> {
        let token = token.to_string();
        self.mutate(move |records, path| {
            let previous = records.insert(token.clone(), record);
            if let Err(e) = write_snapshot(path, records) {
                match previous {
                    Some(previous) => records.insert(token, previous),
                    None => records.remove(&token),
                };
                warn!(path = %path.display(), error = %e, "Rolled back token insert");
                return Err(e);
            }
            Ok(())
        })
        .await
    }

    async fn get(&self, token: &str) -> Result<Option<VerificationRecord>, PersistenceError> {
        Ok(self.inner.records.read().await.get(token).cloned())
    }

    async fn delete(&self, token: &str) -> Result<(), PersistenceError> {
        self.take(token).await.map(|_| ())
    }

    async fn take(&self, token: &str) -> Result<Option<VerificationRecord>, PersistenceError> {
        let token = token.to_string();
        self.mutate(move |records, path| {
            // Absent tokens change nothing, so there is nothing to persist
            let Some(removed) = records.remove(&token) else {
                return Ok(None);
            };
            if let Err(e) = write_snapshot(path, records) {
                records.insert(token, removed);
                warn!(path = %path.display(), error = %e, "Rolled back token removal");
                return Err(e);
            }
            Ok(Some(removed))
        })
        .await
    }

    async fn len(&self) -> usize {
        self.inner.records.read().await.len()
    }
}

fn load_snapshot(path: &Path) -> Result<Records, PersistenceError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Records::new()),
        Err(e) => return Err(PersistenceError::io(path, e)),
    };

    let corrupt = |source| PersistenceError::Corrupt {
        path: path.to_path_buf(),
        source,
    };
    let records: Records = serde_json::from_slice(&bytes).map_err(corrupt)?;

    // Every entry must be keyed by its own token
    if let Some((key, record)) = records.iter().find(|(key, record)| **key != record.token) {
        return Err(corrupt(serde::de::Error::custom(format!(
            "entry {:?} holds a record for token {:?}",
            key, record.token
        ))));
    }

    Ok(records)
}

fn write_snapshot(path: &Path, records: &Records) -> Result<(), PersistenceError> {
    let mut json = serde_json::to_vec_pretty(records).map_err(PersistenceError::Serialize)?;
    json.push(b'\n');

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| PersistenceError::io(dir, e))?;
    file.write_all(&json)
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| PersistenceError::io(file.path(), e))?;
    file.persist(path)
        .map_err(|e| PersistenceError::io(path, e.error))?;

    debug!(path = %path.display(), records = records.len(), "Token snapshot written");
    Ok(())
}
