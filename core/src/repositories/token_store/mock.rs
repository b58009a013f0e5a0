//! Mock implementation of TokenStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::VerificationRecord;
use crate::errors::PersistenceError;

use super::r#trait::TokenStore;

/// In-memory token store with switchable write failures
pub struct MockTokenStore {
    records: Arc<RwLock<HashMap<String, VerificationRecord>>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MockTokenStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            fail_writes: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    /// Make every subsequent mutation fail as if the disk were unavailable
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful durable writes
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn persist(&self) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::io(
                "mock-store.json",
                io::Error::new(io::ErrorKind::Other, "simulated write failure"),
            ));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Default for MockTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn put(&self, token: &str, record: VerificationRecord) -> Result<(), PersistenceError> {
        let mut records = self.records.write().await;
        let previous = records.insert(token.to_string(), record);
        if let Err(e) = self.persist() {
            match previous {
                Some(previous) => records.insert(token.to_string(), previous),
                None => records.remove(token),
            };
            return Err(e);
        }
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<VerificationRecord>, PersistenceError> {
        Ok(self.records.read().await.get(token).cloned())
    }

    async fn delete(&self, token: &str) -> Result<(), PersistenceError> {
        self.take(token).await.map(|_| ())
    }

    async fn take(&self, token: &str) -> Result<Option<VerificationRecord>, PersistenceError> {
        let mut records = self.records.write().await;
        let Some(removed) = records.remove(token) else {
            return Ok(None);
        };
        if let Err(e) = self.persist() {
            records.insert(token.to_string(), removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
