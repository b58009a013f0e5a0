//! Token store trait defining the interface for verification record persistence.

use async_trait::async_trait;

use crate::domain::entities::VerificationRecord;
use crate::errors::PersistenceError;

/// Durable, concurrency-safe mapping from tokens to verification records
///
/// Implementations guard the whole mapping with a single reader/writer
/// discipline: lookups may run concurrently, mutations are exclusive against
/// every other operation. Every mutation is made durable before it returns,
/// and a mutation whose durable write fails leaves the mapping exactly as it
/// was before the call.
///
/// Callers only ever receive clones of stored records.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Insert or overwrite the record stored under `token`
    ///
    /// # Returns
    /// * `Ok(())` - Record stored and persisted
    /// * `Err(PersistenceError)` - Durable write failed; nothing changed
    async fn put(&self, token: &str, record: VerificationRecord) -> Result<(), PersistenceError>;

    /// Look up the record stored under `token` without modifying anything
    ///
    /// # Returns
    /// * `Ok(Some(record))` - Token is outstanding
    /// * `Ok(None)` - Token was never issued or is already consumed
    async fn get(&self, token: &str) -> Result<Option<VerificationRecord>, PersistenceError>;

    /// Remove the record stored under `token`
    ///
    /// Removing an absent token is a no-op, not an error.
    async fn delete(&self, token: &str) -> Result<(), PersistenceError>;

    /// Look up and remove the record stored under `token` in one exclusive step
    ///
    /// When several callers race on the same token exactly one of them
    /// receives `Some`. If the durable write fails the record stays in place
    /// and an error is returned, so the caller can retry.
    async fn take(&self, token: &str) -> Result<Option<VerificationRecord>, PersistenceError>;

    /// Number of outstanding records
    async fn len(&self) -> usize;

    /// Whether no record is outstanding
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
