//! Verification service for email ownership checks
//!
//! This service issues one-time tokens, persists them through a token store
//! and redeems each of them at most once.

use std::sync::Arc;

use crate::domain::entities::VerificationRecord;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::TokenStore;

use super::traits::{AddressValidator, EmailAddressValidator, Notifier};
use super::types::{ConsumeResult, SendVerificationResult};

/// Verification service for issuing and redeeming email verification tokens
///
/// Token state machine: `issued` after [`begin`](Self::begin) succeeds,
/// `consumed` after the first successful [`consume`](Self::consume). Consumed
/// is terminal. Tokens do not expire.
pub struct VerificationService<S: TokenStore, N: Notifier> {
    /// Durable storage of outstanding records
    token_store: Arc<S>,
    /// Delivery collaborator
    notifier: Arc<N>,
    /// Address syntax check applied before any record is created
    validator: Arc<dyn AddressValidator>,
}

impl<S: TokenStore, N: Notifier> VerificationService<S, N> {
    /// Create a new verification service using the default email validator
    ///
    /// # Arguments
    ///
    /// * `token_store` - Token store implementation
    /// * `notifier` - Delivery implementation
    pub fn new(token_store: Arc<S>, notifier: Arc<N>) -> Self {
        Self {
            token_store,
            notifier,
            validator: Arc::new(EmailAddressValidator),
        }
    }

    /// Replace the address validator
    pub fn with_validator(mut self, validator: Arc<dyn AddressValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Issue a token for `email` and persist it
    ///
    /// This method:
    /// 1. Validates the address syntax
    /// 2. Generates a fresh 128-bit token
    /// 3. Stores the record durably
    ///
    /// The token is returned for the caller to hand to a delivery
    /// collaborator. A persistence failure is returned unchanged and never
    /// retried here, since a retry would mint a second live token.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The issued token
    /// * `Err(DomainError::Validation)` - Malformed address; nothing stored
    /// * `Err(DomainError::Persistence)` - Durable write failed; nothing stored
    pub async fn begin(&self, email: &str) -> DomainResult<String> {
        if !self.validator.is_valid_address(email) {
            return Err(ValidationError::InvalidEmail {
                email: email.to_string(),
            }
            .into());
        }

        let record = VerificationRecord::issue(email);
        let token = record.token.clone();
        self.token_store.put(&token, record).await?;

        Ok(token)
    }

    /// Redeem `token`, at most once
    ///
    /// Unknown, malformed and already consumed tokens yield an invalid result
    /// rather than an error. The record is removed before a valid result is
    /// reported; if that removal cannot be persisted the error is returned and
    /// the token stays redeemable so the caller may retry.
    ///
    /// # Returns
    ///
    /// * `Ok(ConsumeResult)` - `valid` is true for the first redemption only
    /// * `Err(DomainError::Persistence)` - Removal could not be persisted
    pub async fn consume(&self, token: &str) -> DomainResult<ConsumeResult> {
        if !VerificationRecord::is_well_formed_token(token) {
            return Ok(ConsumeResult::invalid());
        }

        match self.token_store.take(token).await? {
            Some(record) => Ok(ConsumeResult::verified(record.email)),
            None => Ok(ConsumeResult::invalid()),
        }
    }

    /// Issue a token for `email` and deliver it through the notifier
    ///
    /// If delivery fails the freshly issued token is withdrawn so that no
    /// undeliverable token stays live, and the delivery error is returned.
    pub async fn send_verification(&self, email: &str) -> DomainResult<SendVerificationResult> {
        let token = self.begin(email).await?;

        if let Err(message) = self.notifier.deliver(email, &token).await {
            let withdrawn = self.token_store.delete(&token).await.is_ok();
            let message = if withdrawn {
                message
            } else {
                format!("{} (token could not be withdrawn)", message)
            };
            return Err(DomainError::Delivery { message });
        }

        Ok(SendVerificationResult {
            email: email.to_string(),
            token,
        })
    }

    /// Number of tokens issued and not yet consumed
    pub async fn outstanding(&self) -> usize {
        self.token_store.len().await
    }

    /// Generate a new token
    ///
    /// This is a utility method that can be used independently if needed.
    pub fn generate_token() -> String {
        VerificationRecord::generate_token()
    }
}
