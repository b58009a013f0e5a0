//! Mock Email Service Implementation
//!
//! A mock implementation of the email service for development and testing.
//! Messages are logged and kept in memory instead of being sent.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use uuid::Uuid;

use verimail_shared::utils::{is_valid_email, mask_email};

use super::email_service::EmailService;
use crate::InfrastructureError;

/// A message captured by the mock service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub message_id: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mock email service for development and testing
///
/// This implementation:
/// - Logs messages instead of sending them
/// - Validates recipient addresses
/// - Generates mock message IDs
/// - Keeps sent messages for inspection
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
    /// Messages sent so far
    outbox: Arc<Mutex<Vec<SentEmail>>>,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: Arc::new(AtomicBool::new(false)),
            outbox: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Most recent message sent to `to`, if any
    pub fn last_message_to(&self, to: &str) -> Option<SentEmail> {
        self.outbox
            .lock()
            .ok()?
            .iter()
            .rev()
            .find(|message| message.to == to)
            .cloned()
    }

    /// All messages sent so far
    pub fn sent_messages(&self) -> Vec<SentEmail> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError> {
        if !is_valid_email(to) {
            return Err(InfrastructureError::Mail(format!(
                "Invalid recipient address: {}",
                mask_email(to)
            )));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                recipient = %mask_email(to),
                "Mock email service simulating failure"
            );
            return Err(InfrastructureError::Mail(
                "Simulated email sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(SentEmail {
                message_id: message_id.clone(),
                to: to.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
        }

        info!(
            target: "mail_service",
            provider = "mock",
            recipient = %mask_email(to),
            message_id = %message_id,
            count,
            "Email captured by mock service"
        );
        debug!(target: "mail_service", subject, body_len = body.len(), "Mock email recorded in outbox");

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
