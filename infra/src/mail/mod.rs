//! Mail Service Module
//!
//! This module provides email service implementations for delivering
//! verification links.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all mail backends
//! - **Mock Implementation**: In-memory outbox for development and tests
//! - **SMTP Support**: Production delivery via lettre
//! - **Notifier Adapter**: Plugs any backend into the core verification service
//! - **Security**: Recipient masking in logs

use std::sync::Arc;

use verimail_shared::config::{MailConfig, MailProvider};

pub mod email_service;
pub mod mock_email;
pub mod notifier_adapter;
pub mod smtp;

// Re-export commonly used types
pub use email_service::{verification_body, EmailService, VERIFICATION_SUBJECT};
pub use mock_email::{MockEmailService, SentEmail};
pub use notifier_adapter::EmailNotifier;
pub use smtp::SmtpEmailService;

#[cfg(test)]
mod tests;

/// Create an email service based on configuration
///
/// An SMTP relay that cannot be configured falls back to the mock service
/// so the server can still start; the fallback is logged loudly.
pub fn create_email_service(config: &MailConfig) -> Arc<dyn EmailService> {
    match config.provider {
        MailProvider::Mock => Arc::new(MockEmailService::new()),
        MailProvider::Smtp => match SmtpEmailService::new(&config.smtp) {
            Ok(service) => {
                tracing::info!(relay = service.relay(), "SMTP email service configured");
                Arc::new(service)
            }
            Err(e) => {
                tracing::error!("Failed to initialize SMTP email service: {}", e);
                tracing::warn!("Falling back to mock email service");
                Arc::new(MockEmailService::new())
            }
        },
    }
}
