//! Email Notifier Adapter
//!
//! Bridges the infrastructure [`EmailService`] with the core `Notifier`
//! trait: a token is turned into a public verification link and mailed to
//! the recipient.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use verimail_core::services::Notifier;
use verimail_shared::config::ServerConfig;
use verimail_shared::utils::mask_email;

use super::email_service::EmailService;

/// Adapter that implements the core `Notifier` over any email service
#[derive(Clone)]
pub struct EmailNotifier {
    email_service: Arc<dyn EmailService>,
    server: ServerConfig,
}

impl EmailNotifier {
    /// Create a notifier that links to `server.public_base_url`
    pub fn new(email_service: Arc<dyn EmailService>, server: ServerConfig) -> Self {
        Self {
            email_service,
            server,
        }
    }

    /// Link a recipient follows to redeem `token`
    pub fn verification_link(&self, token: &str) -> String {
        self.server.verification_url(token)
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn deliver(&self, recipient: &str, token: &str) -> Result<(), String> {
        let link = self.verification_link(token);

        match self.email_service.send_verification_link(recipient, &link).await {
            Ok(message_id) => {
                info!(
                    provider = self.email_service.provider_name(),
                    recipient = %mask_email(recipient),
                    message_id = %message_id,
                    "Verification email sent"
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    provider = self.email_service.provider_name(),
                    recipient = %mask_email(recipient),
                    error = %e,
                    "Verification email failed"
                );
                Err(e.to_string())
            }
        }
    }
}
