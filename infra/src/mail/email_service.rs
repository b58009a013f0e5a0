//! Email Service Interface
//!
//! Defines the trait for email service implementations that deliver
//! verification links and other transactional messages.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Subject line of verification messages
pub const VERIFICATION_SUBJECT: &str = "Email Verification";

/// Email service trait for sending plain-text messages
///
/// Implementations include:
/// - SMTP relay via lettre
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send a plain-text email
    ///
    /// # Arguments
    ///
    /// * `to` - The recipient's address
    /// * `subject` - Subject line
    /// * `body` - Plain-text body
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Identifier or relay response for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError>;

    /// Send a verification link
    ///
    /// Convenience method that formats the verification message according to
    /// the application's standard wording.
    async fn send_verification_link(&self, to: &str, link: &str) -> Result<String, InfrastructureError> {
        self.send_email(to, VERIFICATION_SUBJECT, &verification_body(link)).await
    }

    /// Get the service provider name (e.g., "SMTP", "Mock")
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Body of the verification message pointing at `link`
pub fn verification_body(link: &str) -> String {
    format!(
        "Verify your email: {}\n\nIf you did not request this, you can ignore this message.\n",
        link
    )
}
