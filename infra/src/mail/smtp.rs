//! SMTP Email Service Implementation
//!
//! Sends messages through an SMTP relay using lettre's tokio transport.
//! With TLS enabled the relay is reached via STARTTLS and credentials are
//! presented; without TLS a plain connection is used, which is only meant
//! for local mail catchers.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use verimail_shared::config::SmtpConfig;
use verimail_shared::utils::mask_email;

use super::email_service::EmailService;
use crate::InfrastructureError;

/// Email service delivering through an SMTP relay
pub struct SmtpEmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    relay: String,
}

impl SmtpEmailService {
    /// Build the transport described by `config`
    ///
    /// No connection is opened here; the relay is contacted on first send.
    ///
    /// # Returns
    ///
    /// * `Err(InfrastructureError::Config)` - Sender address is not a valid mailbox
    /// * `Err(InfrastructureError::Mail)` - TLS parameters for the relay could not be built
    pub fn new(config: &SmtpConfig) -> Result<Self, InfrastructureError> {
        let from: Mailbox = config.sender().parse().map_err(|e| {
            InfrastructureError::Config(format!(
                "Invalid sender address {:?}: {}",
                config.sender(),
                e
            ))
        })?;

        let builder = if config.tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| InfrastructureError::Mail(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.host.as_str())
        };

        let mut builder = builder.port(config.port);
        if config.has_credentials() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            from,
            relay: format!("{}:{}", config.host, config.port),
        })
    }

    /// Relay address this service talks to
    pub fn relay(&self) -> &str {
        &self.relay
    }

    fn build_message(&self, to: &str, subject: &str, body: &str) -> Result<Message, InfrastructureError> {
        let to: Mailbox = to
            .parse()
            .map_err(|e| InfrastructureError::Mail(format!("Invalid recipient address: {}", e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| InfrastructureError::Mail(e.to_string()))
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError> {
        let message = self.build_message(to, subject, body)?;

        let response = self.transport.send(message).await.map_err(|e| {
            error!(
                target: "mail_service",
                provider = "smtp",
                relay = %self.relay,
                recipient = %mask_email(to),
                error = %e,
                "SMTP delivery failed"
            );
            InfrastructureError::Mail(e.to_string())
        })?;

        let message_id = response.message().collect::<Vec<_>>().join(" ");
        info!(
            target: "mail_service",
            provider = "smtp",
            relay = %self.relay,
            recipient = %mask_email(to),
            code = %response.code(),
            "Email accepted by relay"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }

    async fn is_available(&self) -> bool {
        self.transport.test_connection().await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config() -> SmtpConfig {
        SmtpConfig {
            host: "127.0.0.1".to_string(),
            port: 1025,
            from: "noreply@example.com".to_string(),
            tls: false,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_new_with_valid_sender() {
        let service = SmtpEmailService::new(&local_config()).unwrap();
        assert_eq!(service.relay(), "127.0.0.1:1025");
        assert_eq!(service.provider_name(), "SMTP");
    }

    #[tokio::test]
    async fn test_new_rejects_invalid_sender() {
        let config = SmtpConfig {
            from: "not a mailbox".to_string(),
            ..local_config()
        };
        assert!(matches!(
            SmtpEmailService::new(&config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_unavailable() {
        // Nothing listens on port 1 of the loopback interface
        let config = SmtpConfig {
            port: 1,
            ..local_config()
        };
        let service = SmtpEmailService::new(&config).unwrap();
        assert!(!service.is_available().await);
    }

    #[tokio::test]
    async fn test_build_message_rejects_invalid_recipient() {
        let service = SmtpEmailService::new(&local_config()).unwrap();
        assert!(service
            .build_message("not-an-email", "Email Verification", "body")
            .is_err());
        assert!(service
            .build_message("alice@example.com", "Email Verification", "body")
            .is_ok());
    }
}
