//! Unit tests for email service creation

use verimail_shared::config::{MailConfig, MailProvider, SmtpConfig};

use crate::mail::create_email_service;

#[test]
fn test_create_mock_service() {
    let service = create_email_service(&MailConfig::default());
    assert_eq!(service.provider_name(), "Mock");
}

#[tokio::test]
async fn test_create_smtp_service() {
    let config = MailConfig {
        provider: MailProvider::Smtp,
        smtp: SmtpConfig {
            host: "127.0.0.1".to_string(),
            port: 1025,
            from: "noreply@example.com".to_string(),
            tls: false,
            ..Default::default()
        },
    };

    let service = create_email_service(&config);
    assert_eq!(service.provider_name(), "SMTP");
}

#[tokio::test]
async fn test_invalid_smtp_sender_falls_back_to_mock() {
    let config = MailConfig {
        provider: MailProvider::Smtp,
        smtp: SmtpConfig {
            from: String::new(),
            username: String::new(),
            tls: false,
            ..Default::default()
        },
    };

    let service = create_email_service(&config);
    assert_eq!(service.provider_name(), "Mock");
}
