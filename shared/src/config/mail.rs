//! Outbound mail configuration module

use serde::{Deserialize, Serialize};

/// Which mail backend delivers verification messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Real SMTP relay
    Smtp,
    /// Log-only delivery for development and tests
    #[default]
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" => Ok(MailProvider::Smtp),
            "mock" => Ok(MailProvider::Mock),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// SMTP relay settings
#[derive(Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// Relay host name
    pub host: String,

    /// Relay port (587 for STARTTLS submission)
    pub port: u16,

    /// Account used to authenticate against the relay
    #[serde(default)]
    pub username: String,

    /// Account password or application password
    #[serde(default, skip_serializing)]
    pub password: String,

    /// Sender address; falls back to `username` when empty
    #[serde(default)]
    pub from: String,

    /// Use STARTTLS and credentials; disable only for local mail catchers
    #[serde(default = "default_tls")]
    pub tls: bool,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::from("smtp.gmail.com"),
            port: 587,
            username: String::new(),
            password: String::new(),
            from: String::new(),
            tls: default_tls(),
        }
    }
}

impl SmtpConfig {
    /// Address placed in the `From` header
    pub fn sender(&self) -> &str {
        if self.from.is_empty() {
            &self.username
        } else {
            &self.from
        }
    }

    /// Whether credentials should be presented to the relay
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .field("tls", &self.tls)
            .finish()
    }
}

/// Mail delivery configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MailConfig {
    /// Selected backend
    #[serde(default)]
    pub provider: MailProvider,

    /// SMTP settings, used when `provider` is `smtp`
    #[serde(default)]
    pub smtp: SmtpConfig,
}

fn default_tls() -> bool {
    true
}
