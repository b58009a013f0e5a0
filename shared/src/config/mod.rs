//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outbound mail provider and SMTP relay settings
//! - `server` - HTTP server binding and public URL
//! - `storage` - Location of the durable verification snapshot

pub mod environment;
pub mod mail;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailConfig, MailProvider, SmtpConfig};
pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Token storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Mail delivery configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            mail: MailConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Build configuration from an arbitrary variable source
    ///
    /// Missing values keep their defaults; unparsable numbers and flags fall
    /// back to defaults as well.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_vars(&lookup);
        let defaults = Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Default::default()
        };

        let server = ServerConfig {
            host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
            port: parse_or(lookup("SERVER_PORT"), defaults.server.port),
            workers: parse_or(lookup("SERVER_WORKERS"), defaults.server.workers),
            public_base_url: lookup("PUBLIC_BASE_URL").unwrap_or(defaults.server.public_base_url),
        };

        let storage = lookup("STORAGE_PATH")
            .map(StorageConfig::new)
            .unwrap_or(defaults.storage);

        let smtp_defaults = defaults.mail.smtp;
        let mail = MailConfig {
            provider: parse_or(lookup("MAIL_PROVIDER"), defaults.mail.provider),
            smtp: SmtpConfig {
                host: lookup("SMTP_HOST").unwrap_or(smtp_defaults.host),
                port: parse_or(lookup("SMTP_PORT"), smtp_defaults.port),
                username: lookup("SMTP_USERNAME").unwrap_or_default(),
                password: lookup("SMTP_PASSWORD").unwrap_or_default(),
                from: lookup("MAIL_FROM").unwrap_or_default(),
                tls: parse_or(lookup("SMTP_TLS"), smtp_defaults.tls),
            },
        };

        let logging = LoggingConfig {
            level: lookup("LOG_LEVEL").unwrap_or(defaults.logging.level),
            format: parse_or(lookup("LOG_FORMAT"), defaults.logging.format),
        };

        Self {
            environment,
            server,
            storage,
            mail,
            logging,
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
