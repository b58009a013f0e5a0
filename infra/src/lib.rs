//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Verimail service,
//! following Clean Architecture principles. It provides concrete
//! implementations of the ports defined in `verimail_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Storage**: JSON snapshot file backing the token store
//! - **Mail**: Outbound email backends (SMTP via lettre, mock outbox)
//!   and the adapter exposing them as a core `Notifier`

use std::sync::Arc;

use verimail_core::{PersistenceError, VerificationService};
use verimail_shared::config::AppConfig;

/// Storage module - durable token store
pub mod storage;

/// Mail module - outbound email providers
pub mod mail;

pub use mail::{create_email_service, EmailNotifier, EmailService};
pub use storage::FileTokenStore;

/// Verification service wired to the infrastructure implementations
pub type AppVerificationService = VerificationService<FileTokenStore, EmailNotifier>;

/// Infrastructure service container
#[derive(Clone)]
pub struct InfrastructureServices {
    /// Durable token store
    pub token_store: Arc<FileTokenStore>,
    /// Mail backend selected by configuration
    pub email_service: Arc<dyn EmailService>,
    /// Notifier handing tokens to the mail backend
    pub notifier: Arc<EmailNotifier>,
}

impl InfrastructureServices {
    /// Assemble the container from already built parts
    pub fn new(token_store: FileTokenStore, email_service: Arc<dyn EmailService>, config: &AppConfig) -> Self {
        let notifier = EmailNotifier::new(email_service.clone(), config.server.clone());
        Self {
            token_store: Arc::new(token_store),
            email_service,
            notifier: Arc::new(notifier),
        }
    }

    /// Probe the mail backend once
    ///
    /// An unreachable backend does not stop start-up; sends fail with a
    /// delivery error until it recovers.
    pub async fn check_mail_backend(&self) -> bool {
        let available = self.email_service.is_available().await;
        if available {
            tracing::info!(
                provider = self.email_service.provider_name(),
                "Mail backend reachable"
            );
        } else {
            tracing::warn!(
                provider = self.email_service.provider_name(),
                "Mail backend unreachable, verification emails will fail until it recovers"
            );
        }
        available
    }

    /// Build a verification service over these implementations
    pub fn verification_service(&self) -> AppVerificationService {
        VerificationService::new(self.token_store.clone(), self.notifier.clone())
    }
}

/// Initialize infrastructure services
///
/// This function:
/// - Opens the token store, loading any previous snapshot
/// - Selects the mail backend
///
/// A snapshot that exists but cannot be parsed aborts initialization so
/// outstanding tokens are never silently discarded.
pub fn initialize(config: &AppConfig) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!("Initializing infrastructure services...");

    let token_store = FileTokenStore::open(config.storage.path.clone())?;
    let email_service = create_email_service(&config.mail);

    tracing::info!(
        storage = %config.storage.path.display(),
        mail_provider = email_service.provider_name(),
        "Infrastructure services initialized successfully"
    );

    Ok(InfrastructureServices::new(token_store, email_service, config))
}

/// Load application configuration from the environment
///
/// A `.env` file in the working directory is read first when present.
pub fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();
    AppConfig::from_env()
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Token store failure
    #[error("Storage error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Mail backend failure
    #[error("Mail service error: {0}")]
    Mail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
