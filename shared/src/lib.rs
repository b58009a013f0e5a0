//! Shared utilities and common types for the Verimail server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Utility functions (email validation, masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LogFormat, LoggingConfig, MailConfig, MailProvider, ServerConfig,
    SmtpConfig, StorageConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::email;
