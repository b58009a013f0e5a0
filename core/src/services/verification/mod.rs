//! Verification service module for email ownership checks
//!
//! This module provides the one-time token workflow:
//! - Token issuance bound to a validated email address
//! - Durable storage through a [`TokenStore`](crate::repositories::TokenStore)
//! - Hand-off to an external [`Notifier`] for delivery
//! - Exactly-once consumption of issued tokens

mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::VerificationService;
pub use traits::{AddressValidator, EmailAddressValidator, Notifier};
pub use types::{ConsumeResult, SendVerificationResult};
