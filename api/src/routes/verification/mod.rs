//! Verification route handlers
//!
//! - `POST /send` issues a token and mails the verification link
//! - `GET /verify/{token}` redeems a token at most once

pub mod send;
pub mod verify;

use std::sync::Arc;

use verimail_core::repositories::TokenStore;
use verimail_core::services::{Notifier, VerificationService};

pub use send::send_verification;
pub use verify::{missing_token, verify_token};

/// Application state that holds shared services
pub struct AppState<S, N>
where
    S: TokenStore,
    N: Notifier,
{
    pub verification_service: Arc<VerificationService<S, N>>,
}

impl<S, N> AppState<S, N>
where
    S: TokenStore,
    N: Notifier,
{
    pub fn new(verification_service: VerificationService<S, N>) -> Self {
        Self {
            verification_service: Arc::new(verification_service),
        }
    }
}
