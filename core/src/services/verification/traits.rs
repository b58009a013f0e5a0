//! Traits for address validation and delivery integration

use async_trait::async_trait;

/// Trait for outbound delivery of verification tokens
///
/// The core hands over only the recipient and the token; message content and
/// transport belong entirely to the implementation.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `token` to `recipient`
    async fn deliver(&self, recipient: &str, token: &str) -> Result<(), String>;
}

/// Predicate deciding whether a string is a syntactically valid address
pub trait AddressValidator: Send + Sync {
    fn is_valid_address(&self, address: &str) -> bool;
}

/// Default validator accepting bare `local@domain` email addresses
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailAddressValidator;

impl AddressValidator for EmailAddressValidator {
    fn is_valid_address(&self, address: &str) -> bool {
        verimail_shared::utils::is_valid_email(address)
    }
}
