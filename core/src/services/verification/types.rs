//! Types for verification service results

/// Result of consuming a verification token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumeResult {
    /// Whether the token was outstanding and is now consumed
    pub valid: bool,
    /// The verified address, present only when `valid` is true
    pub email: Option<String>,
}

impl ConsumeResult {
    pub fn verified(email: impl Into<String>) -> Self {
        Self {
            valid: true,
            email: Some(email.into()),
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            email: None,
        }
    }
}

/// Result of issuing a token and handing it to the notifier
#[derive(Debug, Clone)]
pub struct SendVerificationResult {
    /// The address the token was delivered to
    pub email: String,
    /// The issued token
    pub token: String,
}
