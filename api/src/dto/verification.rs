use serde::{Deserialize, Serialize};

/// Body of `POST /send`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendVerificationRequest {
    pub email: String,
}

/// Success body of `POST /send`
///
/// The issued token only travels by email and is never echoed here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendVerificationResponse {
    pub message: String,
}

impl SendVerificationResponse {
    pub fn sent() -> Self {
        Self {
            message: "Verification email sent".to_string(),
        }
    }
}

/// Body of `GET /verify/{token}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}
