//! Verification record entity for email ownership checks.

use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

/// Number of random bytes behind every token (128 bits)
pub const TOKEN_BYTES: usize = 16;

/// Length of the hex-encoded token
pub const TOKEN_LENGTH: usize = TOKEN_BYTES * 2;

/// One outstanding verification request
///
/// Records are created when a verification begins and removed when the
/// token is consumed. They are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// The address being verified
    pub email: String,

    /// Opaque one-time token, 32 lowercase hex characters
    pub token: String,
}

impl VerificationRecord {
    /// Creates a record for an already generated token
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }

    /// Creates a record with a freshly generated token
    ///
    /// The caller is responsible for validating `email` first.
    pub fn issue(email: impl Into<String>) -> Self {
        Self::new(Self::generate_token(), email)
    }

    /// Generates 128 bits from the operating system CSPRNG, hex-encoded
    pub fn generate_token() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Checks whether `token` has the shape of an issued token
    ///
    /// Anything else can never have been issued, so lookups for it can be
    /// skipped entirely.
    pub fn is_well_formed_token(token: &str) -> bool {
        token.len() == TOKEN_LENGTH
            && token
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_token_shape() {
        for _ in 0..100 {
            let token = VerificationRecord::generate_token();
            assert_eq!(token.len(), TOKEN_LENGTH);
            assert!(VerificationRecord::is_well_formed_token(&token));
        }
    }

    #[test]
    fn test_generated_tokens_are_distinct() {
        let tokens: HashSet<String> = (0..1000)
            .map(|_| VerificationRecord::generate_token())
            .collect();
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_issue_binds_email() {
        let record = VerificationRecord::issue("alice@example.com");
        assert_eq!(record.email, "alice@example.com");
        assert!(VerificationRecord::is_well_formed_token(&record.token));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(!VerificationRecord::is_well_formed_token(""));
        assert!(!VerificationRecord::is_well_formed_token("abc"));
        // Uppercase hex is never produced
        assert!(!VerificationRecord::is_well_formed_token(
            "3F9A0000000000000000000000000000"
        ));
        assert!(!VerificationRecord::is_well_formed_token(
            "3f9a000000000000000000000000000g"
        ));
        assert!(!VerificationRecord::is_well_formed_token(
            "3f9a00000000000000000000000000000"
        ));
    }

    #[test]
    fn test_serialized_layout() {
        let record = VerificationRecord::new("00112233445566778899aabbccddeeff", "bob@example.com");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "bob@example.com",
                "token": "00112233445566778899aabbccddeeff",
            })
        );
    }
}
