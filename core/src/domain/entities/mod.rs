//! Domain entities representing core business objects.

pub mod verification_record;

// Re-export commonly used types
pub use verification_record::{VerificationRecord, TOKEN_BYTES, TOKEN_LENGTH};
