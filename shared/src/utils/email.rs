//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of a forward-path address (RFC 5321)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of the local part (RFC 5321)
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

// Bare `local@domain` address: dot-atom local part, dotted domain of LDH labels
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    )
    .unwrap()
});

/// Check if a string is a syntactically valid bare email address
///
/// Display-name forms such as `Alice <alice@example.com>` are rejected; the
/// address must be exactly what a mail relay would accept as a recipient.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    match email.rsplit_once('@') {
        Some((local, _)) if local.len() <= MAX_LOCAL_PART_LENGTH => EMAIL_REGEX.is_match(email),
        _ => false,
    }
}

/// Mask an email address for logging (e.g., a****@example.com)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}****@{}", first, domain)
        }
        _ => "****".to_string(),
    }
}
