//! Identity intake: name and email from the first form

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ValidationError;
use crate::schemas::CandidateProfile;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Simple `local@domain.tld` check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate the identity form and return a profile carrying it.
///
/// Both fields are trimmed before checking. Missing fields are reported
/// before a malformed email.
pub fn submit_identity(
    name: &str,
    email: &str,
    profile: &CandidateProfile,
) -> Result<CandidateProfile, ValidationError> {
    let name = name.trim();
    let email = email.trim();

    if name.is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if email.is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }

    Ok(profile.clone().with_identity(name, email))
}
