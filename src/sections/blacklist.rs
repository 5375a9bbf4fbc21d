//! Blacklist section - checks if password is a known common password.

use crate::blacklist::is_blacklisted;
use secrecy::ExposeSecret;

use super::{Candidate, SectionResult};

/// Checks if the password is in the blacklist of common passwords.
///
/// # Returns
/// - `Some(tip)` if password is blacklisted
/// - `None` if password is not in blacklist
pub fn blacklist_section(candidate: &Candidate<'_>) -> SectionResult {
    if is_blacklisted(candidate.password().expose_secret()) {
        return Some(
            "This password is too common and weak. Please choose a stronger one.".to_string(),
        );
    }
    None
}
