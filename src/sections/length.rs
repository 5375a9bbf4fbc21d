//! Length section - checks password minimum length.

use super::{Candidate, SectionResult};

pub const MIN_LENGTH: usize = 12;

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(tip)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(candidate: &Candidate<'_>) -> SectionResult {
    if candidate.length() < MIN_LENGTH {
        return Some(format!(
            "Password should be at least {} characters long.",
            MIN_LENGTH
        ));
    }
    None
}
