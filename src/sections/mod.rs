//! Password evaluation sections
//!
//! Each section checks one criterion and returns an improvement tip when the
//! password fails it.

mod blacklist;
mod length;
mod variety;

use secrecy::{ExposeSecret, SecretString};

use crate::types::CharacterCounts;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(tip)` - Section failed, with an improvement tip
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// Signature shared by every section.
pub type Section = fn(&Candidate<'_>) -> SectionResult;

/// A password prepared for evaluation: classified once, read by every section.
pub struct Candidate<'a> {
    password: &'a SecretString,
    length: usize,
    counts: CharacterCounts,
}

impl<'a> Candidate<'a> {
    pub fn new(password: &'a SecretString) -> Self {
        let pwd = password.expose_secret();
        Self {
            password,
            length: pwd.chars().count(),
            counts: CharacterCounts::tally(pwd),
        }
    }

    pub fn password(&self) -> &SecretString {
        self.password
    }

    /// Length in characters, not bytes.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn counts(&self) -> CharacterCounts {
        self.counts
    }
}

/// Scored criteria in the order their tips are reported.
pub const CRITERIA: [Section; 5] = [
    length_section,
    uppercase_section,
    lowercase_section,
    digit_section,
    special_section,
];
