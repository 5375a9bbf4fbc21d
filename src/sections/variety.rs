//! Character variety sections - one per character class.

use super::{Candidate, SectionResult};

fn require(count: usize, tip: &str) -> SectionResult {
    if count == 0 {
        return Some(tip.to_string());
    }
    None
}

pub fn uppercase_section(candidate: &Candidate<'_>) -> SectionResult {
    require(
        candidate.counts().uppercase,
        "Include at least one uppercase letter.",
    )
}

pub fn lowercase_section(candidate: &Candidate<'_>) -> SectionResult {
    require(
        candidate.counts().lowercase,
        "Include at least one lowercase letter.",
    )
}

pub fn digit_section(candidate: &Candidate<'_>) -> SectionResult {
    require(candidate.counts().digits, "Include at least one number.")
}

/// Only symbols from [`crate::SPECIAL_CHARACTERS`] satisfy this section.
pub fn special_section(candidate: &Candidate<'_>) -> SectionResult {
    require(
        candidate.counts().special,
        "Include at least one special character.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::Section;
    use secrecy::SecretString;

    fn failing(pwd: &str) -> Vec<String> {
        let pwd = SecretString::new(pwd.to_string().into());
        let candidate = Candidate::new(&pwd);
        let sections: [Section; 4] = [
            uppercase_section,
            lowercase_section,
            digit_section,
            special_section,
        ];
        sections
            .iter()
            .filter_map(|section| section(&candidate))
            .collect()
    }

    #[test]
    fn test_variety_missing_uppercase() {
        let tips = failing("lowercase123!");
        assert_eq!(tips, vec!["Include at least one uppercase letter."]);
    }

    #[test]
    fn test_variety_missing_lowercase() {
        let tips = failing("UPPERCASE123!");
        assert_eq!(tips, vec!["Include at least one lowercase letter."]);
    }

    #[test]
    fn test_variety_missing_numbers() {
        let tips = failing("NoNumbers!");
        assert_eq!(tips, vec!["Include at least one number."]);
    }

    #[test]
    fn test_variety_missing_special() {
        let tips = failing("NoSpecial123");
        assert_eq!(tips, vec!["Include at least one special character."]);
    }

    #[test]
    fn test_variety_unlisted_symbol_is_not_special() {
        let tips = failing("Under_score1");
        assert_eq!(tips, vec!["Include at least one special character."]);
    }

    #[test]
    fn test_variety_all_categories() {
        assert!(failing("HasAll123!@#").is_empty());
    }

    #[test]
    fn test_variety_non_ascii_letters_do_not_count() {
        let tips = failing("ÄÖÜäöü");
        assert_eq!(tips.len(), 4);
    }
}
