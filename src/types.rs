//! Evaluation result types.

use std::fmt;

/// Highest score a password can reach: one point per satisfied criterion.
pub const MAX_SCORE: u8 = 5;

/// Numeric strength score, always within `0..=MAX_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Creates a score, clamping values above [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Fraction of the maximum score, in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        f64::from(self.0) / f64::from(MAX_SCORE)
    }

    /// Classification band for this score.
    pub fn strength(&self) -> PasswordStrength {
        match self.0 {
            MAX_SCORE => PasswordStrength::Strong,
            3..=4 => PasswordStrength::Medium,
            _ => PasswordStrength::Weak,
        }
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Classification band shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    /// Evaluation was cancelled before a score was computed.
    NotEvaluated,
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::NotEvaluated => "not evaluated",
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        };
        f.write_str(label)
    }
}

/// Symbols that count as special characters. Other punctuation does not.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Per-class character counts of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterCounts {
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub special: usize,
}

impl CharacterCounts {
    /// Classifies every character of `password` in a single pass.
    ///
    /// Only ASCII letters and digits and the symbols in
    /// [`SPECIAL_CHARACTERS`] are counted; everything else is ignored.
    pub fn tally(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut counts, c| {
            match c {
                'A'..='Z' => counts.uppercase += 1,
                'a'..='z' => counts.lowercase += 1,
                '0'..='9' => counts.digits += 1,
                c if SPECIAL_CHARACTERS.contains(c) => counts.special += 1,
                _ => {}
            }
            counts
        })
    }

    /// Largest of the four counts.
    pub fn max(&self) -> usize {
        self.uppercase
            .max(self.lowercase)
            .max(self.digits)
            .max(self.special)
    }

    /// Labelled counts in display order.
    pub fn labelled(&self) -> [(&'static str, usize); 4] {
        [
            ("Uppercase", self.uppercase),
            ("Lowercase", self.lowercase),
            ("Numbers", self.digits),
            ("Special Chars", self.special),
        ]
    }
}

/// Result of evaluating a password.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    /// `None` when the evaluation was cancelled.
    pub score: Option<PasswordScore>,
    /// Improvement tips in evaluation order.
    pub reasons: Vec<String>,
    pub counts: CharacterCounts,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        self.score
            .map(|s| s.strength())
            .unwrap_or(PasswordStrength::NotEvaluated)
    }
}
