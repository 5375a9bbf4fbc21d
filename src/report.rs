//! Plain-text rendering of evaluations, generated passwords and history.

use std::fmt::Write;

use secrecy::{ExposeSecret, SecretString};

use crate::session::HistoryEntry;
use crate::types::{CharacterCounts, PasswordEvaluation, PasswordScore, PasswordStrength};

/// Width of the strength bar, in cells.
pub const BAR_WIDTH: usize = 30;

/// Width of the longest bar in the composition chart.
pub const CHART_WIDTH: usize = 40;

const MASK: &str = "********";

/// Renders `score` as a bar filled in proportion to `score / MAX_SCORE`.
pub fn progress_bar(score: PasswordScore, width: usize) -> String {
    let filled = (score.ratio() * width as f64).round() as usize;
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        "-".repeat(width - filled),
        score
    )
}

pub fn banner(strength: PasswordStrength) -> &'static str {
    match strength {
        PasswordStrength::Strong => "Your password is strong!",
        PasswordStrength::Medium => "Your password is medium. Consider improving it.",
        PasswordStrength::Weak => "Your password is weak. Please improve it.",
        PasswordStrength::NotEvaluated => "Password not evaluated.",
    }
}

/// Strength bar, banner and improvement tips.
pub fn render_evaluation(evaluation: &PasswordEvaluation) -> String {
    let mut out = String::new();
    if let Some(score) = evaluation.score {
        let _ = writeln!(out, "{}", progress_bar(score, BAR_WIDTH));
    }
    let _ = writeln!(out, "{}", banner(evaluation.strength()));

    if !evaluation.reasons.is_empty() {
        let _ = writeln!(out, "\nFeedback to Improve");
        for reason in &evaluation.reasons {
            let _ = writeln!(out, "- {reason}");
        }
    }
    out
}

/// Horizontal bar chart of the four character-class counts.
///
/// The axis runs to one past the largest count so that the longest bar
/// never fills the whole chart.
pub fn render_composition(counts: &CharacterCounts) -> String {
    let axis = counts.max() + 1;
    let mut out = String::from("Password Composition\n");
    for (label, count) in counts.labelled() {
        let len = count * CHART_WIDTH / axis;
        let _ = writeln!(
            out,
            "{label:<13} | {:<width$} {count}",
            "#".repeat(len),
            width = CHART_WIDTH
        );
    }
    out
}

pub fn render_generated(password: &SecretString) -> String {
    format!("Generated Password: `{}`", password.expose_secret())
}

/// Table of scored passwords. Passwords are masked unless `reveal` is set.
pub fn render_history(history: &[HistoryEntry], reveal: bool) -> String {
    if history.is_empty() {
        return "No password history yet.\n".to_string();
    }

    let shown: Vec<&str> = history
        .iter()
        .map(|e| if reveal { e.password.expose_secret() } else { MASK })
        .collect();
    let width = shown
        .iter()
        .map(|p| p.chars().count())
        .chain(std::iter::once("Password".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:>3}  {:<width$}  Strength", "#", "Password");
    for (i, (entry, password)) in history.iter().zip(shown).enumerate() {
        let _ = writeln!(out, "{:>3}  {:<width$}  {}", i, password, entry.score.value());
    }
    out
}
