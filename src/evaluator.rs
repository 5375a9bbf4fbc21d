//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{blacklist_section, Candidate, CRITERIA};
use crate::types::{PasswordEvaluation, PasswordScore};

#[cfg(feature = "async")]
use crate::types::CharacterCounts;

/// Delay before a debounced evaluation starts.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates password strength and returns a detailed evaluation.
///
/// One point is awarded per satisfied criterion (length, uppercase,
/// lowercase, digit, special character). A blacklisted password scores 0
/// and gets an extra tip; tips from failed criteria are kept.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `PasswordEvaluation` containing score, tips and character counts.
/// The score is `None` only if the token was cancelled.
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    let candidate = Candidate::new(password);
    let counts = candidate.counts();
    let mut reasons = Vec::new();
    let mut points = 0u8;

    for section in CRITERIA {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if is_cancelled(token.as_ref()) {
                return cancelled(reasons, counts);
            }
        }

        match section(&candidate) {
            Some(reason) => reasons.push(reason),
            None => points += 1,
        }
    }

    #[cfg(feature = "async")]
    {
        if is_cancelled(token.as_ref()) {
            return cancelled(reasons, counts);
        }
    }

    let mut score = PasswordScore::new(points);
    if let Some(reason) = blacklist_section(&candidate) {
        score = PasswordScore::new(0);
        reasons.push(reason);
    }

    PasswordEvaluation {
        score: Some(score),
        reasons,
        counts,
    }
}

#[cfg(feature = "async")]
fn is_cancelled(token: Option<&CancellationToken>) -> bool {
    token.is_some_and(CancellationToken::is_cancelled)
}

#[cfg(feature = "async")]
fn cancelled(mut reasons: Vec<String>, counts: CharacterCounts) -> PasswordEvaluation {
    #[cfg(feature = "tracing")]
    tracing::debug!("password evaluation cancelled");

    reasons.push("Evaluation cancelled".to_string());
    PasswordEvaluation {
        score: None,
        reasons,
        counts,
    }
}

/// Async version that debounces, evaluates and sends the result via channel.
///
/// Nothing is sent if `token` is cancelled while waiting out [`DEBOUNCE`];
/// a cancellation during evaluation sends an unscored result.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::trace!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded during debounce");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CharacterCounts, PasswordStrength, MAX_SCORE};
    use serial_test::serial;

    fn evaluate(pwd: &str) -> PasswordEvaluation {
        let pwd = SecretString::new(pwd.to_string().into());

        #[cfg(feature = "async")]
        let evaluation = evaluate_password_strength(&pwd, None);

        #[cfg(not(feature = "async"))]
        let evaluation = evaluate_password_strength(&pwd);

        evaluation
    }

    fn score(evaluation: &PasswordEvaluation) -> u8 {
        evaluation.score.expect("evaluation should be scored").value()
    }

    #[test]
    #[serial]
    fn test_evaluate_strong_password() {
        crate::blacklist::reset_blacklist_for_testing();
        let evaluation = evaluate("Tr0ub4dor&3Zz");

        assert_eq!(score(&evaluation), MAX_SCORE);
        assert!(evaluation.reasons.is_empty());
        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
    }

    #[test]
    #[serial]
    fn test_evaluate_blacklisted_password() {
        crate::blacklist::reset_blacklist_for_testing();
        let evaluation = evaluate("password");

        assert_eq!(score(&evaluation), 0);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(
            evaluation.reasons,
            vec![
                "Password should be at least 12 characters long.",
                "Include at least one uppercase letter.",
                "Include at least one number.",
                "Include at least one special character.",
                "This password is too common and weak. Please choose a stronger one.",
            ]
        );
        assert_eq!(evaluation.counts.lowercase, 8);
    }

    #[test]
    #[serial]
    fn test_evaluate_blacklist_is_case_insensitive() {
        crate::blacklist::reset_blacklist_for_testing();
        let evaluation = evaluate("PassWord");

        assert_eq!(score(&evaluation), 0);
        assert_eq!(evaluation.counts.uppercase, 2);
        assert!(evaluation.reasons.last().unwrap().contains("too common"));
    }

    #[test]
    #[serial]
    fn test_evaluate_empty_password() {
        crate::blacklist::reset_blacklist_for_testing();
        let evaluation = evaluate("");

        assert_eq!(score(&evaluation), 0);
        assert_eq!(evaluation.reasons.len(), 5);
        assert_eq!(evaluation.counts, CharacterCounts::default());
    }

    #[test]
    #[serial]
    fn test_evaluate_medium_password() {
        crate::blacklist::reset_blacklist_for_testing();
        // Short but with every class.
        let evaluation = evaluate("MyPass123!");

        assert_eq!(score(&evaluation), 4);
        assert_eq!(evaluation.strength(), PasswordStrength::Medium);
        assert_eq!(
            evaluation.reasons,
            vec!["Password should be at least 12 characters long."]
        );
    }

    #[test]
    #[serial]
    fn test_evaluate_weak_password() {
        crate::blacklist::reset_blacklist_for_testing();
        let evaluation = evaluate("abc123");

        assert_eq!(score(&evaluation), 2);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(evaluation.reasons.len(), 3);
    }

    #[test]
    #[serial]
    fn test_evaluate_tips_follow_criteria_order() {
        crate::blacklist::reset_blacklist_for_testing();
        let evaluation = evaluate("!!!!");

        assert_eq!(score(&evaluation), 1);
        assert_eq!(
            evaluation.reasons,
            vec![
                "Password should be at least 12 characters long.",
                "Include at least one uppercase letter.",
                "Include at least one lowercase letter.",
                "Include at least one number.",
            ]
        );
    }

    #[test]
    #[serial]
    fn test_evaluate_non_ascii_only_affects_length() {
        crate::blacklist::reset_blacklist_for_testing();
        let evaluation = evaluate("ÄÄÄÄÄÄÄÄÄÄÄÄ");

        assert_eq!(score(&evaluation), 1);
        assert_eq!(evaluation.counts, CharacterCounts::default());
    }

    #[test]
    #[serial]
    fn test_evaluate_score_boundaries() {
        crate::blacklist::reset_blacklist_for_testing();
        let test_passwords = [
            "",
            "a",
            "password",
            "123456",
            "MyPass123!",
            "VeryStrongPassword123!@#",
            "🙂🙂🙂🙂🙂🙂🙂🙂🙂🙂🙂🙂🙂",
        ];

        for pwd_str in test_passwords {
            let evaluation = evaluate(pwd_str);
            let value = score(&evaluation);
            assert!(
                value <= MAX_SCORE,
                "Score {} out of bounds for password '{}'",
                value,
                pwd_str
            );
        }
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::types::PasswordStrength;
    use serial_test::serial;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test]
    #[serial]
    async fn test_evaluate_with_cancellation() {
        crate::blacklist::reset_blacklist_for_testing();
        let token = CancellationToken::new();
        token.cancel();

        let evaluation = evaluate_password_strength(&secret("SomePassword123!"), Some(token));

        assert_eq!(evaluation.strength(), PasswordStrength::NotEvaluated);
        assert!(evaluation.score.is_none());
        assert_eq!(evaluation.reasons, vec!["Evaluation cancelled"]);
        assert_eq!(evaluation.counts.digits, 3);
    }

    #[tokio::test]
    #[serial]
    async fn test_evaluate_without_cancellation() {
        crate::blacklist::reset_blacklist_for_testing();
        let token = CancellationToken::new();

        let evaluation = evaluate_password_strength(&secret("TestPass123!"), Some(token));

        assert_ne!(evaluation.strength(), PasswordStrength::NotEvaluated);
        assert!(evaluation.score.is_some());
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_evaluate_password_strength_tx() {
        crate::blacklist::reset_blacklist_for_testing();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_strength_tx(&secret("TestPass123!"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.score.map(|s| s.value()), Some(5));
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_evaluate_tx_cancelled_during_debounce_sends_nothing() {
        crate::blacklist::reset_blacklist_for_testing();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let canceller = token.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(DEBOUNCE / 2).await;
            canceller.cancel();
        });

        evaluate_password_strength_tx(&secret("TestPass123!"), token, tx).await;
        handle.await.unwrap();

        // Sender was dropped without sending.
        assert!(rx.recv().await.is_none());
    }
}
