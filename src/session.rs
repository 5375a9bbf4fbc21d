//! Per-user session context holding the history of scored passwords.

use secrecy::SecretString;

use crate::evaluator::evaluate_password_strength;
use crate::types::{PasswordEvaluation, PasswordScore};

/// One scored submission.
#[derive(Debug)]
pub struct HistoryEntry {
    pub password: SecretString,
    pub score: PasswordScore,
}

/// State for one interactive session.
///
/// History is append-only for the lifetime of the session: duplicates are
/// kept and nothing is evicted.
#[derive(Debug, Default)]
pub struct Session {
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates `password` and records it in the history.
    pub fn submit(&mut self, password: SecretString) -> PasswordEvaluation {
        #[cfg(feature = "async")]
        let evaluation = evaluate_password_strength(&password, None);

        #[cfg(not(feature = "async"))]
        let evaluation = evaluate_password_strength(&password);

        self.record(password, &evaluation);
        evaluation
    }

    /// Records an evaluation produced elsewhere, e.g. by the debounced
    /// evaluator. Returns `false` if the evaluation was cancelled.
    pub fn record(&mut self, password: SecretString, evaluation: &PasswordEvaluation) -> bool {
        match evaluation.score {
            Some(score) => {
                self.history.push(HistoryEntry { password, score });
                true
            }
            None => false,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
