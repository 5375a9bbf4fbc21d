//! Password strength meter library
//!
//! Scores passwords against five criteria (length, uppercase, lowercase,
//! digit, special character) plus a blacklist of common passwords, generates
//! random passwords, and keeps a per-session history of scored passwords.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-meter` interactive binary
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom blacklist file, one password per line
//!   (default: built-in list of common passwords)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{init_blacklist, evaluate_password_strength, generate_password};
//! use secrecy::SecretString;
//!
//! // Initialize blacklist (call once at startup)
//! init_blacklist().expect("Failed to load blacklist");
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password_strength(&password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password_strength(&password);
//!
//! println!("Score: {:?}", evaluation.score);
//! println!("Strength: {}", evaluation.strength());
//!
//! let generated = generate_password(16).expect("length is positive");
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod generator;
mod sections;
mod types;

pub mod report;
pub mod session;

// Public API
pub use blacklist::{
    get_blacklist, init_blacklist, init_blacklist_from_path, is_blacklisted, BlacklistError,
    BLACKLIST_PATH_ENV, DEFAULT_BLACKLIST,
};
pub use evaluator::evaluate_password_strength;
pub use generator::{
    generate_default_password, generate_password, generate_password_with_rng, GeneratorError,
    ALPHABET, DEFAULT_PASSWORD_LENGTH,
};
pub use session::{HistoryEntry, Session};
pub use types::{
    CharacterCounts, PasswordEvaluation, PasswordScore, PasswordStrength, MAX_SCORE,
    SPECIAL_CHARACTERS,
};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, DEBOUNCE};
