//! Blacklist management module
//!
//! Holds the process-wide set of known-weak passwords. Until a custom list is
//! loaded, lookups fall back to the built-in [`DEFAULT_BLACKLIST`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Environment variable pointing at a custom blacklist file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

/// Built-in list of common weak passwords.
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "password", "123456", "qwerty", "admin", "letmein", "welcome", "123abc",
];

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the custom blacklist path from `PWD_BLACKLIST_PATH`, if set.
pub fn get_blacklist_path() -> Option<PathBuf> {
    std::env::var_os(BLACKLIST_PATH_ENV).map(PathBuf::from)
}

fn default_set() -> HashSet<String> {
    DEFAULT_BLACKLIST.iter().map(|p| p.to_string()).collect()
}

/// Installs `set` unless a blacklist is already active. Returns the size of
/// whichever list ends up active.
fn install(set: HashSet<String>) -> usize {
    let mut guard = COMMON_PASSWORDS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    guard.get_or_insert(set).len()
}

fn active_len() -> Option<usize> {
    COMMON_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(HashSet::len)
}

/// Initializes the password blacklist.
///
/// Loads the file named by `PWD_BLACKLIST_PATH` when the variable is set,
/// otherwise installs [`DEFAULT_BLACKLIST`]. Calling it again after a
/// successful initialization is a no-op that returns the current size.
///
/// # Errors
///
/// Same as [`init_blacklist_from_path`] when a custom path is configured.
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    match get_blacklist_path() {
        Some(path) => init_blacklist_from_path(path),
        None => Ok(install(default_set())),
    }
}

/// Initializes the password blacklist from a newline-delimited file.
///
/// Entries are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File holds no entries
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    if let Some(count) = active_len() {
        return Ok(count);
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: file not found {}", path.display());
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: empty file {}", path.display());
        return Err(BlacklistError::EmptyFile);
    }

    let count = install(set);

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist initialized: {} passwords from {}", count, path.display());

    Ok(count)
}

/// Returns a copy of the active blacklist.
pub fn get_blacklist() -> HashSet<String> {
    COMMON_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(default_set)
}

/// Checks if a password is in the blacklist.
///
/// Exact, case-insensitive match against the whole password. Substrings and
/// variants such as `password1` do not match.
pub fn is_blacklisted(password: &str) -> bool {
    let needle = password.to_lowercase();
    let guard = COMMON_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    match guard.as_ref() {
        Some(set) => set.contains(&needle),
        None => DEFAULT_BLACKLIST.iter().any(|p| *p == needle),
    }
}

/// Resets the blacklist for testing purposes.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = COMMON_PASSWORDS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
