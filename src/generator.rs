//! Random password generator.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

/// Length used when the caller does not ask for one.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// ASCII letters, digits and punctuation: 94 characters.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
abcdefghijklmnopqrstuvwxyz\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be positive, got {0}")]
    InvalidLength(usize),
}

/// Generates a password of `length` characters using the thread-local CSPRNG.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidLength`] when `length` is zero.
pub fn generate_password(length: usize) -> Result<SecretString, GeneratorError> {
    generate_password_with_rng(&mut rand::thread_rng(), length)
}

/// Generates a password of [`DEFAULT_PASSWORD_LENGTH`] characters.
pub fn generate_default_password() -> SecretString {
    let mut rng = rand::thread_rng();
    SecretString::new(draw(&mut rng, DEFAULT_PASSWORD_LENGTH).into())
}

/// Generates a password with a caller-supplied random source.
///
/// Every character is drawn independently and uniformly from [`ALPHABET`].
pub fn generate_password_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> Result<SecretString, GeneratorError> {
    if length == 0 {
        #[cfg(feature = "tracing")]
        tracing::warn!("rejected password generation with zero length");
        return Err(GeneratorError::InvalidLength(length));
    }
    Ok(SecretString::new(draw(rng, length).into()))
}

fn draw<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
