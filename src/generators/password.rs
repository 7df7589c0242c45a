// src/generators/password.rs
use rand::rngs::OsRng;
use rand_core::RngCore;
use thiserror::Error;

/// The 70 symbols passwords are drawn from: letters, digits, and the same
/// special set the evaluator checks for.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("password length must be at least 1, got {0}")]
    InvalidLength(usize),

    #[error("secure randomness source unavailable: {0}")]
    EntropyUnavailable(#[from] rand_core::Error),
}

/// Generate a random password of exactly `length` characters.
///
/// Every character is an independent uniform draw from [`ALPHABET`], taken
/// from the operating system CSPRNG. Bytes at or above the largest multiple
/// of the alphabet size are rejected so the modulo stays unbiased. An
/// entropy failure is propagated; there is no fallback source.
pub fn generate(length: usize) -> Result<String, GeneratorError> {
    if length == 0 {
        return Err(GeneratorError::InvalidLength(length));
    }

    let zone = 256 - 256 % ALPHABET.len();
    let mut password = String::with_capacity(length);
    let mut byte = [0u8; 1];

    while password.len() < length {
        OsRng.try_fill_bytes(&mut byte)?;
        let value = byte[0] as usize;
        if value < zone {
            password.push(ALPHABET[value % ALPHABET.len()] as char);
        }
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_holds_seventy_symbols() {
        assert_eq!(ALPHABET.len(), 70);
    }

    #[test]
    fn lengths_are_exact_and_alphabet_bound() {
        for n in 8..=20 {
            let pwd = generate(n).expect("generation should succeed");
            assert_eq!(pwd.chars().count(), n);
            assert!(
                pwd.bytes().all(|b| ALPHABET.contains(&b)),
                "unexpected character in {pwd:?}"
            );
        }
    }

    #[test]
    fn zero_length_is_rejected() {
        assert!(matches!(generate(0), Err(GeneratorError::InvalidLength(0))));
    }

    #[test]
    fn single_character_passwords_work() {
        let pwd = generate(1).unwrap();
        assert_eq!(pwd.len(), 1);
    }

    #[test]
    fn successive_outputs_differ() {
        // 70^20 possibilities; a collision here means the randomness source
        // is broken.
        let a = generate(20).unwrap();
        let b = generate(20).unwrap();
        assert_ne!(a, b);
    }
}
