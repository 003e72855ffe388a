//! Pseudo-random strings and integers for request generation.
//!
//! # Design
//! Every helper comes in two flavours: a convenience form that draws from the
//! thread-local generator (`rand::rng()`), and a `*_with` form that takes any
//! `Rng` so tests and replayable load runs can pass a seeded `StdRng`.
//! Nothing here is suitable for secrets; the output only has to look varied
//! to the server under test.

use rand::Rng;

use crate::error::{Error, Result};

pub const DIGITS: &str = "0123456789";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// `UPPERCASE` followed by `LOWERCASE`.
pub const ALPHABETIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
/// `ALPHABETIC` followed by `DIGITS`.
pub const ALPHANUMERIC: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// One of the built-in character sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Digits,
    Lowercase,
    Uppercase,
    Alphabetic,
    Alphanumeric,
}

impl Alphabet {
    pub fn as_str(self) -> &'static str {
        match self {
            Alphabet::Digits => DIGITS,
            Alphabet::Lowercase => LOWERCASE,
            Alphabet::Uppercase => UPPERCASE,
            Alphabet::Alphabetic => ALPHABETIC,
            Alphabet::Alphanumeric => ALPHANUMERIC,
        }
    }

    /// Draw `length` characters from this alphabet using `rng`.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R, length: usize) -> String {
        // Built-in alphabets are ASCII and never empty.
        draw(rng, self.as_str().as_bytes(), length)
    }
}

/// Uniform integer in `[low, high)` from the thread-local generator.
pub fn random_int(low: i64, high: i64) -> Result<i64> {
    random_int_with(&mut rand::rng(), low, high)
}

pub fn random_int_with<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64) -> Result<i64> {
    if high <= low {
        return Err(Error::InvalidRange { low, high });
    }
    Ok(rng.random_range(low..high))
}

/// `length` characters drawn uniformly, with replacement, from `alphabet`.
///
/// The alphabet is indexed by `char`, so multi-byte characters are drawn
/// whole. Fails with `Error::EmptyAlphabet` only when `length > 0`.
pub fn random_string(alphabet: &str, length: usize) -> Result<String> {
    random_string_with(&mut rand::rng(), alphabet, length)
}

pub fn random_string_with<R: Rng + ?Sized>(
    rng: &mut R,
    alphabet: &str,
    length: usize,
) -> Result<String> {
    let pool: Vec<char> = alphabet.chars().collect();
    if pool.is_empty() && length > 0 {
        return Err(Error::EmptyAlphabet);
    }
    Ok(draw(rng, &pool, length))
}

pub fn random_digits(length: usize) -> String {
    Alphabet::Digits.sample(&mut rand::rng(), length)
}

pub fn random_lowercase(length: usize) -> String {
    Alphabet::Lowercase.sample(&mut rand::rng(), length)
}

pub fn random_uppercase(length: usize) -> String {
    Alphabet::Uppercase.sample(&mut rand::rng(), length)
}

pub fn random_letters(length: usize) -> String {
    Alphabet::Alphabetic.sample(&mut rand::rng(), length)
}

pub fn random_alphanumeric(length: usize) -> String {
    Alphabet::Alphanumeric.sample(&mut rand::rng(), length)
}

/// Caller guarantees `pool` is non-empty whenever `length > 0`.
fn draw<R, T>(rng: &mut R, pool: &[T], length: usize) -> String
where
    R: Rng + ?Sized,
    T: Copy + Into<char>,
{
    (0..length)
        .map(|_| pool[rng.random_range(0..pool.len())].into())
        .collect()
}
