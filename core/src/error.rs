//! Error type for the flood core library.
//!
//! # Design
//! The builders are deliberately forgiving: absent fields take defaults and
//! nothing is validated. The variants here cover the few places where
//! silently producing output would be wrong: a JSON payload that cannot be
//! serialized, an argument bag that cannot be parsed, and caller misuse of
//! the random helpers.

use thiserror::Error;

/// Errors returned by `flood_core` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The JSON payload could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A JSON argument bag could not be parsed into `RequestArgs`.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// `random_int` was called with `high <= low`.
    #[error("invalid range: [{low}, {high}) is empty")]
    InvalidRange { low: i64, high: i64 },

    /// A non-empty string was requested from an empty alphabet.
    #[error("cannot draw characters from an empty alphabet")]
    EmptyAlphabet,
}

pub type Result<T> = std::result::Result<T, Error>;
