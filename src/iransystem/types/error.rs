//! Custom error types for the iran-system crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IranSystemError {
    /// A character has no Iran System byte and no fallback character is configured.
    #[error("Character {character:?} at position {index} has no Iran System mapping and no fallback is set")]
    UnmappedCharacter { character: char, index: usize },

    /// The configured fallback character cannot itself be encoded.
    #[error("Fallback character {0:?} has no Iran System mapping")]
    UnmappedFallback(char),

    /// A hex string could not be turned into bytes (bad digit, odd length or empty input).
    #[error("Invalid hex input: {0}")]
    InvalidHexInput(String),

    /// A mutex lock was poisoned, indicating a panic in another thread holding the lock.
    #[error("A mutex lock was poisoned, indicating a panic in another thread holding the lock.")]
    LockPoisoned,
}

/// A convenience `Result` type alias using the crate's `IranSystemError` type.
pub type Result<T> = std::result::Result<T, IranSystemError>;
