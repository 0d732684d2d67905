//! Hex helpers for moving legacy bytes through text channels.

use crate::iransystem::types::error::{IranSystemError, Result};

/// Parses hex text into bytes. Upper and lower case digits are accepted and
/// whitespace anywhere in the input is ignored.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        return Err(IranSystemError::InvalidHexInput("empty input".to_string()));
    }
    hex::decode(&digits).map_err(|e| IranSystemError::InvalidHexInput(format!("{:?}: {}", input, e)))
}

/// Lowercase hex of `bytes`, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
