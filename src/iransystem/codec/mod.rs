//! Byte-level encoding and decoding.
//!
//! - [`bytes`]: shaped units to bytes with the form fallback chain, bytes to glyphs
//! - [`zwnj`]: restoring deliberate join breaks after decoding

pub mod bytes;
pub mod zwnj;
