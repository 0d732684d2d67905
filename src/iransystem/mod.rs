//! Iran System ⇄ Unicode transcoding.
//!
//! - [`tables`]: the byte table and the letter classes derived from it
//! - [`shaping`]: folding, ligature substitution and joining forms
//! - [`layout`]: visual ↔ logical reordering
//! - [`codec`]: bytes, the form fallback chain and ZWNJ reconstruction
//! - [`locale`]: numeral locale policy
//! - [`converter`]: the [`IranSystem`] converter and the [`Transcoder`] seam
//! - [`cache`]: memoizing wrapper

pub mod cache;
pub mod codec;
pub mod converter;
pub mod layout;
pub mod locale;
pub mod shaping;
pub mod tables;
pub mod types;
pub mod utils;

pub use cache::CachedTranscoder;
pub use converter::{IranSystem, Transcoder};
pub use types::error::{IranSystemError, Result};
pub use types::models;
