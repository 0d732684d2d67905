//! # iran-system
//!
//! Converts text between Unicode and Iran System, the single-byte Persian
//! code page of DOS-era software. Letters are stored as shaped glyphs in
//! display order; this crate computes the shapes and the order on encode and
//! recovers plain logical Unicode on decode.
pub mod iransystem;

// Re-export the main types for convenience
pub use iransystem::{
    CachedTranscoder,
    IranSystem,
    IranSystemError,
    Result,
    Transcoder,
    models::{
        Config,
        DigitStyle,
        JoiningForm,
        Locale,
    },
};
