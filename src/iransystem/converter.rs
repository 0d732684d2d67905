//! The high-level Iran System converter.
//!
//! # Pipeline
//!
//! ```text
//! encode: text ─fold─▶ chars ─digits─▶ chars ─shape─▶ units ─table─▶ bytes ─visual─▶ bytes
//! decode: bytes ─table─▶ glyphs ─logical─▶ glyphs ─zwnj─▶ text ─digit style─▶ text
//! ```

use log::debug;

use crate::iransystem::codec::{bytes, zwnj};
use crate::iransystem::layout::{self, orientation};
use crate::iransystem::types::error::{IranSystemError, Result};
use crate::iransystem::types::models::{Config, Glyph, Locale};
use crate::iransystem::{locale, shaping, utils};

/// A Unicode ⇄ legacy byte converter.
///
/// Any backend that produces the same bytes can stand in for [`IranSystem`]
/// wherever a `Transcoder` is expected.
pub trait Transcoder {
    fn encode(&self, text: &str) -> Result<Vec<u8>>;
    fn decode(&self, bytes: &[u8]) -> String;
}

/// Converter between Unicode text and Iran System bytes.
///
/// Construction validates the [`Config`]; afterwards every call is pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IranSystem {
    config: Config,
    fallback_byte: Option<u8>,
}

impl Default for IranSystem {
    fn default() -> Self {
        Self {
            config: Config::default(),
            fallback_byte: None,
        }
    }
}

impl IranSystem {
    /// Creates a converter, failing if the fallback character cannot be encoded.
    pub fn new(config: Config) -> Result<Self> {
        let fallback_byte = match config.fallback_character {
            Some(c) => Some(bytes::fallback_byte(c).ok_or(IranSystemError::UnmappedFallback(c))?),
            None => None,
        };
        debug!("Converter configured: {:?}", config);
        Ok(Self { config, fallback_byte })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encodes Unicode text to Iran System bytes.
    ///
    /// # Errors
    /// [`IranSystemError::UnmappedCharacter`] for a character with no byte
    /// when no fallback character is configured.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let mut chars = shaping::fold_text(text);
        let locale = locale::detect_from_chars(chars.iter().map(|&(c, _)| c));
        locale::localize_digits(&mut chars, locale);

        let shaped = shaping::shape(&chars);
        let mut encoded = shaped
            .iter()
            .map(|s| bytes::encode_shaped(s, self.fallback_byte))
            .collect::<Result<Vec<u8>>>()?;
        if self.config.visual_ordering {
            for run in layout::reversible_runs(&shaped) {
                encoded[run].reverse();
            }
        }
        debug!("Encoded {} chars to {} bytes", text.chars().count(), encoded.len());
        Ok(encoded)
    }

    /// Decodes Iran System bytes. Never fails: undefined bytes become U+FFFD.
    pub fn decode(&self, data: &[u8]) -> String {
        let glyphs: Vec<Glyph> = data.iter().map(|&b| bytes::decode_byte(b)).collect();
        let logical = if self.config.visual_ordering {
            orientation::to_logical_checked(glyphs)
        } else {
            glyphs
        };
        let text = zwnj::reinsert(&logical);
        locale::apply_digit_style(text, self.config.decoded_digits)
    }

    /// Decodes a hex dump of Iran System bytes.
    ///
    /// # Errors
    /// [`IranSystemError::InvalidHexInput`] for empty input, a non-hex
    /// character or an odd number of digits.
    pub fn decode_hex(&self, input: &str) -> Result<String> {
        let data = utils::parse_hex(input)?;
        Ok(self.decode(&data))
    }

    /// Encodes text and returns the bytes as lowercase hex.
    pub fn encode_hex(&self, text: &str) -> Result<String> {
        self.encode(text).map(|data| utils::to_hex(&data))
    }

    /// See [`locale::detect_locale`].
    pub fn detect_locale(&self, text: &str) -> Locale {
        locale::detect_locale(text)
    }
}

impl Transcoder for IranSystem {
    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        IranSystem::encode(self, text)
    }

    fn decode(&self, bytes: &[u8]) -> String {
        IranSystem::decode(self, bytes)
    }
}
