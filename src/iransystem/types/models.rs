//! Core data structures for the Iran System transcoder.
//!
//! This module defines the fundamental types used throughout the library:
//! - Joining forms and joining properties of letters
//! - Text units (single characters and the lam-alef ligature)
//! - Encode-side shaped units and decode-side glyphs
//! - Locale, digit style and converter configuration

use crate::iransystem::tables;

/// Zero-width non-joiner. Breaks a cursive join and never reaches the byte stream.
pub const ZWNJ: char = '\u{200C}';

/// Replacement character emitted for bytes the table leaves undefined.
pub const REPLACEMENT: char = '\u{FFFD}';

pub const LAM: char = '\u{0644}';
pub const ALEF: char = '\u{0627}';

/// The contextual shape a unit takes inside a word.
///
/// `Neutral` is used for everything whose shape never depends on its
/// neighbours: digits, punctuation, box drawing and ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoiningForm {
    Isolated,
    Initial,
    Medial,
    Final,
    Neutral,
}

impl JoiningForm {
    /// Builds a form from the two join decisions of the resolver.
    pub fn from_links(joins_prev: bool, joins_next: bool) -> Self {
        match (joins_prev, joins_next) {
            (true, true) => JoiningForm::Medial,
            (true, false) => JoiningForm::Final,
            (false, true) => JoiningForm::Initial,
            (false, false) => JoiningForm::Isolated,
        }
    }

    /// Whether this shape is connected to the logical predecessor.
    pub fn joins_prev(self) -> bool {
        matches!(self, JoiningForm::Medial | JoiningForm::Final)
    }

    /// Whether this shape is connected to the logical successor.
    pub fn joins_next(self) -> bool {
        matches!(self, JoiningForm::Initial | JoiningForm::Medial)
    }
}

/// The intrinsic ability of a letter to connect to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoiningProperty {
    /// Joins on both sides (ب, س, ع, ه, ی ...).
    Dual,
    /// Joins only to its logical predecessor (ا, د, ر, و ...).
    Right,
    /// Never joins.
    None,
}

impl JoiningProperty {
    /// Whether a dual-joining predecessor may connect to this letter.
    pub fn accepts_join(self) -> bool {
        matches!(self, JoiningProperty::Dual | JoiningProperty::Right)
    }
}

/// The smallest piece of text a single legacy byte can stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Char(char),
    /// The lam + alef ligature, two logical codepoints stored as one byte.
    LamAlef,
}

impl Unit {
    pub fn joining_property(self) -> JoiningProperty {
        match self {
            Unit::Char(c) => tables::joining_property(c),
            Unit::LamAlef => JoiningProperty::Right,
        }
    }

    /// Whether the unit is an Arabic-script letter (as opposed to a digit, mark or symbol).
    pub fn is_letter(self) -> bool {
        match self {
            Unit::Char(c) => tables::is_persian_letter(c),
            Unit::LamAlef => true,
        }
    }

    /// The character used for run classification and locale counting.
    pub fn base_char(self) -> char {
        match self {
            Unit::Char(c) => c,
            Unit::LamAlef => LAM,
        }
    }

    /// Appends the logical codepoints of this unit to `out`.
    pub fn push_to(self, out: &mut String) {
        match self {
            Unit::Char(c) => out.push(c),
            Unit::LamAlef => {
                out.push(LAM);
                out.push(ALEF);
            }
        }
    }
}

/// A unit with the contextual form chosen for it by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shaped {
    pub unit: Unit,
    pub form: JoiningForm,
    /// Char offset of the unit in the text handed to the encoder.
    pub index: usize,
}

/// A decoded legacy byte.
///
/// Many Iran System bytes stand for more than one shape of a letter (`0x92`
/// is both the final and the isolated beh). `forms` lists every shape the
/// byte covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub byte: u8,
    pub unit: Unit,
    pub forms: &'static [JoiningForm],
}

impl Glyph {
    /// `Some(true)` if every shape of this byte joins its predecessor,
    /// `Some(false)` if none does, `None` if the byte is ambiguous or neutral.
    pub fn links_prev(&self) -> Option<bool> {
        self.links(JoiningForm::joins_prev)
    }

    /// Same as [`Glyph::links_prev`] for the successor side.
    pub fn links_next(&self) -> Option<bool> {
        self.links(JoiningForm::joins_next)
    }

    fn links(&self, test: fn(JoiningForm) -> bool) -> Option<bool> {
        if self.forms.contains(&JoiningForm::Neutral) {
            return None;
        }
        if self.forms.iter().all(|&f| test(f)) {
            Some(true)
        } else if self.forms.iter().all(|&f| !test(f)) {
            Some(false)
        } else {
            None
        }
    }
}

/// Result of the Persian-vs-Latin majority vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Persian,
    Latin,
}

/// How the decoder emits digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitStyle {
    /// Digits come out the way the bytes store them (`0x31` → `1`, `0x81` → `۱`).
    #[default]
    AsEncoded,
    /// Every digit is emitted as a Persian digit.
    Persian,
    /// Every digit is emitted as an ASCII digit.
    Latin,
    /// Persian or ASCII digits depending on the letters of the decoded text.
    FollowLocale,
}

/// Converter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Store Arabic-script runs in visual (display) order. Defaults to `true`.
    pub visual_ordering: bool,
    /// Character to encode in place of anything the table cannot represent.
    /// `None` turns such characters into an error.
    pub fallback_character: Option<char>,
    /// Digit style of decoded text.
    pub decoded_digits: DigitStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visual_ordering: true,
            fallback_character: None,
            decoded_digits: DigitStyle::AsEncoded,
        }
    }
}

impl Config {
    pub fn with_visual_ordering(mut self, visual_ordering: bool) -> Self {
        self.visual_ordering = visual_ordering;
        self
    }

    pub fn with_fallback_character(mut self, fallback: Option<char>) -> Self {
        self.fallback_character = fallback;
        self
    }

    pub fn with_decoded_digits(mut self, style: DigitStyle) -> Self {
        self.decoded_digits = style;
        self
    }
}
