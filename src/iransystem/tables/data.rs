//! Raw Iran System code page data.
//!
//! Bytes `0x00..=0x7F` are plain ASCII and are not listed here. The upper
//! half mixes Persian digits, shaped letter forms and the CP437 box-drawing
//! block at `0xB0..=0xDF`.

use crate::iransystem::types::models::{JoiningForm, Unit};
use JoiningForm::{Final, Initial, Isolated, Medial, Neutral};

pub(crate) const NEUTRAL: &[JoiningForm] = &[Neutral];
const ISOLATED: &[JoiningForm] = &[Isolated];
const FINAL: &[JoiningForm] = &[Final];
const INITIAL: &[JoiningForm] = &[Initial];
const MEDIAL: &[JoiningForm] = &[Medial];
/// Dual-joining letter not connected forward ("upper" shape).
const UPPER: &[JoiningForm] = &[Final, Isolated];
/// Dual-joining letter connected forward ("lower" shape).
const LOWER: &[JoiningForm] = &[Initial, Medial];
/// Right-joining letter, one byte for both shapes.
const RIGHT: &[JoiningForm] = &[Isolated, Final];
/// A single byte standing for every shape of the letter.
const ANY: &[JoiningForm] = &[Isolated, Final, Initial, Medial];

/// One byte of the upper half of the code page.
pub(crate) struct Entry {
    pub byte: u8,
    pub unit: Unit,
    pub forms: &'static [JoiningForm],
}

const fn letter(byte: u8, c: char, forms: &'static [JoiningForm]) -> Entry {
    Entry { byte, unit: Unit::Char(c), forms }
}

/// Persian digits ۰..۹, stored at `0x80..=0x89`.
pub const PERSIAN_DIGITS: [char; 10] = [
    '\u{06F0}', '\u{06F1}', '\u{06F2}', '\u{06F3}', '\u{06F4}',
    '\u{06F5}', '\u{06F6}', '\u{06F7}', '\u{06F8}', '\u{06F9}',
];

/// First byte of the Persian digit block.
pub const PERSIAN_DIGIT_BASE: u8 = 0x80;

#[rustfmt::skip]
pub(crate) const LETTER_ENTRIES: &[Entry] = &[
    letter(0x8A, '\u{060C}', NEUTRAL),  // ، comma
    letter(0x8B, '\u{0640}', NEUTRAL),  // ـ tatweel
    letter(0x8C, '\u{061F}', NEUTRAL),  // ؟ question mark
    letter(0x8D, '\u{0622}', RIGHT),    // آ
    letter(0x8E, '\u{0626}', LOWER),    // ئ
    letter(0x8F, '\u{0621}', ISOLATED), // ء
    letter(0x90, '\u{0627}', ISOLATED), // ا
    letter(0x91, '\u{0627}', FINAL),
    letter(0x92, '\u{0628}', UPPER),    // ب
    letter(0x93, '\u{0628}', LOWER),
    letter(0x94, '\u{067E}', UPPER),    // پ
    letter(0x95, '\u{067E}', LOWER),
    letter(0x96, '\u{062A}', UPPER),    // ت
    letter(0x97, '\u{062A}', LOWER),
    letter(0x98, '\u{062B}', UPPER),    // ث
    letter(0x99, '\u{062B}', LOWER),
    letter(0x9A, '\u{062C}', UPPER),    // ج
    letter(0x9B, '\u{062C}', LOWER),
    letter(0x9C, '\u{0686}', UPPER),    // چ
    letter(0x9D, '\u{0686}', LOWER),
    letter(0x9E, '\u{062D}', UPPER),    // ح
    letter(0x9F, '\u{062D}', LOWER),
    letter(0xA0, '\u{062E}', UPPER),    // خ
    letter(0xA1, '\u{062E}', LOWER),
    letter(0xA2, '\u{062F}', RIGHT),    // د
    letter(0xA3, '\u{0630}', RIGHT),    // ذ
    letter(0xA4, '\u{0631}', RIGHT),    // ر
    letter(0xA5, '\u{0632}', RIGHT),    // ز
    letter(0xA6, '\u{0698}', RIGHT),    // ژ
    letter(0xA7, '\u{0633}', UPPER),    // س
    letter(0xA8, '\u{0633}', LOWER),
    letter(0xA9, '\u{0634}', UPPER),    // ش
    letter(0xAA, '\u{0634}', LOWER),
    letter(0xAB, '\u{0635}', UPPER),    // ص
    letter(0xAC, '\u{0635}', LOWER),
    letter(0xAD, '\u{0636}', UPPER),    // ض
    letter(0xAE, '\u{0636}', LOWER),
    letter(0xAF, '\u{0637}', ANY),      // ط
    letter(0xE0, '\u{0638}', ANY),      // ظ
    letter(0xE1, '\u{0639}', ISOLATED), // ع
    letter(0xE2, '\u{0639}', FINAL),
    letter(0xE3, '\u{0639}', MEDIAL),
    letter(0xE4, '\u{0639}', INITIAL),
    letter(0xE5, '\u{063A}', ISOLATED), // غ
    letter(0xE6, '\u{063A}', FINAL),
    letter(0xE7, '\u{063A}', MEDIAL),
    letter(0xE8, '\u{063A}', INITIAL),
    letter(0xE9, '\u{0641}', UPPER),    // ف
    letter(0xEA, '\u{0641}', LOWER),
    letter(0xEB, '\u{0642}', UPPER),    // ق
    letter(0xEC, '\u{0642}', LOWER),
    letter(0xED, '\u{06A9}', UPPER),    // ک
    letter(0xEE, '\u{06A9}', LOWER),
    letter(0xEF, '\u{06AF}', UPPER),    // گ
    letter(0xF0, '\u{06AF}', LOWER),
    letter(0xF1, '\u{0644}', UPPER),    // ل
    Entry { byte: 0xF2, unit: Unit::LamAlef, forms: RIGHT },
    letter(0xF3, '\u{0644}', LOWER),
    letter(0xF4, '\u{0645}', UPPER),    // م
    letter(0xF5, '\u{0645}', LOWER),
    letter(0xF6, '\u{0646}', UPPER),    // ن
    letter(0xF7, '\u{0646}', LOWER),
    letter(0xF8, '\u{0648}', RIGHT),    // و
    letter(0xF9, '\u{0647}', UPPER),    // ه
    letter(0xFA, '\u{0647}', MEDIAL),
    letter(0xFB, '\u{0647}', INITIAL),
    letter(0xFC, '\u{06CC}', FINAL),    // ی
    letter(0xFD, '\u{06CC}', ISOLATED),
    letter(0xFE, '\u{06CC}', LOWER),
];

/// Shapes with no byte of their own that borrow another letter's byte.
/// Only consulted by the encoder; decoding these bytes yields the owner.
#[rustfmt::skip]
pub(crate) const ENCODE_ONLY: &[(char, JoiningForm, u8)] = &[
    ('\u{0626}', Final, 0xFC),    // ئ at the end of a word is written with yeh
    ('\u{0626}', Isolated, 0xFD),
];

/// First byte of the box-drawing block.
pub const BOX_DRAWING_BASE: u8 = 0xB0;

/// CP437 box-drawing and block glyphs at `0xB0..=0xDF`.
#[rustfmt::skip]
pub(crate) const BOX_DRAWING: [char; 48] = [
    '\u{2591}', '\u{2592}', '\u{2593}', '\u{2502}', '\u{2524}', '\u{2561}', '\u{2562}', '\u{2556}',
    '\u{2555}', '\u{2563}', '\u{2551}', '\u{2557}', '\u{255D}', '\u{255C}', '\u{255B}', '\u{2510}',
    '\u{2514}', '\u{2534}', '\u{252C}', '\u{251C}', '\u{2500}', '\u{253C}', '\u{255E}', '\u{255F}',
    '\u{255A}', '\u{2554}', '\u{2569}', '\u{2566}', '\u{2560}', '\u{2550}', '\u{256C}', '\u{2567}',
    '\u{2568}', '\u{2564}', '\u{2565}', '\u{2559}', '\u{2558}', '\u{2552}', '\u{2553}', '\u{256B}',
    '\u{256A}', '\u{2518}', '\u{250C}', '\u{2588}', '\u{2584}', '\u{258C}', '\u{2590}', '\u{2580}',
];

/// Letters that join on both sides. Tatweel is included: it is the join-causing filler.
#[rustfmt::skip]
pub(crate) const DUAL_JOINING: &[char] = &[
    '\u{0626}', '\u{0628}', '\u{067E}', '\u{062A}', '\u{062B}', '\u{062C}', '\u{0686}', '\u{062D}',
    '\u{062E}', '\u{0633}', '\u{0634}', '\u{0635}', '\u{0636}', '\u{0637}', '\u{0638}', '\u{0639}',
    '\u{063A}', '\u{0641}', '\u{0642}', '\u{06A9}', '\u{06AF}', '\u{0644}', '\u{0645}', '\u{0646}',
    '\u{0647}', '\u{06CC}', '\u{0640}',
];

/// Letters that join only to their logical predecessor.
#[rustfmt::skip]
pub(crate) const RIGHT_JOINING: &[char] = &[
    '\u{0627}', '\u{0622}', '\u{062F}', '\u{0630}', '\u{0631}', '\u{0632}', '\u{0698}', '\u{0648}',
];

/// Letters that never join but still count as Persian letters.
pub(crate) const NON_JOINING_LETTERS: &[char] = &['\u{0621}'];

/// Codepoints the encoder rewrites to the letter the code page actually has.
#[rustfmt::skip]
pub(crate) const CHAR_ALIASES: &[(char, char)] = &[
    ('\u{064A}', '\u{06CC}'), // Arabic yeh → Persian yeh
    ('\u{0649}', '\u{06CC}'), // alef maksura → Persian yeh
    ('\u{0643}', '\u{06A9}'), // Arabic kaf → keheh
];

/// Arabic short vowels and related marks; they have no byte and are dropped.
pub(crate) fn is_haraka(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}')
}

/// A block of consecutive presentation forms of one letter.
pub(crate) struct PresentationBlock {
    pub first: u32,
    pub len: u32,
    pub base: char,
}

const fn block(first: u32, len: u32, base: char) -> PresentationBlock {
    PresentationBlock { first, len, base }
}

/// Presentation forms of mapped letters (Arabic Presentation Forms-A and -B).
/// The lam-alef ligature forms `FEFB`/`FEFC` are handled separately.
#[rustfmt::skip]
pub(crate) const PRESENTATION_BLOCKS: &[PresentationBlock] = &[
    block(0xFB56, 4, '\u{067E}'), // پ
    block(0xFB7A, 4, '\u{0686}'), // چ
    block(0xFB8A, 2, '\u{0698}'), // ژ
    block(0xFB8E, 4, '\u{06A9}'), // ک
    block(0xFB92, 4, '\u{06AF}'), // گ
    block(0xFBFC, 4, '\u{06CC}'), // ی
    block(0xFE80, 1, '\u{0621}'), // ء
    block(0xFE81, 2, '\u{0622}'), // آ
    block(0xFE89, 4, '\u{0626}'), // ئ
    block(0xFE8D, 2, '\u{0627}'), // ا
    block(0xFE8F, 4, '\u{0628}'), // ب
    block(0xFE95, 4, '\u{062A}'), // ت
    block(0xFE99, 4, '\u{062B}'), // ث
    block(0xFE9D, 4, '\u{062C}'), // ج
    block(0xFEA1, 4, '\u{062D}'), // ح
    block(0xFEA5, 4, '\u{062E}'), // خ
    block(0xFEA9, 2, '\u{062F}'), // د
    block(0xFEAB, 2, '\u{0630}'), // ذ
    block(0xFEAD, 2, '\u{0631}'), // ر
    block(0xFEAF, 2, '\u{0632}'), // ز
    block(0xFEB1, 4, '\u{0633}'), // س
    block(0xFEB5, 4, '\u{0634}'), // ش
    block(0xFEB9, 4, '\u{0635}'), // ص
    block(0xFEBD, 4, '\u{0636}'), // ض
    block(0xFEC1, 4, '\u{0637}'), // ط
    block(0xFEC5, 4, '\u{0638}'), // ظ
    block(0xFEC9, 4, '\u{0639}'), // ع
    block(0xFECD, 4, '\u{063A}'), // غ
    block(0xFED1, 4, '\u{0641}'), // ف
    block(0xFED5, 4, '\u{0642}'), // ق
    block(0xFED9, 4, '\u{06A9}'), // Arabic kaf forms
    block(0xFEDD, 4, '\u{0644}'), // ل
    block(0xFEE1, 4, '\u{0645}'), // م
    block(0xFEE5, 4, '\u{0646}'), // ن
    block(0xFEE9, 4, '\u{0647}'), // ه
    block(0xFEED, 2, '\u{0648}'), // و
    block(0xFEEF, 2, '\u{06CC}'), // alef maksura forms
    block(0xFEF1, 4, '\u{06CC}'), // Arabic yeh forms
];

/// Isolated and final lam-alef presentation forms.
pub(crate) const LAM_ALEF_FORMS: [char; 2] = ['\u{FEFB}', '\u{FEFC}'];
