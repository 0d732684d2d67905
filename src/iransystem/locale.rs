//! Numeral locale policy.
//!
//! A text is Persian when its Persian letters outnumber its Latin ones.
//! Persian text gets Persian digits on encode, so `"ا 123"` stores `81 82 83`
//! while a bare `"123"` stays ASCII.

use log::debug;

use crate::iransystem::tables::{self, data::PERSIAN_DIGITS};
use crate::iransystem::types::models::{DigitStyle, Locale};

/// Majority vote between Persian and ASCII Latin letters. Ties and texts
/// without letters are Latin.
pub fn detect_locale(text: &str) -> Locale {
    detect_from_chars(text.chars())
}

pub(crate) fn detect_from_chars(chars: impl IntoIterator<Item = char>) -> Locale {
    let (mut persian, mut latin) = (0usize, 0usize);
    for c in chars {
        if tables::is_persian_letter(c) {
            persian += 1;
        } else if c.is_ascii_alphabetic() {
            latin += 1;
        }
    }
    let locale = if persian > latin { Locale::Persian } else { Locale::Latin };
    debug!("Locale {:?} (persian letters: {}, latin letters: {})", locale, persian, latin);
    locale
}

/// Rewrites ASCII digits for the locale. Only Persian text changes.
pub fn localize_digits(chars: &mut [(char, usize)], locale: Locale) {
    if locale != Locale::Persian {
        return;
    }
    for (c, _) in chars.iter_mut() {
        *c = to_persian_digit(*c);
    }
}

fn to_persian_digit(c: char) -> char {
    match c {
        '0'..='9' => PERSIAN_DIGITS[(c as u32 - '0' as u32) as usize],
        _ => c,
    }
}

fn to_ascii_digit(c: char) -> char {
    match PERSIAN_DIGITS.iter().position(|&d| d == c) {
        Some(i) => char::from(b'0' + i as u8),
        None => c,
    }
}

/// Applies the decode-side digit style to already decoded text.
pub fn apply_digit_style(text: String, style: DigitStyle) -> String {
    let style = match style {
        DigitStyle::AsEncoded => return text,
        DigitStyle::FollowLocale => match detect_locale(&text) {
            Locale::Persian => DigitStyle::Persian,
            Locale::Latin => DigitStyle::Latin,
        },
        other => other,
    };
    match style {
        DigitStyle::Persian => text.chars().map(to_persian_digit).collect(),
        _ => text.chars().map(to_ascii_digit).collect(),
    }
}
