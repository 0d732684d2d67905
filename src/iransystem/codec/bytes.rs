//! Shaped unit ↔ byte conversion.

use log::debug;

use crate::iransystem::tables::MappingTable;
use crate::iransystem::types::error::{IranSystemError, Result};
use crate::iransystem::types::models::{Glyph, JoiningForm, Shaped, Unit};

/// Shapes to try, in order, when the exact shape of a letter has no byte.
///
/// exact → medial→initial → isolated→final → connecting→isolated → neutral
fn form_chain(form: JoiningForm) -> &'static [JoiningForm] {
    use JoiningForm::*;
    match form {
        Medial => &[Medial, Initial, Isolated, Neutral],
        Initial => &[Initial, Isolated, Neutral],
        Final => &[Final, Isolated, Neutral],
        Isolated => &[Isolated, Final, Neutral],
        Neutral => &[Neutral],
    }
}

/// Looks up the byte for a shape, walking the fallback chain of forms.
pub fn encode_form(unit: Unit, form: JoiningForm) -> Option<u8> {
    let table = MappingTable::global();
    form_chain(form)
        .iter()
        .find_map(|&candidate| table.byte_for(unit, candidate))
}

/// The byte used for a fallback character: its neutral shape, or the best one it has.
pub fn fallback_byte(c: char) -> Option<u8> {
    let table = MappingTable::global();
    [
        JoiningForm::Neutral,
        JoiningForm::Isolated,
        JoiningForm::Final,
        JoiningForm::Initial,
        JoiningForm::Medial,
    ]
    .into_iter()
    .find_map(|form| table.byte_for(Unit::Char(c), form))
}

/// Encodes one shaped unit. `fallback` is the pre-resolved byte of the
/// configured fallback character, if any.
pub fn encode_shaped(shaped: &Shaped, fallback: Option<u8>) -> Result<u8> {
    if let Some(byte) = encode_form(shaped.unit, shaped.form) {
        return Ok(byte);
    }
    let character = shaped.unit.base_char();
    match fallback {
        Some(byte) => {
            debug!(
                "No byte for {:?} ({:?}) at {}, using fallback {:#04x}",
                character, shaped.form, shaped.index, byte
            );
            Ok(byte)
        }
        None => Err(IranSystemError::UnmappedCharacter {
            character,
            index: shaped.index,
        }),
    }
}

/// Decodes one byte. Never fails: undefined bytes become U+FFFD.
pub fn decode_byte(byte: u8) -> Glyph {
    MappingTable::global().glyph(byte)
}
