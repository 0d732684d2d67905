//! Iran System mapping tables.
//!
//! The forward table covers every byte value; the reverse index is derived
//! from it once and shared by every converter in the process.
//!
//! ```text
//! byte ──forward──▶ Glyph { unit, forms }
//! (unit, form) ──reverse──▶ byte
//! ```

pub mod data;

use std::collections::HashMap;
use std::sync::OnceLock;
use log::debug;

use crate::iransystem::types::models::{Glyph, JoiningForm, JoiningProperty, Unit, REPLACEMENT};
use data::{
    BOX_DRAWING, BOX_DRAWING_BASE, CHAR_ALIASES, DUAL_JOINING, ENCODE_ONLY, LAM_ALEF_FORMS,
    LETTER_ENTRIES, NEUTRAL, NON_JOINING_LETTERS, PERSIAN_DIGITS, PERSIAN_DIGIT_BASE,
    PRESENTATION_BLOCKS, RIGHT_JOINING,
};

static TABLE: OnceLock<MappingTable> = OnceLock::new();

/// The process-wide, immutable byte ↔ shape mapping.
#[derive(Debug)]
pub struct MappingTable {
    forward: [Glyph; 256],
    reverse: HashMap<(Unit, JoiningForm), u8>,
}

impl MappingTable {
    /// Returns the shared table, building it on first use.
    pub fn global() -> &'static MappingTable {
        TABLE.get_or_init(MappingTable::build)
    }

    fn build() -> MappingTable {
        let mut forward: [Glyph; 256] = std::array::from_fn(|b| Glyph {
            byte: b as u8,
            unit: Unit::Char(REPLACEMENT),
            forms: NEUTRAL,
        });

        for byte in 0..0x80u8 {
            forward[byte as usize].unit = Unit::Char(char::from(byte));
        }
        for (offset, &digit) in PERSIAN_DIGITS.iter().enumerate() {
            forward[PERSIAN_DIGIT_BASE as usize + offset].unit = Unit::Char(digit);
        }
        for (offset, &glyph) in BOX_DRAWING.iter().enumerate() {
            forward[BOX_DRAWING_BASE as usize + offset].unit = Unit::Char(glyph);
        }
        for entry in LETTER_ENTRIES {
            forward[entry.byte as usize] = Glyph {
                byte: entry.byte,
                unit: entry.unit,
                forms: entry.forms,
            };
        }

        let mut reverse = HashMap::new();
        for glyph in forward.iter().filter(|g| g.unit != Unit::Char(REPLACEMENT)) {
            for &form in glyph.forms {
                reverse.entry((glyph.unit, form)).or_insert(glyph.byte);
            }
        }
        for &(c, form, byte) in ENCODE_ONLY {
            reverse.entry((Unit::Char(c), form)).or_insert(byte);
        }

        debug!(
            "Iran System mapping table built: {} defined bytes, {} reverse entries",
            forward.iter().filter(|g| g.unit != Unit::Char(REPLACEMENT)).count(),
            reverse.len()
        );

        MappingTable { forward, reverse }
    }

    /// The glyph stored at `byte`. Total: undefined bytes yield U+FFFD.
    pub fn glyph(&self, byte: u8) -> Glyph {
        self.forward[byte as usize]
    }

    /// Exact lookup of a shape, without any fallback.
    pub fn byte_for(&self, unit: Unit, form: JoiningForm) -> Option<u8> {
        self.reverse.get(&(unit, form)).copied()
    }
}

/// Joining property of a base letter. Anything not listed never joins.
pub fn joining_property(c: char) -> JoiningProperty {
    if DUAL_JOINING.contains(&c) {
        JoiningProperty::Dual
    } else if RIGHT_JOINING.contains(&c) {
        JoiningProperty::Right
    } else {
        JoiningProperty::None
    }
}

/// Whether `c` is one of the Persian letters the code page can shape.
pub fn is_persian_letter(c: char) -> bool {
    c != '\u{0640}'
        && (DUAL_JOINING.contains(&c) || RIGHT_JOINING.contains(&c) || NON_JOINING_LETTERS.contains(&c))
}

/// Outcome of normalising one input codepoint before shaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folded {
    /// Keep the character as it is.
    Same,
    /// Replace with a single base character.
    One(char),
    /// A lam-alef presentation form: expands to lam, alef.
    LamAlef,
}

/// Maps aliases, Arabic-Indic digits and presentation forms to the base
/// characters the code page stores.
pub fn fold(c: char) -> Folded {
    if let Some(&(_, target)) = CHAR_ALIASES.iter().find(|(alias, _)| *alias == c) {
        return Folded::One(target);
    }
    if let '\u{0660}'..='\u{0669}' = c {
        return Folded::One(PERSIAN_DIGITS[(c as u32 - 0x0660) as usize]);
    }
    if LAM_ALEF_FORMS.contains(&c) {
        return Folded::LamAlef;
    }
    let code = c as u32;
    PRESENTATION_BLOCKS
        .iter()
        .find(|block| (block.first..block.first + block.len).contains(&code))
        .map_or(Folded::Same, |block| Folded::One(block.base))
}
