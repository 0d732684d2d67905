//! Unicode → shaped units.
//!
//! # Pipeline
//!
//! ```text
//! text ──fold──▶ base chars ──ligature──▶ units ──joining──▶ (unit, form)
//! ```
//!
//! - [`fold_text`]: decomposed marks composed, aliases and presentation forms to base letters, short vowels dropped
//! - [`ligature::substitute`]: lam + alef to the ligature unit
//! - [`joining::resolve_forms`]: contextual form of every unit

pub mod joining;
pub mod ligature;

use log::trace;
use unicode_normalization::char::compose;

use crate::iransystem::tables::{self, data::is_haraka, Folded};
use crate::iransystem::types::models::{Shaped, ALEF, LAM};

/// Normalises `text` to the base characters the code page stores.
///
/// Each output character carries the char offset it came from.
pub fn fold_text(text: &str) -> Vec<(char, usize)> {
    let composed = compose_marks(text);
    let mut out = Vec::with_capacity(composed.len());
    for (c, index) in composed {
        match tables::fold(c) {
            Folded::Same => out.push((c, index)),
            Folded::One(base) => out.push((base, index)),
            Folded::LamAlef => {
                out.push((LAM, index));
                out.push((ALEF, index));
            }
        }
    }
    out
}

/// Drops short vowels and composes a base letter with a following madda or
/// hamza mark (`ا` + U+0653 → `آ`, `ي` + U+0654 → `ئ`), so decomposed input
/// shapes like its precomposed form. A composed letter keeps the offset of
/// its base.
fn compose_marks(text: &str) -> Vec<(char, usize)> {
    let mut out: Vec<(char, usize)> = Vec::with_capacity(text.len());
    for (index, c) in text.chars().enumerate() {
        if is_haraka(c) {
            trace!("Dropping mark U+{:04X} at {}", c as u32, index);
            continue;
        }
        if let Some(last) = out.last_mut()
            && let Some(composed) = compose(last.0, c)
        {
            last.0 = composed;
            continue;
        }
        out.push((c, index));
    }
    out
}

/// Substitutes ligatures and resolves joining forms of already folded text.
pub fn shape(chars: &[(char, usize)]) -> Vec<Shaped> {
    let units = ligature::substitute(chars);
    joining::resolve_forms(&units)
}
