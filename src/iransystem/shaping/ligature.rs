//! Lam-alef ligature handling.
//!
//! The code page has a single lam-alef byte (`0xF2`) and it only has the
//! isolated shape. A lam that is joined from its right keeps its own byte and
//! is followed by the final alef instead.

use crate::iransystem::types::models::{JoiningProperty, Unit, ALEF, LAM};
use crate::iransystem::tables;

/// Replaces every free-standing lam, alef pair with [`Unit::LamAlef`].
///
/// Input and output carry the char offset of each unit in the caller's text;
/// the ligature keeps the offset of its lam.
pub fn substitute(chars: &[(char, usize)]) -> Vec<(Unit, usize)> {
    let mut units = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let (c, index) = chars[i];
        let starts_ligature = c == LAM
            && chars.get(i + 1).is_some_and(|&(next, _)| next == ALEF)
            && (i == 0 || tables::joining_property(chars[i - 1].0) != JoiningProperty::Dual);

        if starts_ligature {
            units.push((Unit::LamAlef, index));
            i += 2;
        } else {
            units.push((Unit::Char(c), index));
            i += 1;
        }
    }
    units
}

