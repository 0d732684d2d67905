//! Visual ↔ logical reordering.
//!
//! Iran System stores Arabic-script text right-to-left in display order.
//! The reordering pass splits a sequence into runs:
//!
//! ```text
//! logical:  h i ␠ س ل ا م ␠ ۱ ۲ ۳
//!           └pass┘└─rev──┘└pass──┘
//! visual:   h i ␠ م ا ل س ␠ ۱ ۲ ۳
//! ```
//!
//! Reversible runs are mirrored element by element; everything else,
//! digits included, keeps its encounter order. Reversing is its own
//! inverse, so [`to_visual`] and [`to_logical`] share one implementation.

pub mod orientation;

use std::ops::Range;

use crate::iransystem::types::models::{Glyph, Shaped, Unit};

/// Something that can be classified as part of a right-to-left run.
pub trait Directional {
    fn is_reversible(&self) -> bool;
}

impl Directional for char {
    fn is_reversible(&self) -> bool {
        is_reversible_char(*self)
    }
}

impl Directional for Unit {
    fn is_reversible(&self) -> bool {
        is_reversible_char(self.base_char())
    }
}

impl Directional for Shaped {
    fn is_reversible(&self) -> bool {
        self.unit.is_reversible()
    }
}

impl Directional for Glyph {
    fn is_reversible(&self) -> bool {
        self.unit.is_reversible()
    }
}

/// Arabic block and Arabic presentation forms, minus every kind of digit.
pub fn is_reversible_char(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}' | '\u{FB50}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}')
        && !is_digit(c)
}

/// ASCII, Arabic-Indic and Persian digits. Numerals always read left to right.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '\u{0660}'..='\u{0669}' | '\u{06F0}'..='\u{06F9}')
}

/// Index ranges of the maximal reversible runs in `items`.
pub fn reversible_runs<T: Directional>(items: &[T]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, item) in items.iter().enumerate() {
        match (item.is_reversible(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(s..items.len());
    }
    runs
}

/// Logical → visual order.
pub fn to_visual<T: Directional>(mut items: Vec<T>) -> Vec<T> {
    reverse_runs(&mut items);
    items
}

/// Visual → logical order. Exact inverse of [`to_visual`].
pub fn to_logical<T: Directional>(mut items: Vec<T>) -> Vec<T> {
    reverse_runs(&mut items);
    items
}

fn reverse_runs<T: Directional>(items: &mut [T]) {
    for run in reversible_runs(items) {
        items[run].reverse();
    }
}
