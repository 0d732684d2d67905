//! ZWNJ reconstruction on the decode path.
//!
//! Unicode joins two dual-joining letters automatically. When a legacy byte
//! shows the first of them in a shape that does not connect forward, the
//! author deliberately broke the join (خانه‌ها), and a ZWNJ has to be put
//! back between them to keep that break.

use crate::iransystem::types::models::{Glyph, JoiningForm, JoiningProperty, ZWNJ};

/// Whether a ZWNJ belongs between two logically adjacent glyphs.
pub fn needs_zwnj(current: &Glyph, next: &Glyph) -> bool {
    current
        .forms
        .iter()
        .all(|f| matches!(f, JoiningForm::Final | JoiningForm::Isolated))
        && current.unit.joining_property() == JoiningProperty::Dual
        && next.unit.joining_property() == JoiningProperty::Dual
}

/// Flattens logically ordered glyphs to text, restoring broken joins.
pub fn reinsert(glyphs: &[Glyph]) -> String {
    let mut out = String::with_capacity(glyphs.len() * 2);
    for (i, glyph) in glyphs.iter().enumerate() {
        glyph.unit.push_to(&mut out);
        if let Some(next) = glyphs.get(i + 1)
            && needs_zwnj(glyph, next)
        {
            out.push(ZWNJ);
        }
    }
    out
}
