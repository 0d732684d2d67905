//! Contextual joining-form resolution.

use crate::iransystem::types::models::{JoiningForm, JoiningProperty, Shaped, Unit, ZWNJ};

/// Chooses the contextual form of every unit from its neighbours.
///
/// A unit connects to its predecessor when the predecessor is dual-joining
/// and the unit accepts a join; it connects to its successor when it is
/// dual-joining itself and the successor accepts a join. ZWNJ never joins,
/// so it breaks the link on both sides, and is then dropped.
///
/// Characters that are not letters and never join (digits, ASCII,
/// punctuation) get [`JoiningForm::Neutral`].
pub fn resolve_forms(units: &[(Unit, usize)]) -> Vec<Shaped> {
    let props: Vec<JoiningProperty> = units.iter().map(|(u, _)| u.joining_property()).collect();

    units
        .iter()
        .enumerate()
        .filter(|(_, (unit, _))| *unit != Unit::Char(ZWNJ))
        .map(|(i, &(unit, index))| {
            let prop = props[i];
            let form = if prop == JoiningProperty::None && !unit.is_letter() {
                JoiningForm::Neutral
            } else {
                let joins_prev = i > 0 && props[i - 1] == JoiningProperty::Dual && prop.accepts_join();
                let joins_next = prop == JoiningProperty::Dual
                    && props.get(i + 1).is_some_and(|next| next.accepts_join());
                JoiningForm::from_links(joins_prev, joins_next)
            };
            Shaped { unit, form, index }
        })
        .collect()
}
