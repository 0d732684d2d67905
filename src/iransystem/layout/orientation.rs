//! Decode-side detection of runs that are already in logical order.
//!
//! Legacy documents are not consistent: some lines were stored in display
//! order, others were typed in reading order. Each byte fixes, at least in
//! part, whether its letter joins the previous and the next letter, so a run
//! read in the wrong direction shows joins that cannot happen:
//!
//! ```text
//! F4 91 F3 A8 read as stored:  م(no next) ─ ا(needs prev)   ✗
//!                              ...  س(needs next) at run end ✗
//! read mirrored:               س ─ ل ─ ا  م                  ✓
//! ```

use log::{debug, trace};

use super::reversible_runs;
use crate::iransystem::types::models::Glyph;

/// Brings a decoded glyph stream into logical order.
///
/// Every reversible run is mirrored unless reading it as stored is strictly
/// more consistent than reading it mirrored.
pub fn to_logical_checked(mut glyphs: Vec<Glyph>) -> Vec<Glyph> {
    for run in reversible_runs(&glyphs) {
        if is_stored_visually(&glyphs[run.clone()]) {
            glyphs[run].reverse();
        } else {
            debug!("Run at {}..{} is already in logical order, keeping it", run.start, run.end);
        }
    }
    glyphs
}

/// Whether a run should be mirrored to reach logical order. Ties favour mirroring.
pub fn is_stored_visually(run: &[Glyph]) -> bool {
    let stored: Vec<&Glyph> = run.iter().collect();
    let mirrored: Vec<&Glyph> = run.iter().rev().collect();
    let (as_stored, as_mirrored) = (contradictions(&stored), contradictions(&mirrored));
    trace!("Join contradictions: stored={}, mirrored={}", as_stored, as_mirrored);
    as_stored >= as_mirrored
}

/// Number of impossible joins when `seq` is read in logical order.
fn contradictions(seq: &[&Glyph]) -> usize {
    let (Some(first), Some(last)) = (seq.first(), seq.last()) else {
        return 0;
    };
    let mut count = 0;
    if first.links_prev() == Some(true) {
        count += 1;
    }
    if last.links_next() == Some(true) {
        count += 1;
    }
    for pair in seq.windows(2) {
        if let (Some(next), Some(prev)) = (pair[0].links_next(), pair[1].links_prev())
            && next != prev
        {
            count += 1;
        }
    }
    count
}
