//! Daily Turnover Deriver: binary per-day employment indicator from the
//! canonical spell list.
//!
//! The exit day always counts as left: turnover is 1 on a spell's end date
//! itself, stays 1 through any rejoin gap, and is 1 permanently after the
//! final closed spell. Manual corrections that want the exit day treated as
//! still employed go through the override table, not here.

use chrono::NaiveDate;

use crate::models::spell::Spell;

/// `Some(0)` strictly inside a spell, `Some(1)` from an end date until the
/// day before the next start (and forever after the final closed spell),
/// `None` when no spell information exists for the date (no spells at all,
/// or the worker has not yet had a first join).
pub fn turnover_on(spells: &[Spell], day: NaiveDate) -> Option<u8> {
    let first = spells.first()?;
    if day < first.start {
        return None;
    }

    let inside = spells
        .iter()
        .any(|sp| day >= sp.start && sp.end.is_none_or(|e| day < e));

    Some(if inside { 0 } else { 1 })
}
