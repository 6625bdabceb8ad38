//! Spell Normalizer: canonicalizes the raw, variably-named join/leave slots
//! of one worker into an ordered, re-indexed spell list.

use crate::core::report::QualityReport;
use crate::models::spell::Spell;
use crate::models::worker::{RawWorkerRecord, Worker};

/// Canonicalize one raw record. Returns `None` (with the relevant counter
/// bumped) when the record cannot be linked to an identifier or has no
/// usable join date; such workers are excluded from both outputs, never
/// silently included with an empty history.
pub fn normalize(record: &RawWorkerRecord, report: &mut QualityReport) -> Option<Worker> {
    let Some(uid) = record.uid.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
        report.missing_identity += 1;
        return None;
    };

    let mut spells = Vec::new();

    for slot in &record.slots {
        // A slot with no join date is ignored; its leave candidates (if any)
        // belong to a spell that was never recorded as started.
        let Some(start) = slot.join() else {
            continue;
        };

        let end = match slot.leave() {
            // A leave on or before the join is a recording error: void the
            // leave and let the imputer or the open-spell convention take
            // over, rather than keeping a non-positive interval.
            Some(e) if e <= start => {
                report.invalid_interval += 1;
                None
            }
            other => other,
        };

        spells.push(Spell::new(start, end));
    }

    if spells.is_empty() {
        report.no_valid_spell += 1;
        return None;
    }

    spells.sort_by_key(|s| (s.start, s.end));

    Some(Worker::new(uid.to_string(), resolve_overlaps(spells, report)))
}

/// Canonical spells must be mutually non-overlapping: a recorded end date
/// reaching into the next spell is truncated to the day before that spell's
/// start, and a spell whose truncation would leave no room (same or adjacent
/// start) is dropped as a duplicate slot. Each correction is counted. An
/// open end followed by a later spell is left alone here; the imputer owns
/// that case.
fn resolve_overlaps(spells: Vec<Spell>, report: &mut QualityReport) -> Vec<Spell> {
    let mut canonical: Vec<Spell> = Vec::with_capacity(spells.len());

    for sp in spells {
        if let Some(prev) = canonical.last().copied() {
            if sp.start <= prev.start {
                report.overlap_trimmed += 1;
                canonical.pop();
            } else if prev.end.is_some_and(|e| e >= sp.start) {
                report.overlap_trimmed += 1;
                match sp.start.pred_opt() {
                    Some(eve) if eve > prev.start => {
                        if let Some(last) = canonical.last_mut() {
                            last.end = Some(eve);
                        }
                    }
                    _ => {
                        canonical.pop();
                    }
                }
            }
        }
        canonical.push(sp);
    }

    canonical
}
