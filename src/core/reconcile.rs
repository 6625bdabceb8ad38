//! Daily Status Reconciler: merges raw attendance codes with the canonical
//! spell list into one authoritative (status, employment) pair per day.
//!
//! The event sweep over the spells is the ground truth for the employment
//! flag. Raw codes only refine the status of days the sweep already confirms
//! employed; where they contradict the sweep they are corrected and the
//! conflict is counted.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::StudyConfig;
use crate::core::report::QualityReport;
use crate::core::sweep::EventSweep;
use crate::core::turnover::turnover_on;
use crate::models::daily::{DailyObservation, DailyRecord};
use crate::models::status::{DayStatus, RawStatus};
use crate::models::worker::Worker;

/// Build the reconciled daily panel for one worker over the study window.
///
/// Conflict handling:
/// - a "left" code on a day inside an active spell is corrected to present;
/// - any code on a rejoin-gap day (strictly between one spell's end and the
///   next start) is voided, the day is forced not-employed with attendance
///   unknown;
/// - days before the first recorded join and after the final closed spell
///   are forced not-employed;
/// - every voided code that claimed attendance is counted as ambiguous;
/// - a day with no covering spell and no spell history at all stays unknown
///   with no employment flag, never defaulted to either state.
///
/// Re-running the reconciler over codes derived from its own output is a
/// fixpoint: the sweep dominates, and preserved codes map to themselves.
pub fn reconcile(
    worker: &Worker,
    observations: &[DailyObservation],
    cfg: &StudyConfig,
    report: &mut QualityReport,
) -> Vec<DailyRecord> {
    let sweep = EventSweep::new(&worker.spells);

    let obs: BTreeMap<NaiveDate, RawStatus> = observations
        .iter()
        .map(|o| (o.date, o.code))
        .collect();

    let mut records = Vec::with_capacity(cfg.window_days() as usize);

    for (day, employed) in sweep.coverage(cfg.window_start, cfg.window_end) {
        let raw = obs.get(&day).copied().unwrap_or(RawStatus::Missing);

        let (status, flag) = if employed {
            if raw == RawStatus::Left {
                report.ambiguous_status += 1;
            }
            (DayStatus::from_raw_employed(raw), Some(true))
        } else if worker.spells.is_empty() {
            (DayStatus::Unknown, None)
        } else {
            // A code claiming attendance contradicts the sweep wherever the
            // worker is not employed; Left and Missing agree with it.
            if !matches!(raw, RawStatus::Missing | RawStatus::Left) {
                report.ambiguous_status += 1;
            }
            let status = if in_rejoin_gap(worker, day) {
                DayStatus::Unknown
            } else {
                DayStatus::NotEmployed
            };
            (status, Some(false))
        };

        records.push(DailyRecord {
            uid: worker.uid.clone(),
            date: day,
            raw,
            status,
            employed: flag,
            turnover: turnover_on(&worker.spells, day),
        });
    }

    report.daily_rows += records.len();
    records
}

/// Strictly between one spell's end and the next spell's start.
fn in_rejoin_gap(worker: &Worker, day: NaiveDate) -> bool {
    worker.spells.windows(2).any(|pair| {
        pair[0]
            .end
            .is_some_and(|e| day > e && day < pair[1].start)
    })
}
