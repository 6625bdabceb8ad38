//! Survival Spell Builder: reshapes a worker's canonical spells into a
//! censored/failure dataset over the study window.

use crate::config::StudyConfig;
use crate::core::report::QualityReport;
use crate::models::survival::SurvivalRecord;
use crate::models::worker::Worker;

/// One row per spell overlapping the window, re-indexed chronologically.
///
/// Failure is computed per spell (end date observed at or before the window
/// end), then the terminal-failure rule zeroes it on every spell except the
/// worker's chronologically last: only an exit from the most recent known
/// spell counts as the hazard event, all earlier attrition-then-rejoin
/// events are censored.
///
/// Rows violating `entry_time < exit_time` are a hard data-quality failure:
/// counted and excluded, never coerced into a valid-looking interval.
pub fn build_survival(
    worker: &Worker,
    cfg: &StudyConfig,
    report: &mut QualityReport,
) -> Vec<SurvivalRecord> {
    let overlapping: Vec<_> = worker
        .spells
        .iter()
        .filter(|sp| {
            sp.start <= cfg.window_end && sp.end.unwrap_or(cfg.window_end) >= cfg.window_start
        })
        .collect();

    let last = overlapping.len().saturating_sub(1);
    let mut rows = Vec::with_capacity(overlapping.len());

    for (i, sp) in overlapping.iter().enumerate() {
        let failed = sp.end.is_some_and(|e| e <= cfg.window_end);

        let entry_time = (sp.start.max(cfg.window_start) - cfg.window_start).num_days();
        let exit_date = match sp.end {
            Some(e) if failed => e,
            _ => cfg.window_end,
        };
        let exit_time = (exit_date - cfg.window_start).num_days();

        if entry_time < 0 || exit_time <= entry_time {
            report.invalid_interval += 1;
            continue;
        }

        rows.push(SurvivalRecord {
            uid: worker.uid.clone(),
            spell_index: i + 1,
            entry_time,
            exit_time,
            failure: if failed && i == last { 1 } else { 0 },
        });
    }

    report.survival_rows += rows.len();
    rows
}
