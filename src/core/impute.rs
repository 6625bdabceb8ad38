//! Gap Imputer: fills a missing end date on spell k when spell k+1 exists
//! (the worker rejoined without a recorded exit).

use chrono::Days;

use crate::core::report::QualityReport;
use crate::models::worker::Worker;

/// Population-wide mean rejoin gap in days, over all adjacent spell pairs
/// where both boundary dates are observed. Rounded to the nearest whole day
/// so imputed ends stay on the day grid. `None` when no pair is observed.
pub fn population_avg_gap(workers: &[Worker]) -> Option<i64> {
    let mut total = 0i64;
    let mut count = 0i64;

    for w in workers {
        for pair in w.spells.windows(2) {
            if let Some(end) = pair[0].end {
                total += (pair[1].start - end).num_days();
                count += 1;
            }
        }
    }

    if count == 0 {
        None
    } else {
        Some(((total as f64) / (count as f64)).round() as i64)
    }
}

/// Fill missing end dates in place. The final spell of each worker is never
/// imputed: a missing end there means still employed.
///
/// Primary estimate: `next.start - avg_gap`. Fallback (counted): the
/// midpoint `start + (next.start - start)/2`, clamped to at least one day
/// after the start, used when the primary is undefined or does not fall
/// strictly between the spell's own start and the rejoin. Both estimates
/// land strictly before the next start, so imputed spells stay disjoint.
/// When the rejoin is on the very next day no end date fits at all; the two
/// slots describe one continuous spell and are merged (counted as trimmed).
pub fn impute_missing_ends(
    workers: &mut [Worker],
    avg_gap: Option<i64>,
    report: &mut QualityReport,
) {
    for w in workers {
        let mut i = 0;
        while i < w.spells.len() {
            if w.spells[i].end.is_some() || i + 1 >= w.spells.len() {
                i += 1;
                continue;
            }

            let start = w.spells[i].start;
            let next_start = w.spells[i + 1].start;

            if (next_start - start).num_days() < 2 {
                w.spells[i].end = w.spells[i + 1].end;
                w.spells.remove(i + 1);
                report.overlap_trimmed += 1;
                continue;
            }

            let primary = avg_gap
                .filter(|g| *g >= 1)
                .and_then(|g| next_start.checked_sub_days(Days::new(g as u64)));

            let imputed = match primary {
                Some(est) if est > start => est,
                _ => {
                    report.imputation_fallback += 1;
                    let half = ((next_start - start).num_days() / 2).max(1);
                    start + Days::new(half as u64)
                }
            };

            w.spells[i].end = Some(imputed);
        }
    }
}
