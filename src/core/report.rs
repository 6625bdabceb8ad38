use serde::Serialize;

/// Aggregate data-quality counters for one pipeline run.
///
/// Exclusions (missing identity, no valid spell, invalid interval) remove the
/// affected worker/spell/row from the output; locally resolved conditions
/// (ambiguous status, imputation fallback, overrides) are surfaced here as
/// diagnostics only. Nothing in this report ever aborts a run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct QualityReport {
    pub workers_in: usize,
    pub workers_out: usize,
    pub missing_identity: usize,
    pub no_valid_spell: usize,
    pub invalid_interval: usize,
    pub overlap_trimmed: usize,
    pub ambiguous_status: usize,
    pub imputation_fallback: usize,
    pub overrides_applied: usize,
    pub daily_rows: usize,
    pub survival_rows: usize,
}

impl QualityReport {
    pub fn excluded_workers(&self) -> usize {
        self.missing_identity + self.no_valid_spell
    }
}
