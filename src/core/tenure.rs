//! Tenure Calculator: cumulative and current-spell tenure evaluated at the
//! reference instants carried by `StudyConfig`.

use serde::Serialize;

use crate::config::StudyConfig;
use crate::models::worker::Worker;

#[derive(Debug, Clone, Serialize)]
pub struct TenureSummary {
    pub uid: String,
    /// Days accumulated over all spells, each capped at the tenure cutoff.
    pub total_days: i64,
    pub total_months: f64,
    /// Days in the spell active on the reference date, inclusive of both
    /// endpoints. `None` when the worker is not employed on that date.
    pub current_days: Option<i64>,
    pub current_months: Option<f64>,
}

pub fn tenure_for(worker: &Worker, cfg: &StudyConfig) -> TenureSummary {
    let mut total_days = 0i64;

    for sp in &worker.spells {
        let end = sp.end.unwrap_or(cfg.tenure_reference).min(cfg.tenure_cutoff);
        total_days += (end - sp.start).num_days().max(0);
    }

    let current_days = worker
        .spell_on(cfg.tenure_reference)
        .map(|sp| (cfg.tenure_reference - sp.start).num_days() + 1);

    TenureSummary {
        uid: worker.uid.clone(),
        total_days,
        total_months: total_days as f64 / cfg.days_per_month,
        current_days,
        current_months: current_days.map(|d| d as f64 / cfg.days_per_month),
    }
}
