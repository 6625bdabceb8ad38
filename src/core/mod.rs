pub mod impute;
pub mod normalize;
pub mod overrides;
pub mod reconcile;
pub mod report;
pub mod survival;
pub mod sweep;
pub mod tenure;
pub mod turnover;

use crate::config::StudyConfig;
use crate::models::daily::DailyRecord;
use crate::models::survival::SurvivalRecord;
use crate::models::worker::{RawWorkerRecord, Worker};

use self::overrides::OverrideTable;
use self::report::QualityReport;

/// Everything one pipeline run produces.
#[derive(Debug)]
pub struct PanelOutput {
    pub workers: Vec<Worker>,
    pub daily: Vec<DailyRecord>,
    pub survival: Vec<SurvivalRecord>,
    pub report: QualityReport,
}

pub struct Engine {
    cfg: StudyConfig,
}

impl Engine {
    pub fn new(cfg: StudyConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &StudyConfig {
        &self.cfg
    }

    /// Run the full reconstruction over a batch of raw records:
    /// normalize, impute, reconcile, derive turnover, apply overrides,
    /// build the survival dataset. Deterministic and single-threaded;
    /// each worker is processed independently.
    pub fn build(&self, records: &[RawWorkerRecord], overrides: Option<&OverrideTable>) -> PanelOutput {
        let mut rep = QualityReport {
            workers_in: records.len(),
            ..Default::default()
        };

        // Normalize, keeping each worker paired with its observations.
        let mut workers = Vec::new();
        let mut obs_by_worker = Vec::new();
        for rec in records {
            if let Some(w) = normalize::normalize(rec, &mut rep) {
                workers.push(w);
                obs_by_worker.push(rec.observations.as_slice());
            }
        }

        // The mean rejoin gap is a population quantity: compute it over all
        // observed pairs before any imputation.
        let avg_gap = impute::population_avg_gap(&workers);
        impute::impute_missing_ends(&mut workers, avg_gap, &mut rep);

        let mut daily = Vec::new();
        let mut surv = Vec::new();

        for (w, obs) in workers.iter().zip(&obs_by_worker) {
            daily.extend(reconcile::reconcile(w, obs, &self.cfg, &mut rep));
            surv.extend(survival::build_survival(w, &self.cfg, &mut rep));
        }

        if let Some(table) = overrides {
            table.apply(&mut daily, &mut rep);
        }

        rep.workers_out = workers.len();

        PanelOutput {
            workers,
            daily,
            survival: surv,
            report: rep,
        }
    }
}
