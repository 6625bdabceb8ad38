use crate::cli::parser::Commands;
use crate::config::StudyConfig;
use crate::core::report::QualityReport;
use crate::core::{impute, normalize, tenure};
use crate::errors::AppResult;
use crate::export::write_json;
use crate::ingest;
use crate::ui::messages::info;

/// Handle the `tenure` command: canonicalize the roster and report total and
/// current tenure per worker at the configured reference date.
pub fn handle(cmd: &Commands, cfg: &StudyConfig) -> AppResult<()> {
    let Commands::Tenure { roster, out } = cmd else {
        return Ok(());
    };

    let records = ingest::read_roster(roster)?;

    let mut rep = QualityReport::default();
    let mut workers: Vec<_> = records
        .iter()
        .filter_map(|r| normalize::normalize(r, &mut rep))
        .collect();

    let avg_gap = impute::population_avg_gap(&workers);
    impute::impute_missing_ends(&mut workers, avg_gap, &mut rep);

    let summaries: Vec<_> = workers.iter().map(|w| tenure::tenure_for(w, cfg)).collect();

    match out {
        Some(path) => write_json(path, &summaries, "Tenure report")?,
        None => {
            info(format!("Tenure at {}", cfg.tenure_reference));
            println!(
                "{:<12} {:>10} {:>10} {:>10} {:>10}",
                "uid", "tot_days", "tot_mon", "cur_days", "cur_mon"
            );
            for s in &summaries {
                println!(
                    "{:<12} {:>10} {:>10.2} {:>10} {:>10}",
                    s.uid,
                    s.total_days,
                    s.total_months,
                    s.current_days.map_or("-".to_string(), |d| d.to_string()),
                    s.current_months
                        .map_or("-".to_string(), |m| format!("{:.2}", m)),
                );
            }
        }
    }

    Ok(())
}
