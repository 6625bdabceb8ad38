use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::StudyConfig;
use crate::core::Engine;
use crate::core::overrides::OverrideTable;
use crate::core::report::QualityReport;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat};
use crate::ingest;
use crate::ui::messages::{info, stat, warning};

/// Handle the `build` command: run the full reconstruction pipeline over the
/// input CSVs and write the two output tables plus the quality report.
pub fn handle(cmd: &Commands, cfg: &StudyConfig) -> AppResult<()> {
    let Commands::Build {
        roster,
        attendance,
        overrides,
        out_dir,
        format,
    } = cmd
    else {
        return Ok(());
    };

    info(format!(
        "Study window {} → {}",
        cfg.window_start, cfg.window_end
    ));

    let records = ingest::load_inputs(roster, attendance)?;
    info(format!("Loaded {} worker records", records.len()));

    let table = match overrides {
        Some(path) => {
            let t = OverrideTable::from_csv_path(path)?;
            info(format!("Loaded {} manual corrections", t.len()));
            Some(t)
        }
        None => None,
    };

    let engine = Engine::new(cfg.clone());
    let output = engine.build(&records, table.as_ref());

    let dir = Path::new(out_dir);
    std::fs::create_dir_all(dir)?;

    match format {
        ExportFormat::Csv => {
            export::write_daily_csv(dir.join("daily_panel.csv"), &output.daily)?;
            export::write_survival_csv(dir.join("survival.csv"), &output.survival)?;
        }
        ExportFormat::Json => {
            export::write_json(dir.join("daily_panel.json"), &output.daily, "Daily panel")?;
            export::write_json(dir.join("survival.json"), &output.survival, "Survival table")?;
        }
    }
    export::write_report_json(dir.join("quality_report.json"), &output.report)?;

    print_summary(&output.report);
    Ok(())
}

fn print_summary(rep: &QualityReport) {
    info("Quality summary");
    stat("workers in", rep.workers_in);
    stat("workers out", rep.workers_out);
    stat("daily rows", rep.daily_rows);
    stat("survival rows", rep.survival_rows);
    stat("missing identity", rep.missing_identity);
    stat("no valid spell", rep.no_valid_spell);
    stat("invalid intervals", rep.invalid_interval);
    stat("overlaps trimmed", rep.overlap_trimmed);
    stat("ambiguous statuses", rep.ambiguous_status);
    stat("imputation fallbacks", rep.imputation_fallback);
    stat("overrides applied", rep.overrides_applied);

    if rep.excluded_workers() > 0 {
        warning(format!(
            "{} worker(s) excluded from both outputs",
            rep.excluded_workers()
        ));
    }
}
