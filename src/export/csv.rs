use csv::Writer;
use std::path::Path;

use crate::errors::AppResult;
use crate::models::daily::DailyRecord;
use crate::models::survival::SurvivalRecord;
use crate::utils::date::format_date;

use super::notify_export_success;

/// Write the daily panel: one row per (worker, day).
pub fn write_daily_csv<P: AsRef<Path>>(path: P, records: &[DailyRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_path(&path)?;

    wtr.write_record(["uid", "date", "status", "attendance", "turnover_daily"])?;

    for rec in records {
        wtr.write_record(&[
            rec.uid.clone(),
            format_date(rec.date),
            rec.status.as_code().to_string(),
            rec.attendance_field(),
            rec.turnover_field(),
        ])?;
    }

    wtr.flush()?;
    notify_export_success("Daily panel", path.as_ref());
    Ok(())
}

/// Write the survival dataset: one row per (worker, spell).
pub fn write_survival_csv<P: AsRef<Path>>(path: P, records: &[SurvivalRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_path(&path)?;

    wtr.write_record(["uid", "spell_index", "entry_time", "exit_time", "failure_flag"])?;

    for rec in records {
        wtr.write_record(&[
            rec.uid.clone(),
            rec.spell_index.to_string(),
            rec.entry_time.to_string(),
            rec.exit_time.to_string(),
            rec.failure.to_string(),
        ])?;
    }

    wtr.flush()?;
    notify_export_success("Survival table", path.as_ref());
    Ok(())
}
