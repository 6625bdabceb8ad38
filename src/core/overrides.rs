//! Manual data corrections, kept apart from the algorithm.
//!
//! A handful of (worker, day) cells are known to be wrong in the registers
//! and need patching by hand. Those patches live here as a versioned table
//! loaded from CSV and applied as a final pass over the daily panel, so every
//! correction is auditable and reproducible.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;

use crate::core::report::QualityReport;
use crate::errors::{AppError, AppResult};
use crate::models::daily::DailyRecord;
use crate::models::status::DayStatus;
use crate::utils::date::parse_date;

/// One correction: any subset of the derived fields may be forced.
#[derive(Debug, Clone)]
pub struct OverrideEntry {
    pub status: Option<DayStatus>,
    pub employed: Option<bool>,
    pub turnover: Option<u8>,
    pub note: String,
}

#[derive(Debug, Default)]
pub struct OverrideTable {
    entries: HashMap<(String, NaiveDate), OverrideEntry>,
}

impl OverrideTable {
    /// Load from a CSV with columns `uid,date,status,attendance,turnover,note`
    /// (empty cells leave the corresponding field untouched).
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut rdr = csv::Reader::from_path(path)?;
        let headers = rdr.headers()?.clone();

        let col = |name: &str| -> AppResult<usize> {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| AppError::MissingColumn(name.to_string()))
        };

        let c_uid = col("uid")?;
        let c_date = col("date")?;
        let c_status = col("status")?;
        let c_att = col("attendance")?;
        let c_turn = col("turnover")?;
        let c_note = headers.iter().position(|h| h.eq_ignore_ascii_case("note"));

        let mut entries = HashMap::new();

        for result in rdr.records() {
            let rec = result?;

            let uid = rec.get(c_uid).unwrap_or("").trim().to_string();
            let date = rec
                .get(c_date)
                .and_then(parse_date)
                .ok_or_else(|| AppError::InvalidDate(rec.get(c_date).unwrap_or("").to_string()))?;

            let entry = OverrideEntry {
                status: match rec.get(c_status).map(str::trim) {
                    Some("") | None => None,
                    Some(s) => Some(
                        DayStatus::from_code(s)
                            .ok_or_else(|| AppError::InvalidStatus(s.to_string()))?,
                    ),
                },
                employed: parse_flag(rec.get(c_att))?,
                turnover: parse_flag(rec.get(c_turn))?.map(u8::from),
                note: c_note
                    .and_then(|c| rec.get(c))
                    .unwrap_or("")
                    .to_string(),
            };

            entries.insert((uid, date), entry);
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply the corrections to the daily panel, counting each matched cell.
    pub fn apply(&self, records: &mut [DailyRecord], report: &mut QualityReport) {
        if self.entries.is_empty() {
            return;
        }

        for rec in records.iter_mut() {
            let Some(entry) = self.entries.get(&(rec.uid.clone(), rec.date)) else {
                continue;
            };

            if let Some(status) = entry.status {
                rec.status = status;
            }
            if let Some(flag) = entry.employed {
                rec.employed = Some(flag);
            }
            if let Some(t) = entry.turnover {
                rec.turnover = Some(t);
            }

            report.overrides_applied += 1;
        }
    }
}

fn parse_flag(cell: Option<&str>) -> AppResult<Option<bool>> {
    match cell.map(str::trim) {
        Some("") | None => Ok(None),
        Some("0") => Ok(Some(false)),
        Some("1") => Ok(Some(true)),
        Some(other) => Err(AppError::Overrides(format!(
            "flag cell must be 0, 1 or empty, got '{}'",
            other
        ))),
    }
}
