use chrono::NaiveDate;
use serde::Serialize;

use super::status::{DayStatus, RawStatus};

/// A single raw attendance observation, as supplied by the ingestion
/// collaborator.
#[derive(Debug, Clone, Copy)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub code: RawStatus,
}

/// One authoritative row of the daily panel.
///
/// `employed` and `turnover` are tri-state: `None` means no spell information
/// exists for that day at all, and is exported as a blank rather than being
/// defaulted to either state.
#[derive(Debug, Clone, Serialize)]
pub struct DailyRecord {
    pub uid: String,
    pub date: NaiveDate,
    pub raw: RawStatus,
    pub status: DayStatus,
    pub employed: Option<bool>,
    pub turnover: Option<u8>,
}

impl DailyRecord {
    /// Employment flag as exported: 1, 0 or blank.
    pub fn attendance_field(&self) -> String {
        match self.employed {
            Some(true) => "1".to_string(),
            Some(false) => "0".to_string(),
            None => String::new(),
        }
    }

    pub fn turnover_field(&self) -> String {
        match self.turnover {
            Some(v) => v.to_string(),
            None => String::new(),
        }
    }
}
