use chrono::NaiveDate;
use serde::Serialize;

/// A contiguous interval of employment for one worker, bounded by a join
/// date and an optional leave date. `end = None` means the worker is still
/// employed at the end of observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spell {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl Spell {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Whether the spell is active on `day` (end date inclusive).
    pub fn covers(&self, day: NaiveDate) -> bool {
        day >= self.start && self.end.is_none_or(|e| day <= e)
    }

    /// Interval validity: an end date, when present, must fall strictly
    /// after the start.
    pub fn is_valid(&self) -> bool {
        self.end.is_none_or(|e| e > self.start)
    }
}
