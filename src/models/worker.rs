use chrono::NaiveDate;
use serde::Serialize;

use super::daily::DailyObservation;
use super::spell::Spell;

/// Maximum number of employment spells the source registers can encode.
pub const MAX_SPELLS: usize = 15;

/// A worker with a canonical, chronologically ordered spell history.
/// Spells are exclusively owned; at most one (the last) may be open.
#[derive(Debug, Clone, Serialize)]
pub struct Worker {
    pub uid: String,
    pub spells: Vec<Spell>,
}

impl Worker {
    pub fn new(uid: String, spells: Vec<Spell>) -> Self {
        Self { uid, spells }
    }

    /// The spell active on `day`, if any (end date inclusive).
    pub fn spell_on(&self, day: NaiveDate) -> Option<&Spell> {
        self.spells.iter().find(|s| s.covers(day))
    }

    pub fn first_start(&self) -> Option<NaiveDate> {
        self.spells.first().map(|s| s.start)
    }
}

/// One logical spell slot as found in the raw registers: several candidate
/// fields may encode the same slot under different historical names, so each
/// boundary is a list of candidates in priority order.
#[derive(Debug, Clone, Default)]
pub struct RawSpellSlot {
    pub joins: Vec<Option<NaiveDate>>,
    pub leaves: Vec<Option<NaiveDate>>,
}

impl RawSpellSlot {
    /// First non-missing candidate wins.
    pub fn join(&self) -> Option<NaiveDate> {
        self.joins.iter().copied().flatten().next()
    }

    pub fn leave(&self) -> Option<NaiveDate> {
        self.leaves.iter().copied().flatten().next()
    }
}

/// A worker record exactly as the ingestion collaborator hands it over:
/// identity not yet verified, spell slots not yet canonicalized, daily
/// observations unmerged.
#[derive(Debug, Clone, Default)]
pub struct RawWorkerRecord {
    pub uid: Option<String>,
    pub slots: Vec<RawSpellSlot>,
    pub observations: Vec<DailyObservation>,
}
