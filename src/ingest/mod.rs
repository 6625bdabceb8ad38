//! Ingestion collaborator: CSV readers for the two source files.
//!
//! The roster is a wide file, one row per worker, with up to fifteen
//! join/leave date columns whose names drifted across register versions
//! (`doj2`, `join_date_2`, `rejoin2`, ...). A `FieldMap` built once from the
//! header row resolves every historical alias to its logical slot; within a
//! slot, the first non-missing value wins downstream.
//!
//! The attendance file is long: one `(uid, date, code)` row per observation.
//! Unparseable dates and unrecognized codes are treated as missing rather
//! than aborting the run.

use std::collections::HashMap;
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::daily::DailyObservation;
use crate::models::status::RawStatus;
use crate::models::worker::{MAX_SPELLS, RawSpellSlot, RawWorkerRecord};
use crate::utils::date::parse_date;

const UID_ALIASES: [&str; 4] = ["uid", "emp_id", "employee_id", "id"];

/// Column positions for one logical spell slot, in alias-priority order.
#[derive(Debug, Default, Clone)]
struct SlotColumns {
    joins: Vec<usize>,
    leaves: Vec<usize>,
}

/// Header-derived mapping from roster columns to logical fields.
#[derive(Debug)]
pub struct FieldMap {
    uid: usize,
    slots: Vec<SlotColumns>,
}

impl FieldMap {
    pub fn from_headers(headers: &csv::StringRecord) -> AppResult<Self> {
        let find = |name: String| -> Option<usize> {
            headers.iter().position(|h| h.trim().eq_ignore_ascii_case(&name))
        };

        let uid = UID_ALIASES
            .iter()
            .find_map(|a| find((*a).to_string()))
            .ok_or_else(|| AppError::MissingColumn("uid".to_string()))?;

        let mut slots = Vec::with_capacity(MAX_SPELLS);

        for i in 1..=MAX_SPELLS {
            let mut cols = SlotColumns::default();

            for name in join_aliases(i) {
                if let Some(c) = find(name) {
                    cols.joins.push(c);
                }
            }
            for name in leave_aliases(i) {
                if let Some(c) = find(name) {
                    cols.leaves.push(c);
                }
            }

            slots.push(cols);
        }

        Ok(Self { uid, slots })
    }
}

/// Historical names for the slot `i` join column. The first spell also
/// appears un-numbered in older extracts.
fn join_aliases(i: usize) -> Vec<String> {
    let mut names = vec![
        format!("doj{}", i),
        format!("doj_{}", i),
        format!("join_date_{}", i),
        format!("rejoin{}", i),
        format!("date_of_joining_{}", i),
    ];
    if i == 1 {
        names.push("doj".to_string());
        names.push("join_date".to_string());
    }
    names
}

fn leave_aliases(i: usize) -> Vec<String> {
    let mut names = vec![
        format!("dol{}", i),
        format!("dol_{}", i),
        format!("leave_date_{}", i),
        format!("left{}", i),
        format!("date_of_leaving_{}", i),
    ];
    if i == 1 {
        names.push("dol".to_string());
        names.push("leave_date".to_string());
    }
    names
}

/// Read the wide roster file into raw worker records (observations empty;
/// merged in by `load_inputs`).
pub fn read_roster<P: AsRef<Path>>(path: P) -> AppResult<Vec<RawWorkerRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let map = FieldMap::from_headers(rdr.headers()?)?;

    let mut out = Vec::new();

    for result in rdr.records() {
        let rec = result?;

        let uid = rec
            .get(map.uid)
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string);

        let slots = map
            .slots
            .iter()
            .map(|cols| RawSpellSlot {
                joins: cols
                    .joins
                    .iter()
                    .map(|&c| rec.get(c).and_then(parse_date))
                    .collect(),
                leaves: cols
                    .leaves
                    .iter()
                    .map(|&c| rec.get(c).and_then(parse_date))
                    .collect(),
            })
            .collect();

        out.push(RawWorkerRecord {
            uid,
            slots,
            observations: Vec::new(),
        });
    }

    Ok(out)
}

/// Read the long attendance file, grouped by worker.
pub fn read_attendance<P: AsRef<Path>>(path: P) -> AppResult<HashMap<String, Vec<DailyObservation>>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let headers = rdr.headers()?.clone();

    let col = |aliases: &[&str]| -> Option<usize> {
        aliases
            .iter()
            .find_map(|a| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(a)))
    };

    let c_uid = col(&UID_ALIASES).ok_or_else(|| AppError::MissingColumn("uid".to_string()))?;
    let c_date = col(&["date", "att_date"]).ok_or_else(|| AppError::MissingColumn("date".to_string()))?;
    let c_code =
        col(&["code", "status", "attendance_code"]).ok_or_else(|| AppError::MissingColumn("code".to_string()))?;

    let mut out: HashMap<String, Vec<DailyObservation>> = HashMap::new();

    for result in rdr.records() {
        let rec = result?;

        let Some(uid) = rec.get(c_uid).map(str::trim).filter(|u| !u.is_empty()) else {
            continue;
        };
        let Some(date) = rec.get(c_date).and_then(parse_date) else {
            continue;
        };
        let code = rec
            .get(c_code)
            .and_then(RawStatus::from_code)
            .unwrap_or(RawStatus::Missing);

        out.entry(uid.to_string())
            .or_default()
            .push(DailyObservation { date, code });
    }

    Ok(out)
}

/// Merge roster and attendance into the engine's input records. Workers seen
/// only in the attendance file are carried with empty slots so the engine
/// counts them as exclusions instead of losing them silently.
pub fn load_inputs<P: AsRef<Path>>(roster: P, attendance: P) -> AppResult<Vec<RawWorkerRecord>> {
    let mut records = read_roster(roster)?;
    let mut by_uid = read_attendance(attendance)?;

    for rec in &mut records {
        if let Some(uid) = &rec.uid
            && let Some(mut obs) = by_uid.remove(uid)
        {
            obs.sort_by_key(|o| o.date);
            rec.observations = obs;
        }
    }

    let mut orphans: Vec<_> = by_uid.into_iter().collect();
    orphans.sort_by(|a, b| a.0.cmp(&b.0));
    for (uid, mut obs) in orphans {
        obs.sort_by_key(|o| o.date);
        records.push(RawWorkerRecord {
            uid: Some(uid),
            slots: Vec::new(),
            observations: obs,
        });
    }

    Ok(records)
}
