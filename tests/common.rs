#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

use spellpanel::config::StudyConfig;
use spellpanel::models::spell::Spell;
use spellpanel::models::worker::{RawSpellSlot, RawWorkerRecord, Worker};

pub fn spl() -> Command {
    cargo_bin_cmd!("spellpanel")
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn spell(start: NaiveDate, end: Option<NaiveDate>) -> Spell {
    Spell::new(start, end)
}

pub fn worker(uid: &str, spells: Vec<Spell>) -> Worker {
    Worker::new(uid.to_string(), spells)
}

pub fn slot(join: Option<NaiveDate>, leave: Option<NaiveDate>) -> RawSpellSlot {
    RawSpellSlot {
        joins: vec![join],
        leaves: vec![leave],
    }
}

pub fn raw_record(uid: Option<&str>, slots: Vec<RawSpellSlot>) -> RawWorkerRecord {
    RawWorkerRecord {
        uid: uid.map(str::to_string),
        slots,
        observations: Vec::new(),
    }
}

/// Study window covering all of 2024, reference instants at year end.
pub fn study_2024() -> StudyConfig {
    StudyConfig {
        window_start: d(2024, 1, 1),
        window_end: d(2024, 12, 31),
        tenure_reference: d(2024, 12, 31),
        tenure_cutoff: d(2024, 12, 31),
        days_per_month: 30.4375,
    }
}

/// Create a unique fixture file path inside the system temp dir and remove
/// any leftover from a previous run.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_spellpanel.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn write_fixture(path: &str, content: &str) {
    fs::write(path, content).unwrap();
}
