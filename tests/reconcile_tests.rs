mod common;
use common::{d, spell, study_2024, worker};

use chrono::NaiveDate;
use spellpanel::core::reconcile::reconcile;
use spellpanel::core::report::QualityReport;
use spellpanel::core::sweep::EventSweep;
use spellpanel::models::daily::{DailyObservation, DailyRecord};
use spellpanel::models::status::{DayStatus, RawStatus};

fn obs(date: NaiveDate, code: RawStatus) -> DailyObservation {
    DailyObservation { date, code }
}

fn record_on<'a>(records: &'a [DailyRecord], date: NaiveDate) -> &'a DailyRecord {
    records.iter().find(|r| r.date == date).unwrap()
}

#[test]
fn test_panel_covers_whole_window() {
    let cfg = study_2024();
    let w = worker("W1", vec![spell(d(2024, 3, 1), None)]);
    let mut rep = QualityReport::default();

    let records = reconcile(&w, &[], &cfg, &mut rep);

    assert_eq!(records.len(), cfg.window_days() as usize);
    assert_eq!(rep.daily_rows, records.len());
}

#[test]
fn test_employment_flag_matches_independent_sweep() {
    let cfg = study_2024();
    let w = worker(
        "W1",
        vec![
            spell(d(2024, 1, 10), Some(d(2024, 3, 1))),
            spell(d(2024, 4, 1), Some(d(2024, 7, 15))),
            spell(d(2024, 9, 1), None),
        ],
    );
    let mut rep = QualityReport::default();

    let records = reconcile(&w, &[], &cfg, &mut rep);
    let sweep = EventSweep::new(&w.spells);

    for rec in &records {
        assert_eq!(
            rec.employed,
            Some(sweep.employed_on(rec.date)),
            "flag disagrees with sweep on {}",
            rec.date
        );
    }
}

#[test]
fn test_rejoin_gap_forced_not_employed_despite_raw_code() {
    let cfg = study_2024();
    let w = worker(
        "W1",
        vec![
            spell(d(2024, 1, 1), Some(d(2024, 3, 1))),
            spell(d(2024, 4, 1), None),
        ],
    );
    // a present code inside the rejoin gap contradicts the spell record
    let observations = vec![obs(d(2024, 3, 15), RawStatus::Present)];
    let mut rep = QualityReport::default();

    let records = reconcile(&w, &observations, &cfg, &mut rep);

    // forced not-employed, attendance voided to unknown
    let gap_day = record_on(&records, d(2024, 3, 15));
    assert_eq!(gap_day.status, DayStatus::Unknown);
    assert_eq!(gap_day.employed, Some(false));
    assert_eq!(rep.ambiguous_status, 1);
}

#[test]
fn test_missing_code_on_employed_day_stays_unknown() {
    let cfg = study_2024();
    let w = worker("W1", vec![spell(d(2024, 1, 1), None)]);
    let mut rep = QualityReport::default();

    let records = reconcile(&w, &[], &cfg, &mut rep);

    // no observation was fabricated: the flag says employed, the status
    // says unobserved
    let day = record_on(&records, d(2024, 6, 10));
    assert_eq!(day.status, DayStatus::Unknown);
    assert_eq!(day.employed, Some(true));
    assert_eq!(rep.ambiguous_status, 0);
}

#[test]
fn test_left_code_inside_spell_corrected_to_present() {
    let cfg = study_2024();
    let w = worker("W1", vec![spell(d(2024, 1, 1), None)]);
    let observations = vec![obs(d(2024, 6, 10), RawStatus::Left)];
    let mut rep = QualityReport::default();

    let records = reconcile(&w, &observations, &cfg, &mut rep);

    let day = record_on(&records, d(2024, 6, 10));
    assert_eq!(day.status, DayStatus::Present);
    assert_eq!(day.employed, Some(true));
    assert_eq!(rep.ambiguous_status, 1);
}

#[test]
fn test_raw_codes_preserved_on_employed_days() {
    let cfg = study_2024();
    let w = worker("W1", vec![spell(d(2024, 1, 1), None)]);
    let observations = vec![
        obs(d(2024, 2, 1), RawStatus::Absent),
        obs(d(2024, 2, 2), RawStatus::SickLeave),
        obs(d(2024, 2, 3), RawStatus::Weekend),
    ];
    let mut rep = QualityReport::default();

    let records = reconcile(&w, &observations, &cfg, &mut rep);

    assert_eq!(record_on(&records, d(2024, 2, 1)).status, DayStatus::Absent);
    assert_eq!(
        record_on(&records, d(2024, 2, 2)).status,
        DayStatus::SickLeave
    );
    assert_eq!(
        record_on(&records, d(2024, 2, 3)).status,
        DayStatus::Weekend
    );
    assert_eq!(rep.ambiguous_status, 0);
}

#[test]
fn test_days_before_first_join_forced_not_employed() {
    let cfg = study_2024();
    let w = worker("W1", vec![spell(d(2024, 5, 1), None)]);
    let observations = vec![obs(d(2024, 2, 1), RawStatus::Present)];
    let mut rep = QualityReport::default();

    let records = reconcile(&w, &observations, &cfg, &mut rep);

    let before = record_on(&records, d(2024, 2, 1));
    assert_eq!(before.status, DayStatus::NotEmployed);
    assert_eq!(before.employed, Some(false));
    // the voided present code is a raw-vs-sweep conflict
    assert_eq!(rep.ambiguous_status, 1);
}

#[test]
fn test_conflicting_codes_after_final_exit_are_counted() {
    let cfg = study_2024();
    let w = worker("W1", vec![spell(d(2024, 1, 1), Some(d(2024, 2, 1)))]);
    let observations = vec![
        // claims attendance after the worker left: conflict
        obs(d(2024, 3, 1), RawStatus::Present),
        // agrees with the sweep: not a conflict
        obs(d(2024, 3, 2), RawStatus::Left),
    ];
    let mut rep = QualityReport::default();

    let records = reconcile(&w, &observations, &cfg, &mut rep);

    assert_eq!(record_on(&records, d(2024, 3, 1)).status, DayStatus::NotEmployed);
    assert_eq!(record_on(&records, d(2024, 3, 2)).status, DayStatus::NotEmployed);
    assert_eq!(rep.ambiguous_status, 1);
}

#[test]
fn test_exit_day_is_employed_but_counts_as_turnover() {
    let cfg = study_2024();
    let w = worker("W1", vec![spell(d(2024, 1, 1), Some(d(2024, 3, 1)))]);
    let mut rep = QualityReport::default();

    let records = reconcile(&w, &[], &cfg, &mut rep);

    let exit_day = record_on(&records, d(2024, 3, 1));
    assert_eq!(exit_day.employed, Some(true));
    assert_eq!(exit_day.turnover, Some(1));
}

#[test]
fn test_reconciler_is_idempotent_on_its_own_output() {
    let cfg = study_2024();
    let w = worker(
        "W1",
        vec![
            spell(d(2024, 1, 1), Some(d(2024, 3, 1))),
            spell(d(2024, 4, 1), None),
        ],
    );
    let observations = vec![
        obs(d(2024, 1, 15), RawStatus::Absent),
        obs(d(2024, 3, 10), RawStatus::Present),
        obs(d(2024, 5, 5), RawStatus::Left),
    ];
    let mut rep = QualityReport::default();
    let first = reconcile(&w, &observations, &cfg, &mut rep);

    // feed the reconciled statuses back in as raw observations
    let derived: Vec<DailyObservation> = first
        .iter()
        .map(|r| {
            let code = match r.status {
                DayStatus::Present => RawStatus::Present,
                DayStatus::Absent => RawStatus::Absent,
                DayStatus::SickLeave => RawStatus::SickLeave,
                DayStatus::CasualLeave => RawStatus::CasualLeave,
                DayStatus::EarnedLeave => RawStatus::EarnedLeave,
                DayStatus::Weekend => RawStatus::Weekend,
                DayStatus::Holiday => RawStatus::Holiday,
                DayStatus::NotEmployed | DayStatus::Unknown => RawStatus::Missing,
            };
            obs(r.date, code)
        })
        .collect();

    let mut rep2 = QualityReport::default();
    let second = reconcile(&w, &derived, &cfg, &mut rep2);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.date, b.date);
        assert_eq!(a.status, b.status);
        assert_eq!(a.employed, b.employed);
        assert_eq!(a.turnover, b.turnover);
    }
    assert_eq!(rep2.ambiguous_status, 0);
}
