mod common;
use common::{d, spell, worker};

use spellpanel::core::impute::{impute_missing_ends, population_avg_gap};
use spellpanel::core::report::QualityReport;

#[test]
fn test_population_avg_gap_over_observed_pairs() {
    let workers = vec![
        // gap 10
        worker(
            "A",
            vec![
                spell(d(2024, 1, 1), Some(d(2024, 2, 1))),
                spell(d(2024, 2, 11), None),
            ],
        ),
        // gap 20
        worker(
            "B",
            vec![
                spell(d(2024, 3, 1), Some(d(2024, 4, 1))),
                spell(d(2024, 4, 21), None),
            ],
        ),
        // unobserved end contributes nothing
        worker(
            "C",
            vec![spell(d(2024, 1, 1), None), spell(d(2024, 5, 10), None)],
        ),
    ];

    assert_eq!(population_avg_gap(&workers), Some(15));
}

#[test]
fn test_no_observed_pair_gives_no_avg() {
    let workers = vec![worker(
        "C",
        vec![spell(d(2024, 1, 1), None), spell(d(2024, 5, 10), None)],
    )];
    assert_eq!(population_avg_gap(&workers), None);
}

#[test]
fn test_primary_estimate_subtracts_avg_gap() {
    // worker C: missing end on spell 1, spell 2 starts 2024-05-10,
    // avg_gap 10 over the population -> imputed end 2024-04-30
    let mut workers = vec![worker(
        "C",
        vec![spell(d(2024, 1, 5), None), spell(d(2024, 5, 10), None)],
    )];
    let mut rep = QualityReport::default();

    impute_missing_ends(&mut workers, Some(10), &mut rep);

    assert_eq!(workers[0].spells[0].end, Some(d(2024, 4, 30)));
    assert_eq!(rep.imputation_fallback, 0);
    // the final spell stays open
    assert_eq!(workers[0].spells[1].end, None);
}

#[test]
fn test_fallback_midpoint_when_primary_not_after_start() {
    // avg_gap pushes the estimate before the spell's own start
    let mut workers = vec![worker(
        "C",
        vec![spell(d(2024, 3, 1), None), spell(d(2024, 5, 10), None)],
    )];
    let mut rep = QualityReport::default();

    impute_missing_ends(&mut workers, Some(150), &mut rep);

    // midpoint: 70 days between starts, floor half = 35
    assert_eq!(workers[0].spells[0].end, Some(d(2024, 4, 5)));
    assert_eq!(rep.imputation_fallback, 1);
}

#[test]
fn test_fallback_when_avg_gap_unavailable() {
    let mut workers = vec![worker(
        "C",
        vec![spell(d(2024, 1, 1), None), spell(d(2024, 1, 21), None)],
    )];
    let mut rep = QualityReport::default();

    impute_missing_ends(&mut workers, None, &mut rep);

    assert_eq!(workers[0].spells[0].end, Some(d(2024, 1, 11)));
    assert_eq!(rep.imputation_fallback, 1);
}

#[test]
fn test_every_imputed_spell_ends_after_its_start() {
    let mut workers = vec![
        worker(
            "A",
            vec![
                spell(d(2024, 1, 1), None),
                spell(d(2024, 1, 2), None),
                spell(d(2024, 6, 1), None),
            ],
        ),
        worker(
            "B",
            vec![spell(d(2024, 2, 1), None), spell(d(2024, 2, 3), None)],
        ),
    ];
    let mut rep = QualityReport::default();

    impute_missing_ends(&mut workers, Some(40), &mut rep);

    for w in &workers {
        for (i, sp) in w.spells.iter().enumerate() {
            if i + 1 < w.spells.len() {
                let end = sp.end.expect("non-final spell must have an end");
                assert!(end > sp.start, "imputed end must fall after start");
            }
        }
    }
}

#[test]
fn test_rejoin_on_next_day_merges_the_slots() {
    // no day fits strictly between the start and the rejoin
    let mut workers = vec![worker(
        "A",
        vec![
            spell(d(2024, 1, 1), None),
            spell(d(2024, 1, 2), Some(d(2024, 3, 1))),
        ],
    )];
    let mut rep = QualityReport::default();

    impute_missing_ends(&mut workers, Some(10), &mut rep);

    assert_eq!(workers[0].spells.len(), 1);
    assert_eq!(workers[0].spells[0].start, d(2024, 1, 1));
    assert_eq!(workers[0].spells[0].end, Some(d(2024, 3, 1)));
    assert_eq!(rep.overlap_trimmed, 1);
    assert_eq!(rep.imputation_fallback, 0);
}

#[test]
fn test_observed_ends_are_never_touched() {
    let mut workers = vec![worker(
        "A",
        vec![
            spell(d(2024, 1, 1), Some(d(2024, 2, 1))),
            spell(d(2024, 3, 1), None),
        ],
    )];
    let mut rep = QualityReport::default();

    impute_missing_ends(&mut workers, Some(10), &mut rep);

    assert_eq!(workers[0].spells[0].end, Some(d(2024, 2, 1)));
    assert_eq!(rep.imputation_fallback, 0);
}
