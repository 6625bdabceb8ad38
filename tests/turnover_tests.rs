mod common;
use common::{d, spell};

use spellpanel::core::turnover::turnover_on;
use spellpanel::utils::date::date_range;

#[test]
fn test_turnover_boundaries_across_rejoin() {
    // worker A: (2024-01-01..2024-03-01) then (2024-04-01..open)
    let spells = vec![
        spell(d(2024, 1, 1), Some(d(2024, 3, 1))),
        spell(d(2024, 4, 1), None),
    ];

    // inside the first spell
    assert_eq!(turnover_on(&spells, d(2024, 1, 1)), Some(0));
    assert_eq!(turnover_on(&spells, d(2024, 2, 29)), Some(0));

    // 1 on the whole of 2024-03-01..2024-03-31, exit day included
    for day in date_range(d(2024, 3, 1), d(2024, 3, 31)) {
        assert_eq!(turnover_on(&spells, day), Some(1), "expected 1 on {}", day);
    }

    // 0 from the rejoin onward (open spell)
    assert_eq!(turnover_on(&spells, d(2024, 4, 1)), Some(0));
    assert_eq!(turnover_on(&spells, d(2024, 12, 31)), Some(0));
}

#[test]
fn test_turnover_permanent_after_final_closed_spell() {
    let spells = vec![spell(d(2024, 1, 1), Some(d(2024, 2, 1)))];

    assert_eq!(turnover_on(&spells, d(2024, 2, 1)), Some(1));
    assert_eq!(turnover_on(&spells, d(2024, 6, 1)), Some(1));
    assert_eq!(turnover_on(&spells, d(2025, 1, 1)), Some(1));
}

#[test]
fn test_turnover_missing_without_spell_information() {
    assert_eq!(turnover_on(&[], d(2024, 1, 1)), None);

    // before the worker ever joined there is nothing to churn from
    let spells = vec![spell(d(2024, 5, 1), None)];
    assert_eq!(turnover_on(&spells, d(2024, 4, 30)), None);
    assert_eq!(turnover_on(&spells, d(2024, 5, 1)), Some(0));
}
