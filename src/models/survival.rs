use serde::Serialize;

/// One row of the multi-spell survival dataset: a (worker, spell) pair that
/// overlaps the study window, with entry/exit expressed as integer day
/// offsets from the window start.
///
/// `failure` is 1 only on the chronologically last spell of a worker, and
/// only when that spell truly ends inside the window; every earlier
/// attrition-then-rejoin event is censored.
#[derive(Debug, Clone, Serialize)]
pub struct SurvivalRecord {
    pub uid: String,
    pub spell_index: usize,
    pub entry_time: i64,
    pub exit_time: i64,
    pub failure: u8,
}
