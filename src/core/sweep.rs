use chrono::NaiveDate;

use crate::models::spell::Spell;

/// Event sweep over a worker's spell list: each spell emits a +1 event on
/// its start date and a -1 event on the day after its end date (when known),
/// so a running sum over the date-sorted events recovers employment coverage
/// at any day. Computed per worker and discarded; never shared state.
#[derive(Debug, Clone)]
pub struct EventSweep {
    events: Vec<(NaiveDate, i32)>,
}

impl EventSweep {
    pub fn new(spells: &[Spell]) -> Self {
        let mut events = Vec::with_capacity(spells.len() * 2);

        for sp in spells {
            events.push((sp.start, 1));
            if let Some(end) = sp.end
                && let Some(day_after) = end.succ_opt()
            {
                events.push((day_after, -1));
            }
        }

        events.sort_by_key(|(d, _)| *d);
        Self { events }
    }

    /// Running sum of all events dated at or before `day`; > 0 means the
    /// worker is employed on that day (the end date itself stays covered).
    pub fn employed_on(&self, day: NaiveDate) -> bool {
        let mut sum = 0;
        for (d, delta) in &self.events {
            if *d > day {
                break;
            }
            sum += delta;
        }
        sum > 0
    }

    /// Coverage for every day of `[from, to]`, walking the event list once.
    pub fn coverage(&self, from: NaiveDate, to: NaiveDate) -> Vec<(NaiveDate, bool)> {
        let mut out = Vec::new();
        let mut sum = 0;
        let mut i = 0;

        // Events strictly before the range seed the running sum.
        while i < self.events.len() && self.events[i].0 < from {
            sum += self.events[i].1;
            i += 1;
        }

        let mut day = from;
        while day <= to {
            while i < self.events.len() && self.events[i].0 == day {
                sum += self.events[i].1;
                i += 1;
            }
            out.push((day, sum > 0));
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }

        out
    }
}
