//! Race countdown — whole days and weeks remaining.

use chrono::NaiveDate;

/// Days and weeks left until race day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub weeks: i64,
}

/// Whole days from `today` to `race_date`, floored at zero.
///
/// Calendar-day precision; a race date in the past counts as zero, never
/// negative.
pub fn days_until(race_date: NaiveDate, today: NaiveDate) -> i64 {
    (race_date - today).num_days().max(0)
}

/// Whole weeks remaining: `days_until / 7`, truncated.
pub fn weeks_until(race_date: NaiveDate, today: NaiveDate) -> i64 {
    days_until(race_date, today) / 7
}

impl Countdown {
    /// Derive the countdown for a race date. Recomputed on every call; this
    /// is display data, nothing caches it.
    pub fn to_race(race_date: NaiveDate, today: NaiveDate) -> Self {
        let days = days_until(race_date, today);
        Self {
            days,
            weeks: days / 7,
        }
    }
}
