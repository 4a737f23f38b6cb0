use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Half-open range of calendar days, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window covering `day` only.
    pub fn single_day(day: NaiveDate) -> Self {
        Self::trailing_days(day, 1)
    }

    /// Window of `days` calendar days ending on `last` (inclusive).
    ///
    /// `trailing_days(today, 7)` spans `today - 6 ..= today`; `today - 7` falls outside.
    pub fn trailing_days(last: NaiveDate, days: u32) -> Self {
        let days = i64::from(days.max(1));
        let end = last + Duration::days(1);
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
