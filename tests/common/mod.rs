#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use daily_budget::{Clock, FixedClock};

/// Day every integration test treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(today()))
}
