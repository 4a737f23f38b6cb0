use std::{fmt, sync::Arc};

use chrono::NaiveDate;

use crate::{
    record::Record,
    time::{Clock, SystemClock},
    window::DateWindow,
};

/// Length of the trailing window used by [`Calculator::week_stats`].
pub const WEEK_DAYS: u32 = 7;

/// Daily limit plus the append-only list of records counted against it.
#[derive(Clone)]
pub struct Calculator {
    limit: f64,
    records: Vec<Record>,
    clock: Arc<dyn Clock>,
}

impl Calculator {
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            limit,
            records: Vec::new(),
            clock,
        }
    }

    pub fn add_record(&mut self, record: Record) {
        tracing::debug!(
            amount = record.amount(),
            date = %record.date(),
            "record added"
        );
        self.records.push(record);
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn today_window(&self) -> DateWindow {
        DateWindow::single_day(self.today())
    }

    pub fn week_window(&self) -> DateWindow {
        DateWindow::trailing_days(self.today(), WEEK_DAYS)
    }

    /// Total amount recorded for today.
    pub fn today_stats(&self) -> f64 {
        let window = self.today_window();
        let total = self.sum_within(window);
        tracing::trace!(day = %window.start, total, "today stats");
        total
    }

    /// Total amount recorded over the last seven days, today included.
    pub fn week_stats(&self) -> f64 {
        let window = self.week_window();
        let total = self.sum_within(window);
        tracing::trace!(from = %window.start, until = %window.end, total, "week stats");
        total
    }

    /// `limit - today_stats()`; negative once the limit is exceeded.
    pub fn available_amount(&self) -> f64 {
        self.limit - self.today_stats()
    }

    fn sum_within(&self, window: DateWindow) -> f64 {
        self.records
            .iter()
            .filter(|record| window.contains(record.date()))
            .map(Record::amount)
            .sum()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("limit", &self.limit)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

/// Shared surface of the calorie and cash calculators, backed by an inner [`Calculator`].
pub trait BudgetTracker {
    fn calculator(&self) -> &Calculator;

    fn calculator_mut(&mut self) -> &mut Calculator;

    fn add_record(&mut self, record: Record) {
        self.calculator_mut().add_record(record);
    }

    fn limit(&self) -> f64 {
        self.calculator().limit()
    }

    fn records(&self) -> &[Record] {
        self.calculator().records()
    }

    fn today_stats(&self) -> f64 {
        self.calculator().today_stats()
    }

    fn week_stats(&self) -> f64 {
        self.calculator().week_stats()
    }

    fn available_amount(&self) -> f64 {
        self.calculator().available_amount()
    }
}
