use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{BudgetError, BudgetResult},
    time::{Clock, SystemClock},
};

/// Text layout accepted for explicit record dates.
pub const RECORD_DATE_FORMAT: &str = "%d.%m.%Y";

/// A single dated entry: calories eaten or money spent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    amount: f64,
    #[serde(default)]
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// Creates a record dated today according to the system clock.
    pub fn new(amount: f64, comment: impl Into<String>) -> Self {
        Self::dated_today(amount, comment, &SystemClock)
    }

    pub fn dated_today(amount: f64, comment: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::on(amount, comment, clock.today())
    }

    pub fn on(amount: f64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date,
        }
    }

    /// Creates a record from a `DD.MM.YYYY` date string.
    pub fn parse(amount: f64, comment: impl Into<String>, date: &str) -> BudgetResult<Self> {
        let date = parse_record_date(date)?;
        Ok(Self::on(amount, comment, date))
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new(0.0, "")
    }
}

/// Parses `DD.MM.YYYY` strictly: zero-padded fields, period separators, real calendar day.
pub fn parse_record_date(text: &str) -> BudgetResult<NaiveDate> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        });
    if !shaped {
        return Err(BudgetError::InvalidDate {
            input: text.to_string(),
            reason: "expected DD.MM.YYYY".into(),
        });
    }
    NaiveDate::parse_from_str(text, RECORD_DATE_FORMAT).map_err(|err| BudgetError::InvalidDate {
        input: text.to_string(),
        reason: err.to_string(),
    })
}
