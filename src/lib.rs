#![doc(test(attr(deny(warnings))))]

//! Daily Budget tracks dated calorie and cash records against a daily limit
//! and reports what is left for today.
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use daily_budget::{BudgetTracker, CashCalculator, FixedClock, Record};
//!
//! let today = NaiveDate::from_ymd_opt(2021, 2, 1).unwrap();
//! let mut cash = CashCalculator::with_clock(3000.0, Arc::new(FixedClock::new(today)));
//! cash.add_record(Record::on(300.0, "taxi", today));
//! assert_eq!(
//!     cash.cash_remained("eur").unwrap(),
//!     "You have 29.31 Euro left for today."
//! );
//! ```

pub mod calculator;
pub mod calories;
pub mod cash;
pub mod config;
pub mod currency;
pub mod errors;
pub mod record;
pub mod time;
pub mod utils;
pub mod window;

pub use calculator::{BudgetTracker, Calculator};
pub use calories::{CaloriesCalculator, CaloriesStatus};
pub use cash::{CashCalculator, CashStatus};
pub use config::Config;
pub use currency::{Currency, CurrencyRates};
pub use errors::{BudgetError, BudgetResult};
pub use record::Record;
pub use time::{Clock, FixedClock, SystemClock};
pub use window::DateWindow;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Daily Budget tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
