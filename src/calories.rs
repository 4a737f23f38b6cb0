use std::{fmt, sync::Arc};

use crate::{
    calculator::{BudgetTracker, Calculator},
    time::Clock,
};

/// Whether more food fits into today's calorie limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaloriesStatus {
    /// Kilocalories still available today.
    CanEat(f64),
    Enough,
}

impl fmt::Display for CaloriesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaloriesStatus::CanEat(available) => write!(
                f,
                "You can eat more today, but with total calorie count no more than {available} kcal."
            ),
            CaloriesStatus::Enough => f.write_str("That's enough for today!"),
        }
    }
}

/// Tracks eaten kilocalories against a daily limit.
#[derive(Debug, Clone)]
pub struct CaloriesCalculator {
    inner: Calculator,
}

impl CaloriesCalculator {
    pub fn new(limit: f64) -> Self {
        Self {
            inner: Calculator::new(limit),
        }
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Calculator::with_clock(limit, clock),
        }
    }

    pub fn status(&self) -> CaloriesStatus {
        let available = self.available_amount();
        if available > 0.0 {
            CaloriesStatus::CanEat(available)
        } else {
            CaloriesStatus::Enough
        }
    }

    pub fn calories_remained(&self) -> String {
        self.status().to_string()
    }
}

impl BudgetTracker for CaloriesCalculator {
    fn calculator(&self) -> &Calculator {
        &self.inner
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record::Record, time::FixedClock};
    use chrono::NaiveDate;

    fn tracker(limit: f64) -> (CaloriesCalculator, NaiveDate) {
        let today = NaiveDate::from_ymd_opt(2021, 1, 10).unwrap();
        let calc = CaloriesCalculator::with_clock(limit, Arc::new(FixedClock::new(today)));
        (calc, today)
    }

    #[test]
    fn reports_remaining_calories() {
        let (mut calc, today) = tracker(2000.0);
        calc.add_record(Record::on(1186.0, "pizza", today));
        assert_eq!(calc.status(), CaloriesStatus::CanEat(814.0));
        assert_eq!(
            calc.calories_remained(),
            "You can eat more today, but with total calorie count no more than 814 kcal."
        );
    }

    #[test]
    fn exact_limit_is_enough() {
        let (mut calc, today) = tracker(1000.0);
        calc.add_record(Record::on(1000.0, "", today));
        assert_eq!(calc.status(), CaloriesStatus::Enough);
        assert_eq!(calc.calories_remained(), "That's enough for today!");
    }

    #[test]
    fn over_limit_is_enough() {
        let (mut calc, today) = tracker(1000.0);
        calc.add_record(Record::on(1500.0, "", today));
        assert_eq!(calc.calories_remained(), "That's enough for today!");
    }

    #[test]
    fn earlier_days_do_not_reduce_today() {
        let (mut calc, today) = tracker(500.0);
        calc.add_record(Record::on(800.0, "", today.pred_opt().unwrap()));
        assert_eq!(calc.status(), CaloriesStatus::CanEat(500.0));
        assert_eq!(calc.week_stats(), 800.0);
    }
}
