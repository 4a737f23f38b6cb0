use std::{fmt, sync::Arc};

use crate::{
    calculator::{BudgetTracker, Calculator},
    config::Config,
    currency::{round_cents, Currency, CurrencyRates},
    errors::BudgetResult,
    time::{Clock, SystemClock},
};

/// Today's cash balance in a chosen currency, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CashStatus {
    Left { amount: f64, currency: Currency },
    /// `amount` is the positive size of the overspend.
    Debt { amount: f64, currency: Currency },
    Exhausted,
}

impl fmt::Display for CashStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CashStatus::Left { amount, currency } => {
                write!(f, "You have {amount} {} left for today.", currency.label())
            }
            CashStatus::Debt { amount, currency } => write!(
                f,
                "No money, hang in there: your debt is {amount} {}.",
                currency.label()
            ),
            CashStatus::Exhausted => f.write_str("No money, hang in there."),
        }
    }
}

/// Tracks money spent in rubles against a daily limit.
#[derive(Debug, Clone)]
pub struct CashCalculator {
    inner: Calculator,
    rates: CurrencyRates,
}

impl CashCalculator {
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self::with_rates(limit, CurrencyRates::default(), clock)
    }

    pub fn with_rates(limit: f64, rates: CurrencyRates, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Calculator::with_clock(limit, clock),
            rates,
        }
    }

    pub fn from_config(limit: f64, config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self::with_rates(limit, config.rates, clock)
    }

    pub fn rates(&self) -> &CurrencyRates {
        &self.rates
    }

    pub fn status(&self, currency: Currency) -> CashStatus {
        let balance = round_cents(self.rates.convert(self.available_amount(), currency));
        if balance > 0.0 {
            CashStatus::Left {
                amount: balance,
                currency,
            }
        } else if balance < 0.0 {
            CashStatus::Debt {
                amount: -balance,
                currency,
            }
        } else {
            CashStatus::Exhausted
        }
    }

    pub fn cash_remained_in(&self, currency: Currency) -> String {
        self.status(currency).to_string()
    }

    /// Balance message for a currency code: `"rub"`, `"usd"` or `"eur"`.
    pub fn cash_remained(&self, code: &str) -> BudgetResult<String> {
        let currency = code.parse::<Currency>().map_err(|err| {
            tracing::warn!(code, "unsupported currency requested");
            err
        })?;
        Ok(self.cash_remained_in(currency))
    }
}

impl BudgetTracker for CashCalculator {
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
    use crate::{errors::BudgetError, record::Record, time::FixedClock};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 2, 1).unwrap()
    }

    fn tracker(limit: f64) -> CashCalculator {
        CashCalculator::with_clock(limit, Arc::new(FixedClock::new(today())))
    }

    #[test]
    fn converts_balance_into_euro() {
        let mut calc = tracker(3000.0);
        calc.add_record(Record::on(300.0, "taxi", today()));
        assert_eq!(
            calc.cash_remained("eur").unwrap(),
            "You have 29.31 Euro left for today."
        );
    }

    #[test]
    fn reports_debt_in_dollars() {
        let mut calc = tracker(1000.0);
        calc.add_record(Record::on(1200.0, "", today()));
        assert_eq!(
            calc.status(Currency::Usd),
            CashStatus::Debt {
                amount: 2.56,
                currency: Currency::Usd
            }
        );
        assert_eq!(
            calc.cash_remained("usd").unwrap(),
            "No money, hang in there: your debt is 2.56 USD."
        );
    }

    #[test]
    fn rubles_are_not_converted() {
        let mut calc = tracker(3000.0);
        calc.add_record(Record::on(300.0, "", today()));
        assert_eq!(
            calc.cash_remained("rub").unwrap(),
            "You have 2700 rub left for today."
        );
    }

    #[test]
    fn zero_balance_is_exhausted_in_every_currency() {
        let mut calc = tracker(500.0);
        calc.add_record(Record::on(500.0, "", today()));
        for currency in Currency::ALL {
            assert_eq!(calc.status(currency), CashStatus::Exhausted);
            assert_eq!(calc.cash_remained_in(currency), "No money, hang in there.");
        }
    }

    #[test]
    fn balance_rounding_to_zero_is_exhausted() {
        let mut calc = tracker(100.0);
        calc.add_record(Record::on(99.9, "", today()));
        assert_eq!(calc.status(Currency::Eur), CashStatus::Exhausted);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let calc = tracker(1000.0);
        let err = calc.cash_remained("xyz").expect_err("xyz is not supported");
        assert!(matches!(err, BudgetError::UnsupportedCurrency(code) if code == "xyz"));
    }

    #[test]
    fn injected_rates_are_used() {
        let rates = CurrencyRates {
            usd_rate: 100.0,
            eur_rate: 50.0,
        };
        let mut calc =
            CashCalculator::with_rates(1000.0, rates, Arc::new(FixedClock::new(today())));
        calc.add_record(Record::on(500.0, "", today()));
        assert_eq!(calc.cash_remained_in(Currency::Usd), "You have 5 USD left for today.");
        assert_eq!(calc.cash_remained_in(Currency::Eur), "You have 10 Euro left for today.");
    }
}
