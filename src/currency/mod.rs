use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::BudgetError;

/// Rubles per US dollar.
pub const DEFAULT_USD_RATE: f64 = 78.17;
/// Rubles per euro.
pub const DEFAULT_EURO_RATE: f64 = 92.12;

/// Currencies the cash calculator can report in. Records are always kept in rubles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Rub, Currency::Usd, Currency::Eur];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Rub => "rub",
            Currency::Usd => "usd",
            Currency::Eur => "eur",
        }
    }

    /// Name used in balance messages.
    pub fn label(self) -> &'static str {
        match self {
            Currency::Rub => "rub",
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
        }
    }

    pub fn is_local(self) -> bool {
        matches!(self, Currency::Rub)
    }
}

impl FromStr for Currency {
    type Err = BudgetError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
            .ok_or_else(|| BudgetError::UnsupportedCurrency(code.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Exchange rates expressed as rubles per one foreign unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CurrencyRates {
    pub usd_rate: f64,
    pub eur_rate: f64,
}

impl Default for CurrencyRates {
    fn default() -> Self {
        Self {
            usd_rate: DEFAULT_USD_RATE,
            eur_rate: DEFAULT_EURO_RATE,
        }
    }
}

impl CurrencyRates {
    pub fn rate_for(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Rub => 1.0,
            Currency::Usd => self.usd_rate,
            Currency::Eur => self.eur_rate,
        }
    }

    /// Converts a ruble amount into `currency`. Zero stays exactly zero.
    pub fn convert(&self, rubles: f64, currency: Currency) -> f64 {
        if currency.is_local() || rubles == 0.0 {
            return rubles;
        }
        rubles / self.rate_for(currency)
    }
}

/// Rounds to two decimal places, halves away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
