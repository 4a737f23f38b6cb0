use serde::{Deserialize, Serialize};

use crate::{currency::CurrencyRates, errors::BudgetResult};

/// Tracker settings. Every field falls back to its default when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub rates: CurrencyRates,
}

impl Config {
    pub fn from_json_str(data: &str) -> BudgetResult<Self> {
        let config: Config = serde_json::from_str(data)?;
        tracing::debug!(
            usd_rate = config.rates.usd_rate,
            eur_rate = config.rates.eur_rate,
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn to_json_string(&self) -> BudgetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
