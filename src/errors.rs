use thiserror::Error;

/// Error type that captures tracker input and configuration failures.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Invalid record date `{input}`: {reason}")]
    InvalidDate { input: String, reason: String },
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type BudgetResult<T> = Result<T, BudgetError>;
