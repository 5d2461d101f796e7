//! Core error types for the Coinfolio analytics crate.
//!
//! Numerically degenerate input (empty series, zero variance, missing
//! cells) is never an error: the metric functions return `None` for it.
//! These types cover structural problems only - bad input shapes and
//! caller-contract violations like an all-zero portfolio.

use thiserror::Error;

use coinfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Portfolio calculation failed: {0}")]
    Calculation(#[from] CalculatorError),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

/// Errors that occur during portfolio calculations.
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// The portfolio cannot support the requested computation, e.g. the
    /// total invested amount is zero. Callers are expected to guard
    /// before invoking allocation or valuation.
    #[error("Invalid portfolio: {0}")]
    InvalidPortfolio(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
