use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily market data quote as returned by a provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Trading day of the quote
    pub date: NaiveDate,

    /// Closing price (required)
    pub close: Decimal,

    /// Quote currency
    pub currency: String,

    /// Source of the quote (YAHOO, etc.)
    pub source: String,
}

impl Quote {
    /// Create a new daily quote.
    pub fn new(date: NaiveDate, close: Decimal, currency: String, source: String) -> Self {
        Self {
            date,
            close,
            currency,
            source,
        }
    }
}
