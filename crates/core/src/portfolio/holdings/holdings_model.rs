use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user-entered investment position: how much money went into one
/// asset. Holdings are transient - rebuilt from user input on every
/// change, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Asset symbol (e.g. "BTC-USD")
    pub symbol: String,

    /// Amount invested, in the portfolio currency unit. Never negative.
    pub invested: Decimal,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, invested: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            invested,
        }
    }

    /// True when money was actually put into this holding.
    /// Zero-invested holdings are ignored by allocation and valuation.
    pub fn is_funded(&self) -> bool {
        self.invested > Decimal::ZERO
    }
}
