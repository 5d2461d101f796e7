use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current value of one holding against its fetched price series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub symbol: String,

    /// Amount invested
    pub invested: Decimal,

    /// `invested / first_close * last_close`; `None` when the series
    /// cannot value this holding (empty, missing endpoint, or zero
    /// first close)
    pub current_value: Option<Decimal>,
}

/// Derived snapshot of a whole portfolio over a fetched price table.
///
/// Not stored anywhere - recomputed from user input and the latest
/// fetch on every change. Totals are `None` whenever any contributing
/// holding could not be valued, so an unavailable series can never
/// silently deflate the portfolio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub holdings: Vec<HoldingValuation>,

    /// Sum of invested amounts over funded holdings
    pub total_invested: Decimal,

    /// Sum of current values, `None` if any holding is unavailable
    pub current_value: Option<Decimal>,

    /// `current_value - total_invested`
    pub absolute_return: Option<Decimal>,

    /// `(current_value / total_invested - 1) * 100`
    pub roi_percent: Option<Decimal>,
}
