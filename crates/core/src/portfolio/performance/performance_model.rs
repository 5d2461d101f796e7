use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-asset performance card for the dashboard.
///
/// Every metric field is optional: `None` renders as "n/a". Values are
/// rounded for display at the service boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPerformance {
    pub symbol: String,

    /// First and last dates of the table's index
    pub period_start_date: Option<NaiveDate>,
    pub period_end_date: Option<NaiveDate>,

    /// Most recent close in the period
    pub last_close: Option<Decimal>,

    /// last/first close ratio ("2.5x")
    pub growth_multiple: Option<Decimal>,

    /// Percentage gain/loss over the period
    pub percentage_return: Option<Decimal>,

    /// Annualized volatility of daily returns (fractional)
    pub volatility: Option<Decimal>,

    /// Annualized Sharpe ratio
    pub sharpe_ratio: Option<Decimal>,

    /// Worst percentage decline from a running peak (<= 0)
    pub max_drawdown: Option<Decimal>,
}
