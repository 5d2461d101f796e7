//! Market data provider trait definitions.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
/// The price store only needs daily closing quotes; intraday data is not
/// part of the contract.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// error reporting.
    fn id(&self) -> &'static str;

    /// Fetch daily closing quotes for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The provider symbol (e.g. "BTC-USD")
    /// * `start` - Start of the date range (inclusive)
    /// * `end` - End of the date range (inclusive)
    ///
    /// # Returns
    ///
    /// Quotes ascending by date, at most one per trading day, or a
    /// `MarketDataError` on failure. A symbol with no quotes in range
    /// yields [`MarketDataError::NoDataForRange`].
    async fn fetch_daily_quotes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Quote>, MarketDataError>;
}
