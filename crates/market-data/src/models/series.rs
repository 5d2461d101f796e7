use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::quote::Quote;
use crate::errors::MarketDataError;

/// One cell of a price series: a date with an explicit, possibly missing,
/// closing price. `None` is the missing marker; it is never dropped or
/// silently filled at this level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading day
    pub date: NaiveDate,

    /// Closing price, `None` when no quote exists for the day
    pub close: Option<Decimal>,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: Option<Decimal>) -> Self {
        Self { date, close }
    }
}

/// Ordered closing-price history for one asset.
///
/// Invariant: dates are strictly increasing. The constructor rejects
/// unordered or duplicated dates, so holders of a `PriceSeries` can rely
/// on positional order matching chronological order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Asset symbol this series belongs to (e.g. "BTC-USD")
    pub symbol: String,

    /// Currency the closes are quoted in
    pub currency: String,

    /// Aligned (date, close) cells, strictly increasing by date
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Create a series, validating that dates are strictly increasing.
    pub fn new(
        symbol: String,
        currency: String,
        points: Vec<PricePoint>,
    ) -> Result<Self, MarketDataError> {
        for window in points.windows(2) {
            if window[0].date >= window[1].date {
                return Err(MarketDataError::ValidationFailed {
                    message: format!(
                        "Series for '{}' is not strictly increasing by date: {} then {}",
                        symbol, window[0].date, window[1].date
                    ),
                });
            }
        }
        Ok(Self {
            symbol,
            currency,
            points,
        })
    }

    /// Create an empty series for a symbol with no data in range.
    /// Outer-joining an empty series yields an all-missing column.
    pub fn empty(symbol: String) -> Self {
        Self {
            symbol,
            currency: "USD".to_string(),
            points: Vec::new(),
        }
    }

    /// Build a series from provider quotes.
    ///
    /// Quotes are expected ascending and deduplicated per day (the provider
    /// contract); the constructor re-validates the ordering.
    pub fn from_quotes(symbol: String, quotes: &[Quote]) -> Result<Self, MarketDataError> {
        let currency = quotes
            .first()
            .map(|q| q.currency.clone())
            .unwrap_or_else(|| "USD".to_string());
        let points = quotes
            .iter()
            .map(|q| PricePoint::new(q.date, Some(q.close)))
            .collect();
        Self::new(symbol, currency, points)
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Close of the first cell, `None` when empty or missing.
    pub fn first_close(&self) -> Option<Decimal> {
        self.points.first().and_then(|p| p.close)
    }

    /// Close of the last cell, `None` when empty or missing.
    pub fn last_close(&self) -> Option<Decimal> {
        self.points.last().and_then(|p| p.close)
    }

    /// The close column, positionally aligned with [`dates`](Self::dates).
    pub fn closes(&self) -> Vec<Option<Decimal>> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }
}
