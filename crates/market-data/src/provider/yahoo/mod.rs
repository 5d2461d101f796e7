//! Yahoo Finance market data provider.
//!
//! Fetches daily closing prices through the Yahoo Finance chart API,
//! primarily for cryptocurrency pairs (e.g. BTC-USD), though any Yahoo
//! symbol with daily history works.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::MarketDataProvider;

const PROVIDER_ID: &str = "YAHOO";

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    /// Convert a chrono date to time::OffsetDateTime for the Yahoo API.
    fn date_to_offset_datetime(date: NaiveDate, end_of_day: bool) -> OffsetDateTime {
        let time = if end_of_day {
            NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
        } else {
            NaiveTime::MIN
        };
        let timestamp = Utc.from_utc_datetime(&date.and_time(time)).timestamp();
        OffsetDateTime::from_unix_timestamp(timestamp).unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    /// Derive the quote currency from a Yahoo pair symbol.
    /// "BTC-USD" quotes in USD, "ETH-EUR" in EUR; bare symbols default to USD.
    fn quote_currency(symbol: &str) -> String {
        symbol
            .rsplit_once('-')
            .map(|(_, currency)| currency.to_string())
            .unwrap_or_else(|| "USD".to_string())
    }

    /// Convert a Yahoo quote to our daily Quote model.
    fn yahoo_quote_to_quote(
        yahoo_quote: &yahoo::Quote,
        currency: &str,
    ) -> Result<Quote, MarketDataError> {
        let date = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?
            .date_naive();

        let close = Decimal::from_f64_retain(yahoo_quote.close).ok_or_else(|| {
            MarketDataError::ValidationFailed {
                message: format!(
                    "Failed to convert close price {} to Decimal",
                    yahoo_quote.close
                ),
            }
        })?;

        Ok(Quote::new(
            date,
            close,
            currency.to_string(),
            PROVIDER_ID.to_string(),
        ))
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_daily_quotes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Quote>, MarketDataError> {
        debug!(
            "Fetching daily quotes for {} from {} to {} from Yahoo",
            symbol, start, end
        );

        let start_time = Self::date_to_offset_datetime(start, false);
        let end_time = Self::date_to_offset_datetime(end, true);
        let currency = Self::quote_currency(symbol);

        let response = self
            .connector
            .get_quote_history(symbol, start_time, end_time)
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::SymbolNotFound(symbol.to_string())
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        match response.quotes() {
            Ok(yahoo_quotes) => {
                // Last quote wins per day; the map also restores ascending order.
                let mut by_date: BTreeMap<NaiveDate, Quote> = BTreeMap::new();
                for yahoo_quote in &yahoo_quotes {
                    match Self::yahoo_quote_to_quote(yahoo_quote, &currency) {
                        Ok(quote) => {
                            by_date.insert(quote.date, quote);
                        }
                        Err(e) => {
                            warn!("Skipping quote due to conversion error: {:?}", e);
                        }
                    }
                }

                if by_date.is_empty() {
                    return Err(MarketDataError::NoDataForRange);
                }

                Ok(by_date.into_values().collect())
            }
            Err(yahoo::YahooError::NoQuotes) => {
                warn!(
                    "No daily quotes returned for '{}' between {} and {}",
                    symbol, start, end
                );
                Err(MarketDataError::NoDataForRange)
            }
            Err(e) => Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
