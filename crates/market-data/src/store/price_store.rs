//! The Price Series Store: cached, provider-backed price table fetching.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{MissingDataPolicy, PriceSeries, PriceTable};
use crate::provider::MarketDataProvider;

use super::cache::{FetchKey, PriceCache, DEFAULT_CACHE_TTL};

/// Fetches aligned price tables from a provider, with a session-scoped
/// TTL cache in front.
///
/// One refresh means one blocking `fetch_prices` call; symbols within a
/// request are fetched sequentially. A symbol the provider has no data
/// for becomes an explicit all-missing column rather than being dropped,
/// so the caller always gets a column per requested symbol. Transport
/// and provider failures propagate as errors.
pub struct PriceStore {
    provider: Arc<dyn MarketDataProvider>,
    cache: PriceCache,
    policy: MissingDataPolicy,
}

impl PriceStore {
    /// Create a store with the default cache TTL and missing-data policy.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_options(provider, DEFAULT_CACHE_TTL, MissingDataPolicy::default())
    }

    /// Create a store with an explicit cache TTL and missing-data policy.
    pub fn with_options(
        provider: Arc<dyn MarketDataProvider>,
        cache_ttl: Duration,
        policy: MissingDataPolicy,
    ) -> Self {
        Self {
            provider,
            cache: PriceCache::new(cache_ttl),
            policy,
        }
    }

    /// Fetch an aligned closing-price table for the requested symbols and
    /// date range (both endpoints inclusive).
    pub async fn fetch_prices(
        &self,
        symbols: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceTable, MarketDataError> {
        if symbols.is_empty() {
            return Err(MarketDataError::ValidationFailed {
                message: "No symbols requested".to_string(),
            });
        }
        if start > end {
            return Err(MarketDataError::ValidationFailed {
                message: format!("Start date {} is after end date {}", start, end),
            });
        }

        let key = FetchKey::new(symbols, start, end);
        if let Some(table) = self.cache.get(&key) {
            debug!("Price cache hit for {} symbols", symbols.len());
            return Ok(table);
        }

        let mut unique_symbols = symbols.to_vec();
        unique_symbols.sort();
        unique_symbols.dedup();

        let mut series = Vec::with_capacity(unique_symbols.len());
        for symbol in &unique_symbols {
            series.push(self.fetch_series(symbol, start, end).await?);
        }

        let table = PriceTable::from_series(series, self.policy);
        self.cache.insert(key, table.clone());
        Ok(table)
    }

    /// Fetch one symbol's series, degrading data-unavailable errors to an
    /// empty series (an all-missing column after the join).
    async fn fetch_series(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, MarketDataError> {
        match self.provider.fetch_daily_quotes(symbol, start, end).await {
            Ok(quotes) => PriceSeries::from_quotes(symbol.to_string(), &quotes),
            Err(e) if e.is_data_unavailable() => {
                warn!(
                    "No data for '{}' between {} and {} from {}: {}",
                    symbol,
                    start,
                    end,
                    self.provider.id(),
                    e
                );
                Ok(PriceSeries::empty(symbol.to_string()))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quote;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    // --- Mock provider ---
    #[derive(Default)]
    struct MockProvider {
        quotes: HashMap<String, Vec<Quote>>,
        failures: HashMap<String, &'static str>,
        calls: AtomicUsize,
    }

    impl MockProvider {
        fn with_quotes(mut self, symbol: &str, cells: &[(u32, Decimal)]) -> Self {
            let quotes = cells
                .iter()
                .map(|(day, close)| {
                    Quote::new(date(*day), *close, "USD".to_string(), "MOCK".to_string())
                })
                .collect();
            self.quotes.insert(symbol.to_string(), quotes);
            self
        }

        fn with_failure(mut self, symbol: &str, kind: &'static str) -> Self {
            self.failures.insert(symbol.to_string(), kind);
            self
        }
    }

    #[async_trait]
    impl MarketDataProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn fetch_daily_quotes(
            &self,
            symbol: &str,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<Quote>, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.failures.get(symbol) {
                Some(&"not_found") => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
                Some(&"no_data") => Err(MarketDataError::NoDataForRange),
                Some(_) => Err(MarketDataError::ProviderError {
                    provider: "MOCK".to_string(),
                    message: "boom".to_string(),
                }),
                None => Ok(self.quotes.get(symbol).cloned().unwrap_or_default()),
            }
        }
    }

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_fetch_aligns_requested_symbols() {
        let provider = MockProvider::default()
            .with_quotes("BTC-USD", &[(1, dec!(100)), (2, dec!(110))])
            .with_quotes("ETH-USD", &[(2, dec!(10)), (3, dec!(12))]);
        let store = PriceStore::new(Arc::new(provider));

        let table = store
            .fetch_prices(&symbols(&["BTC-USD", "ETH-USD"]), date(1), date(31))
            .await
            .unwrap();

        assert_eq!(table.index(), &[date(1), date(2), date(3)]);
        assert_eq!(
            table.column("BTC-USD").unwrap(),
            &[Some(dec!(100)), Some(dec!(110)), None]
        );
    }

    #[tokio::test]
    async fn test_unknown_symbol_becomes_missing_column() {
        let provider = MockProvider::default()
            .with_quotes("BTC-USD", &[(1, dec!(100)), (2, dec!(110))])
            .with_failure("NOPE-USD", "not_found");
        let store = PriceStore::new(Arc::new(provider));

        let table = store
            .fetch_prices(&symbols(&["BTC-USD", "NOPE-USD"]), date(1), date(31))
            .await
            .unwrap();

        assert_eq!(table.column("NOPE-USD").unwrap(), &[None, None]);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let provider = MockProvider::default()
            .with_quotes("BTC-USD", &[(1, dec!(100))])
            .with_failure("ETH-USD", "provider");
        let store = PriceStore::new(Arc::new(provider));

        let result = store
            .fetch_prices(&symbols(&["BTC-USD", "ETH-USD"]), date(1), date(31))
            .await;

        assert!(matches!(result, Err(MarketDataError::ProviderError { .. })));
    }

    #[tokio::test]
    async fn test_repeat_fetch_is_served_from_cache() {
        let provider = Arc::new(MockProvider::default().with_quotes("BTC-USD", &[(1, dec!(100))]));
        let store = PriceStore::new(provider.clone());

        let first = store
            .fetch_prices(&symbols(&["BTC-USD"]), date(1), date(31))
            .await
            .unwrap();
        let second = store
            .fetch_prices(&symbols(&["BTC-USD"]), date(1), date(31))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_symbol_set_is_rejected() {
        let provider = MockProvider::default();
        let store = PriceStore::new(Arc::new(provider));

        let result = store.fetch_prices(&[], date(1), date(31)).await;
        assert!(matches!(
            result,
            Err(MarketDataError::ValidationFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_inverted_range_is_rejected() {
        let provider = MockProvider::default();
        let store = PriceStore::new(Arc::new(provider));

        let result = store
            .fetch_prices(&symbols(&["BTC-USD"]), date(31), date(1))
            .await;
        assert!(matches!(
            result,
            Err(MarketDataError::ValidationFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_all_symbols_without_data_yield_empty_table() {
        let provider = MockProvider::default().with_failure("XRP-USD", "no_data");
        let store = PriceStore::new(Arc::new(provider));

        let table = store
            .fetch_prices(&symbols(&["XRP-USD"]), date(1), date(31))
            .await
            .unwrap();

        assert!(table.is_empty());
        assert!(table.column("XRP-USD").unwrap().is_empty());
    }
}
