//! Per-asset performance cards computed from a fetched price table.

use log::debug;
use rust_decimal::Decimal;

use coinfolio_market_data::PriceTable;

use crate::constants::DECIMAL_PRECISION;
use crate::metrics::{
    growth_multiple, max_drawdown, percentage_return, sharpe_ratio, volatility,
};

use super::AssetPerformance;

/// Compute the performance card for one symbol of the table.
///
/// Returns `None` only when the table has no column for the symbol;
/// degenerate price data yields a card full of `None` fields instead.
pub fn asset_performance(
    table: &PriceTable,
    symbol: &str,
    risk_free_annual: Decimal,
) -> Option<AssetPerformance> {
    let closes = table.column(symbol)?;
    let round = |value: Option<Decimal>| value.map(|v| v.round_dp(DECIMAL_PRECISION));

    Some(AssetPerformance {
        symbol: symbol.to_string(),
        period_start_date: table.index().first().copied(),
        period_end_date: table.index().last().copied(),
        last_close: closes.last().copied().flatten(),
        growth_multiple: round(growth_multiple(closes)),
        percentage_return: round(percentage_return(closes)),
        volatility: round(volatility(closes)),
        sharpe_ratio: round(sharpe_ratio(closes, risk_free_annual)),
        max_drawdown: round(max_drawdown(closes)),
    })
}

/// Compute performance cards for every column of the table.
pub fn table_performance(table: &PriceTable, risk_free_annual: Decimal) -> Vec<AssetPerformance> {
    let cards: Vec<AssetPerformance> = table
        .symbols()
        .filter_map(|symbol| asset_performance(table, symbol, risk_free_annual))
        .collect();
    debug!("Computed performance cards for {} symbols", cards.len());
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use coinfolio_market_data::{MissingDataPolicy, PricePoint, PriceSeries};
    use rust_decimal_macros::dec;

    fn series(symbol: &str, closes: &[Option<Decimal>]) -> PriceSeries {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, close)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap();
                PricePoint::new(date, *close)
            })
            .collect();
        PriceSeries::new(symbol.to_string(), "USD".to_string(), points).unwrap()
    }

    fn table(series_list: Vec<PriceSeries>) -> PriceTable {
        PriceTable::from_series(series_list, MissingDataPolicy::Propagate)
    }

    #[test]
    fn test_card_carries_period_and_metrics() {
        let t = table(vec![series(
            "BTC-USD",
            &[Some(dec!(100)), Some(dec!(110)), Some(dec!(99)), Some(dec!(120))],
        )]);

        let card = asset_performance(&t, "BTC-USD", Decimal::ZERO).unwrap();
        assert_eq!(
            card.period_start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(card.period_end_date, NaiveDate::from_ymd_opt(2024, 1, 4));
        assert_eq!(card.last_close, Some(dec!(120)));
        assert_eq!(card.growth_multiple, Some(dec!(1.2)));
        assert_eq!(card.percentage_return, Some(dec!(20)));
        assert_eq!(card.max_drawdown, Some(dec!(-10)));
        assert!(card.sharpe_ratio.is_some());
    }

    #[test]
    fn test_degenerate_column_yields_card_of_none() {
        let t = table(vec![series("XRP-USD", &[None, None])]);

        let card = asset_performance(&t, "XRP-USD", Decimal::ZERO).unwrap();
        assert_eq!(card.last_close, None);
        assert_eq!(card.growth_multiple, None);
        assert_eq!(card.percentage_return, None);
        assert_eq!(card.volatility, None);
        assert_eq!(card.sharpe_ratio, None);
        assert_eq!(card.max_drawdown, None);
    }

    #[test]
    fn test_unknown_symbol_has_no_card() {
        let t = table(vec![series("BTC-USD", &[Some(dec!(100))])]);
        assert!(asset_performance(&t, "ETH-USD", Decimal::ZERO).is_none());
    }

    #[test]
    fn test_table_performance_covers_every_column() {
        let t = table(vec![
            series("BTC-USD", &[Some(dec!(100)), Some(dec!(110))]),
            series("ETH-USD", &[Some(dec!(10)), Some(dec!(11))]),
        ]);

        let cards = table_performance(&t, Decimal::ZERO);
        assert_eq!(cards.len(), 2);
        let symbols: Vec<&str> = cards.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BTC-USD", "ETH-USD"]);
    }
}
