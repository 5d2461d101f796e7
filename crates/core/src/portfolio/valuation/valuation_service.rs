//! Values holdings against fetched price series.

use log::warn;
use rust_decimal::Decimal;

use coinfolio_market_data::PriceTable;

use crate::constants::DECIMAL_PRECISION;
use crate::errors::{CalculatorError, Error, Result, ValidationError};
use crate::metrics::growth_multiple;
use crate::portfolio::holdings::Holding;

use super::{HoldingValuation, PortfolioValuation};

/// Value a portfolio of holdings against an aligned price table.
///
/// Each funded holding is scaled by its column's growth multiple:
/// `current = invested / first_close * last_close`. A holding whose
/// column is absent or cannot produce a growth multiple gets
/// `current_value: None`, and the portfolio totals degrade to `None`
/// with it. Zero-invested holdings are skipped entirely.
///
/// Errors with [`CalculatorError::InvalidPortfolio`] when the funded
/// total is zero, mirroring the allocation contract.
pub fn value_portfolio(holdings: &[Holding], table: &PriceTable) -> Result<PortfolioValuation> {
    if let Some(bad) = holdings.iter().find(|h| h.invested.is_sign_negative()) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Negative invested amount for '{}'",
            bad.symbol
        ))));
    }

    let funded: Vec<&Holding> = holdings.iter().filter(|h| h.is_funded()).collect();
    let total_invested: Decimal = funded.iter().map(|h| h.invested).sum();
    if total_invested.is_zero() {
        return Err(Error::Calculation(CalculatorError::InvalidPortfolio(
            "Total invested amount is zero".to_string(),
        )));
    }

    let valuations: Vec<HoldingValuation> = funded
        .into_iter()
        .map(|h| value_holding(h, table))
        .collect();

    // One unavailable holding makes every total unavailable.
    let current_value: Option<Decimal> = valuations
        .iter()
        .map(|v| v.current_value)
        .sum::<Option<Decimal>>()
        .map(|total| total.round_dp(DECIMAL_PRECISION));

    let absolute_return = current_value.map(|current| current - total_invested);
    let roi_percent = current_value.map(|current| {
        ((current / total_invested - Decimal::ONE) * Decimal::ONE_HUNDRED)
            .round_dp(DECIMAL_PRECISION)
    });

    Ok(PortfolioValuation {
        holdings: valuations,
        total_invested,
        current_value,
        absolute_return,
        roi_percent,
    })
}

fn value_holding(holding: &Holding, table: &PriceTable) -> HoldingValuation {
    let current_value = match table.column(&holding.symbol) {
        Some(closes) => growth_multiple(closes)
            .map(|multiple| (holding.invested * multiple).round_dp(DECIMAL_PRECISION)),
        None => {
            warn!(
                "No price column for symbol '{}'; holding cannot be valued",
                holding.symbol
            );
            None
        }
    };

    HoldingValuation {
        symbol: holding.symbol.clone(),
        invested: holding.invested,
        current_value,
    }
}
