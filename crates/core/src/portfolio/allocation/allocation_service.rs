//! Computes per-asset allocation fractions from funded holdings.

use log::debug;
use rust_decimal::Decimal;

use crate::errors::{CalculatorError, Error, Result, ValidationError};
use crate::portfolio::holdings::Holding;

use super::AssetAllocation;

/// Fraction of the total invested amount per funded holding.
///
/// Holdings with `invested == 0` are filtered out, so they never appear
/// in the result. Errors with [`CalculatorError::InvalidPortfolio`] when
/// the funded total is zero - callers are expected to guard before
/// invoking - and with a validation error on negative amounts, which
/// violate the holding invariant.
pub fn allocation_fractions(holdings: &[Holding]) -> Result<Vec<AssetAllocation>> {
    if let Some(bad) = holdings.iter().find(|h| h.invested.is_sign_negative()) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Negative invested amount for '{}'",
            bad.symbol
        ))));
    }

    let funded: Vec<&Holding> = holdings.iter().filter(|h| h.is_funded()).collect();
    let total: Decimal = funded.iter().map(|h| h.invested).sum();
    if total.is_zero() {
        return Err(Error::Calculation(CalculatorError::InvalidPortfolio(
            "Total invested amount is zero".to_string(),
        )));
    }

    debug!("Computing allocations for {} funded holdings", funded.len());

    Ok(funded
        .into_iter()
        .map(|h| {
            let fraction = h.invested / total;
            AssetAllocation {
                symbol: h.symbol.clone(),
                invested: h.invested,
                fraction,
                percent: fraction * Decimal::ONE_HUNDRED,
            }
        })
        .collect())
}
