//! Risk metrics: volatility, Sharpe ratio, and maximum drawdown.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::returns::daily_returns;

/// Trading days per year, used for annualization throughout.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

const SQRT_TRADING_DAYS_APPROX: Decimal = dec!(15.874507866); // sqrt(252)

/// Annualized volatility: sample standard deviation of the daily returns
/// times sqrt(252). Fractional, not a percentage.
///
/// `None` when fewer than two daily returns can be computed.
pub fn volatility(closes: &[Option<Decimal>]) -> Option<Decimal> {
    let returns = daily_returns(closes);
    sample_std_dev(&returns).map(|sd| sd * annualization_factor())
}

/// Annualized Sharpe ratio over the column's daily returns.
///
/// Uses the sample standard deviation (n - 1 divisor) and a daily
/// risk-free rate of `risk_free_annual / 252`, annualized by sqrt(252).
/// `None` when fewer than two returns exist or the standard deviation is
/// zero - a flat series has no defined Sharpe ratio, and infinity never
/// reaches the caller.
pub fn sharpe_ratio(closes: &[Option<Decimal>], risk_free_annual: Decimal) -> Option<Decimal> {
    let returns = daily_returns(closes);
    let sd = sample_std_dev(&returns)?;
    if sd.is_zero() {
        return None;
    }
    let mean = mean(&returns)?;
    let daily_risk_free = risk_free_annual / Decimal::from(TRADING_DAYS_PER_YEAR);
    Some((mean - daily_risk_free) / sd * annualization_factor())
}

/// Maximum drawdown: the worst percentage decline from a running peak,
/// `min over t of (close(t) / peak(t) - 1) * 100`. Always <= 0, and
/// exactly 0 for a non-decreasing series.
///
/// Missing cells are skipped; `None` when the column has no close at all.
pub fn max_drawdown(closes: &[Option<Decimal>]) -> Option<Decimal> {
    let mut peak: Option<Decimal> = None;
    let mut worst: Option<Decimal> = None;

    for close in closes.iter().copied().flatten() {
        let current_peak = match peak {
            Some(p) => p.max(close),
            None => close,
        };
        peak = Some(current_peak);
        if current_peak.is_zero() {
            // Prices are non-negative, so a zero peak means every close so
            // far was zero; no drawdown is defined yet.
            continue;
        }
        let drawdown = close / current_peak - Decimal::ONE;
        worst = Some(match worst {
            Some(w) => w.min(drawdown),
            None => drawdown,
        });
    }

    worst.map(|w| w * Decimal::ONE_HUNDRED)
}

fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum: Decimal = values.iter().sum();
    Some(sum / Decimal::from(values.len() as u64))
}

fn sample_std_dev(values: &[Decimal]) -> Option<Decimal> {
    if values.len() < 2 {
        return None;
    }
    let count = Decimal::from(values.len() as u64);
    let mean = mean(values)?;

    let sum_squared_diff: Decimal = values
        .iter()
        .map(|&r| {
            let diff = r - mean;
            diff * diff
        })
        .sum();

    let variance = sum_squared_diff / (count - Decimal::ONE);
    if variance.is_sign_negative() {
        return Some(Decimal::ZERO);
    }
    Some(variance.sqrt().unwrap_or(Decimal::ZERO))
}

fn annualization_factor() -> Decimal {
    Decimal::from(TRADING_DAYS_PER_YEAR)
        .sqrt()
        .unwrap_or(SQRT_TRADING_DAYS_APPROX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn col(values: &[i64]) -> Vec<Option<Decimal>> {
        values.iter().map(|v| Some(Decimal::from(*v))).collect()
    }

    #[test]
    fn test_sharpe_ratio_unavailable_for_flat_series() {
        assert_eq!(sharpe_ratio(&col(&[50, 50, 50]), Decimal::ZERO), None);
    }

    #[test]
    fn test_sharpe_ratio_unavailable_for_single_point() {
        assert_eq!(sharpe_ratio(&col(&[50]), Decimal::ZERO), None);
    }

    #[test]
    fn test_sharpe_ratio_zero_for_mean_zero_returns() {
        // 100 -> 110 -> 99 gives returns +0.1, -0.1 with mean zero.
        let closes = col(&[100, 110, 99]);
        assert_eq!(sharpe_ratio(&closes, Decimal::ZERO), Some(Decimal::ZERO));
    }

    #[test]
    fn test_sharpe_ratio_positive_for_rising_series() {
        let closes = col(&[100, 102, 103, 106, 108]);
        let sharpe = sharpe_ratio(&closes, Decimal::ZERO).unwrap();
        assert!(sharpe > Decimal::ZERO);
    }

    #[test]
    fn test_sharpe_ratio_shrinks_with_risk_free_rate() {
        let closes = col(&[100, 102, 103, 106, 108]);
        let without = sharpe_ratio(&closes, Decimal::ZERO).unwrap();
        let with = sharpe_ratio(&closes, dec!(0.05)).unwrap();
        assert!(with < without);
    }

    #[test]
    fn test_volatility_zero_for_flat_series() {
        assert_eq!(volatility(&col(&[50, 50, 50])), Some(Decimal::ZERO));
    }

    #[test]
    fn test_volatility_unavailable_without_enough_returns() {
        assert_eq!(volatility(&col(&[50])), None);
        assert_eq!(volatility(&[]), None);
    }

    #[test]
    fn test_max_drawdown_of_example_series() {
        let closes = col(&[100, 110, 99, 120]);
        assert_eq!(max_drawdown(&closes), Some(dec!(-10)));
    }

    #[test]
    fn test_max_drawdown_zero_for_non_decreasing_series() {
        assert_eq!(max_drawdown(&col(&[50, 50, 50])), Some(Decimal::ZERO));
        assert_eq!(max_drawdown(&col(&[100, 110, 120])), Some(Decimal::ZERO));
    }

    #[test]
    fn test_max_drawdown_unavailable_for_all_missing_column() {
        assert_eq!(max_drawdown(&[None, None]), None);
        assert_eq!(max_drawdown(&[]), None);
    }

    #[test]
    fn test_max_drawdown_skips_missing_cells() {
        let closes = vec![Some(dec!(100)), None, Some(dec!(80))];
        assert_eq!(max_drawdown(&closes), Some(dec!(-20)));
    }
}
