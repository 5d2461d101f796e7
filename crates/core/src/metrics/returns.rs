//! Simple return computations over an aligned close column.

use rust_decimal::Decimal;

/// Ratio of the last close to the first close.
///
/// `None` when the column is empty, either endpoint is missing, or the
/// first close is zero. This is a multiple ("2.5x"), not a percentage.
pub fn growth_multiple(closes: &[Option<Decimal>]) -> Option<Decimal> {
    let first = closes.first().copied().flatten()?;
    let last = closes.last().copied().flatten()?;
    if first.is_zero() {
        return None;
    }
    Some(last / first)
}

/// Percentage gain or loss over the column: `(last/first - 1) * 100`.
///
/// Same guards as [`growth_multiple`].
pub fn percentage_return(closes: &[Option<Decimal>]) -> Option<Decimal> {
    growth_multiple(closes).map(|multiple| (multiple - Decimal::ONE) * Decimal::ONE_HUNDRED)
}

/// Fractional change between consecutive cells, keeping positional
/// alignment: element `i` is the return from cell `i` to cell `i + 1`,
/// or `None` when either endpoint is missing or the earlier close is
/// zero. Always one element shorter than the input.
///
/// The correlation matrix needs this aligned form to pair returns of
/// different columns by date.
pub fn aligned_daily_returns(closes: &[Option<Decimal>]) -> Vec<Option<Decimal>> {
    closes
        .windows(2)
        .map(|pair| match (pair[0], pair[1]) {
            (Some(prev), Some(curr)) if !prev.is_zero() => Some(curr / prev - Decimal::ONE),
            _ => None,
        })
        .collect()
}

/// Fractional daily returns with incomputable pairs dropped entirely.
/// A pair with a missing endpoint contributes nothing - it is never
/// treated as a zero return.
pub fn daily_returns(closes: &[Option<Decimal>]) -> Vec<Decimal> {
    aligned_daily_returns(closes).into_iter().flatten().collect()
}
