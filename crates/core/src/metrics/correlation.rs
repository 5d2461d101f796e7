//! Pairwise Pearson correlation across the columns of a price table.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use coinfolio_market_data::PriceTable;

use super::returns::aligned_daily_returns;

/// Symmetric correlation matrix over a table's symbols.
///
/// Entries are `None` for pairs whose aligned daily returns are
/// degenerate: fewer than two jointly present rows, or zero variance on
/// either side. The diagonal is exactly 1 whenever the series has
/// nonzero variance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationMatrix {
    /// Symbols in row/column order
    pub symbols: Vec<String>,

    /// Row-major correlation entries in [-1, 1]
    pub matrix: Vec<Vec<Option<Decimal>>>,
}

impl CorrelationMatrix {
    /// Look up the correlation between two symbols.
    pub fn get(&self, a: &str, b: &str) -> Option<Decimal> {
        let i = self.symbols.iter().position(|s| s == a)?;
        let j = self.symbols.iter().position(|s| s == b)?;
        self.matrix[i][j]
    }
}

/// Compute the pairwise correlation matrix over a price table.
///
/// Returns of different columns are paired positionally on the table's
/// shared date index, restricted to rows where both returns exist.
/// Symmetry holds by construction: each off-diagonal pair is computed
/// once and mirrored.
pub fn correlation_matrix(table: &PriceTable) -> CorrelationMatrix {
    let symbols: Vec<String> = table.symbols().map(str::to_string).collect();
    let returns: Vec<Vec<Option<Decimal>>> = symbols
        .iter()
        .map(|s| aligned_daily_returns(table.column(s).unwrap_or(&[])))
        .collect();

    let n = symbols.len();
    let mut matrix = vec![vec![None; n]; n];
    for i in 0..n {
        // The diagonal is 1 by definition, but only where the series has
        // variance at all.
        matrix[i][i] = pearson(&returns[i], &returns[i]).map(|_| Decimal::ONE);
        for j in (i + 1)..n {
            let correlation = pearson(&returns[i], &returns[j]);
            matrix[i][j] = correlation;
            matrix[j][i] = correlation;
        }
    }

    CorrelationMatrix { symbols, matrix }
}

/// Pearson correlation over the jointly present rows of two aligned
/// return columns. `None` when fewer than two joint rows exist or either
/// side has zero variance.
fn pearson(x: &[Option<Decimal>], y: &[Option<Decimal>]) -> Option<Decimal> {
    let joint: Vec<(Decimal, Decimal)> = x.iter().zip(y).filter_map(|(a, b)| a.zip(*b)).collect();
    if joint.len() < 2 {
        return None;
    }

    let count = Decimal::from(joint.len() as u64);
    let mean_x = joint.iter().map(|(a, _)| *a).sum::<Decimal>() / count;
    let mean_y = joint.iter().map(|(_, b)| *b).sum::<Decimal>() / count;

    let mut covariance = Decimal::ZERO;
    let mut variance_x = Decimal::ZERO;
    let mut variance_y = Decimal::ZERO;
    for (a, b) in &joint {
        let dx = a - mean_x;
        let dy = b - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x.is_zero() || variance_y.is_zero() {
        return None;
    }
    let denominator = (variance_x * variance_y).sqrt()?;
    if denominator.is_zero() {
        return None;
    }
    Some(covariance / denominator)
}
