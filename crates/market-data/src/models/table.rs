use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::series::{PricePoint, PriceSeries};

/// How missing cells are treated when series are aligned into a table.
///
/// The outer join always produces explicit `None` cells first; the policy
/// decides what happens to them afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingDataPolicy {
    /// Keep missing cells explicit; downstream computations skip them.
    #[default]
    Propagate,

    /// Fill a missing cell with the last observed close of the same column.
    /// Leading gaps (before the first observation) stay missing.
    ForwardFill,

    /// Keep only index rows where every column has a close.
    Drop,
}

/// One aligned column of a [`PriceTable`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceColumn {
    /// Currency the closes are quoted in
    pub currency: String,

    /// Closes aligned to the table's date index; always index length
    closes: Vec<Option<Decimal>>,
}

/// A set of price series outer-joined on a shared ordered date index.
///
/// Invariant: every column has exactly as many cells as the index has
/// dates. Missing values are explicit `None` cells, never silently
/// dropped (unless the table was built with [`MissingDataPolicy::Drop`],
/// which removes whole index rows, keeping the invariant).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    index: Vec<NaiveDate>,
    columns: BTreeMap<String, PriceColumn>,
}

impl PriceTable {
    /// A table with no dates and no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Outer-join series into an aligned table under the given policy.
    ///
    /// Every input series contributes a column, including empty series
    /// (which become all-missing columns over the joined index). Series
    /// symbols are expected unique; a duplicate symbol replaces the
    /// earlier column.
    pub fn from_series(series: Vec<PriceSeries>, policy: MissingDataPolicy) -> Self {
        let index: Vec<NaiveDate> = series
            .iter()
            .flat_map(|s| s.dates())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut columns = BTreeMap::new();
        for s in series {
            let by_date: BTreeMap<NaiveDate, Option<Decimal>> =
                s.points().iter().map(|p| (p.date, p.close)).collect();
            let closes: Vec<Option<Decimal>> = index
                .iter()
                .map(|d| by_date.get(d).copied().flatten())
                .collect();
            columns.insert(
                s.symbol.clone(),
                PriceColumn {
                    currency: s.currency.clone(),
                    closes,
                },
            );
        }

        let mut table = Self { index, columns };
        match policy {
            MissingDataPolicy::Propagate => {}
            MissingDataPolicy::ForwardFill => table.forward_fill(),
            MissingDataPolicy::Drop => table.drop_incomplete_rows(),
        }
        table
    }

    fn forward_fill(&mut self) {
        for column in self.columns.values_mut() {
            let mut last_seen: Option<Decimal> = None;
            for cell in column.closes.iter_mut() {
                match *cell {
                    Some(close) => last_seen = Some(close),
                    None => *cell = last_seen,
                }
            }
        }
    }

    fn drop_incomplete_rows(&mut self) {
        let keep: Vec<bool> = (0..self.index.len())
            .map(|row| self.columns.values().all(|c| c.closes[row].is_some()))
            .collect();

        let mut keep_dates = keep.iter().copied();
        self.index.retain(|_| keep_dates.next().unwrap_or(false));
        for column in self.columns.values_mut() {
            let mut keep_cells = keep.iter().copied();
            column.closes.retain(|_| keep_cells.next().unwrap_or(false));
        }
    }

    /// The shared ordered date index.
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// Symbols with a column in this table, in sorted order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// The aligned close column for a symbol.
    pub fn column(&self, symbol: &str) -> Option<&[Option<Decimal>]> {
        self.columns.get(symbol).map(|c| c.closes.as_slice())
    }

    /// Rebuild the standalone series for one column.
    pub fn series(&self, symbol: &str) -> Option<PriceSeries> {
        let column = self.columns.get(symbol)?;
        let points = self
            .index
            .iter()
            .zip(&column.closes)
            .map(|(date, close)| PricePoint::new(*date, *close))
            .collect();
        // Cells inherit the index ordering, so the constructor cannot fail.
        PriceSeries::new(symbol.to_string(), column.currency.clone(), points).ok()
    }

    /// Number of index rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when the table holds no dates at all.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
