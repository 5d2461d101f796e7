use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One asset's share of the total invested amount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub symbol: String,

    /// Amount invested in this asset
    pub invested: Decimal,

    /// Share of total invested, in [0, 1]
    pub fraction: Decimal,

    /// Share of total invested as a percentage
    pub percent: Decimal,
}
