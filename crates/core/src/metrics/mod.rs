//! Pure metric computations over price data.
//!
//! Every function here is deterministic, stateless, and side-effect
//! free. Degenerate input - an empty column, missing cells, zero
//! variance - yields `None` instead of an error or a NaN, so callers
//! can render "n/a" uniformly and no infinity ever leaks downstream.

mod correlation;
mod returns;
mod risk;

pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use returns::{aligned_daily_returns, daily_returns, growth_multiple, percentage_return};
pub use risk::{max_drawdown, sharpe_ratio, volatility, TRADING_DAYS_PER_YEAR};
