//! Coinfolio Core - portfolio analytics for the crypto dashboard.
//!
//! This crate holds the metrics engine and the portfolio domain:
//! pure return/risk computations over price columns, allocation and
//! valuation of user-entered holdings, and the per-asset performance
//! view models the presentation layer renders. Price data comes from
//! the `coinfolio-market-data` crate; nothing here performs I/O.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod metrics;
pub mod portfolio;

// Re-export common types from the portfolio modules
pub use portfolio::allocation::*;
pub use portfolio::holdings::*;
pub use portfolio::performance::*;
pub use portfolio::valuation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
