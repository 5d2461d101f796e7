//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// The [`is_data_unavailable`](Self::is_data_unavailable) method tells the
/// price store whether an error means "this symbol simply has no data"
/// (degrade to an explicit missing column) or something genuinely failed
/// (propagate to the caller).
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// No data available for the requested date range.
    /// The symbol exists but has no quotes in the specified period.
    #[error("No data for date range")]
    NoDataForRange,

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// Data validation failed.
    /// Covers malformed requests (empty symbol set, inverted date range)
    /// and malformed data (unordered series, unconvertible prices).
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns true when the error means the requested data does not exist,
    /// as opposed to a failure while fetching it.
    ///
    /// The price store turns data-unavailable errors into all-missing
    /// columns so one unknown symbol cannot fail a whole refresh; every
    /// other error is surfaced to the caller.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_) | Self::NoDataForRange)
    }
}
