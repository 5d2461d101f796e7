//! Coinfolio Market Data Crate
//!
//! This crate is the price series store for the Coinfolio dashboard: it
//! fetches daily closing prices from a provider and aligns them into a
//! table the analytics crate can compute over.
//!
//! # Overview
//!
//! - [`Quote`] - one daily close from a provider
//! - [`PriceSeries`] - ordered close history for one asset, with explicit
//!   missing cells
//! - [`PriceTable`] - series outer-joined on a shared date index under a
//!   [`MissingDataPolicy`]
//! - [`MarketDataProvider`] - the provider trait, implemented by
//!   [`YahooProvider`]
//! - [`PriceStore`] - the fetch boundary, with a TTL cache keyed by
//!   (symbol set, date range)
//!
//! The store performs the only I/O in the workspace; everything it
//! returns is immutable data.

pub mod errors;
pub mod models;
pub mod provider;
pub mod store;

// Re-export the public surface
pub use errors::MarketDataError;
pub use models::{MissingDataPolicy, PricePoint, PriceSeries, PriceTable, Quote};
pub use provider::{MarketDataProvider, YahooProvider};
pub use store::{PriceCache, PriceStore, DEFAULT_CACHE_TTL};
