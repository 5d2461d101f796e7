//! The Price Series Store: cache plus provider-backed fetching.

mod cache;
mod price_store;

pub use cache::{FetchKey, PriceCache, DEFAULT_CACHE_TTL};
pub use price_store::PriceStore;
