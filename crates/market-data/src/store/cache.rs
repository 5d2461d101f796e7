//! TTL cache for fetched price tables.
//!
//! Keyed by the exact shape of a fetch request (symbol set plus date
//! range). Entries expire after the configured time-to-live; expired
//! entries are dropped on lookup and swept on insert.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use dashmap::DashMap;

use crate::models::PriceTable;

/// Default time-to-live for cached price tables.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// Cache key: a normalized fetch request.
///
/// Symbols are sorted and deduplicated so request order does not matter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FetchKey {
    symbols: Vec<String>,
    start: NaiveDate,
    end: NaiveDate,
}

impl FetchKey {
    pub fn new(symbols: &[String], start: NaiveDate, end: NaiveDate) -> Self {
        let mut symbols = symbols.to_vec();
        symbols.sort();
        symbols.dedup();
        Self {
            symbols,
            start,
            end,
        }
    }
}

struct CachedTable {
    table: PriceTable,
    fetched_at: Instant,
}

/// In-memory, session-scoped price table cache with TTL eviction.
pub struct PriceCache {
    entries: DashMap<FetchKey, CachedTable>,
    ttl: Duration,
}

impl PriceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Look up a fresh table for the request; expired entries are removed.
    pub fn get(&self, key: &FetchKey) -> Option<PriceTable> {
        let expired = match self.entries.get(key) {
            Some(entry) => {
                if entry.fetched_at.elapsed() < self.ttl {
                    return Some(entry.table.clone());
                }
                true
            }
            None => false,
        };
        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Store a freshly fetched table, sweeping out expired entries.
    pub fn insert(&self, key: FetchKey, table: PriceTable) {
        let ttl = self.ttl;
        self.entries.retain(|_, v| v.fetched_at.elapsed() < ttl);
        self.entries.insert(
            key,
            CachedTable {
                table,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
