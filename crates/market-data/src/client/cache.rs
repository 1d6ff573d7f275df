//! In-memory TTL cache for rate snapshots.
//!
//! Entries are keyed by base currency plus the sorted, de-duplicated list of
//! requested symbols. There is no size bound: an entry leaves the cache when
//! a read finds it stale, or when the whole cache is cleared.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use chrono::Utc;
use tokio::time::Instant;

use crate::models::{CurrencyCode, RateSnapshot};

/// Sentinel used in the key when every currency was requested.
const ALL_SYMBOLS: &str = "all";

/// Deterministic cache key for a `(base, symbols)` request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    base: CurrencyCode,
    symbols: Option<Vec<CurrencyCode>>,
}

impl CacheKey {
    /// Build a key. `None` and an empty slice both mean "all symbols".
    pub fn new(base: &CurrencyCode, symbols: Option<&[CurrencyCode]>) -> Self {
        let symbols = symbols.filter(|s| !s.is_empty()).map(|s| {
            let mut sorted = s.to_vec();
            sorted.sort();
            sorted.dedup();
            sorted
        });
        Self {
            base: base.clone(),
            symbols,
        }
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn symbols(&self) -> Option<&[CurrencyCode]> {
        self.symbols.as_deref()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbols {
            Some(symbols) => {
                let joined: Vec<&str> = symbols.iter().map(CurrencyCode::as_str).collect();
                write!(f, "{}-{}", self.base, joined.join(","))
            }
            None => write!(f, "{}-{}", self.base, ALL_SYMBOLS),
        }
    }
}

/// A cached snapshot and when it was stored.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub snapshot: RateSnapshot,
    pub stored_at_epoch_ms: i64,
    stored_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

/// Snapshot cache with read-time TTL expiry.
#[derive(Debug)]
pub struct RateCache {
    entries: HashMap<CacheKey, CacheEntry>,
    ttl: Duration,
}

impl RateCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Return a clone of the entry if it is younger than the TTL.
    /// A stale entry is dropped.
    pub fn get(&mut self, key: &CacheKey) -> Option<CacheEntry> {
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh(self.ttl) => Some(entry.clone()),
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&mut self, key: CacheKey, snapshot: RateSnapshot) {
        self.entries.insert(
            key,
            CacheEntry {
                snapshot,
                stored_at_epoch_ms: Utc::now().timestamp_millis(),
                stored_at: Instant::now(),
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::parse(s).unwrap()
    }

    fn snapshot(rate: f64) -> RateSnapshot {
        RateSnapshot {
            success: true,
            retrieved_at_epoch_ms: 0,
            base_currency: code("USD"),
            as_of_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            rates: BTreeMap::from([("EUR".to_string(), rate)]),
        }
    }

    #[test]
    fn test_key_display() {
        let usd = code("USD");
        assert_eq!(CacheKey::new(&usd, None).to_string(), "USD-all");
        assert_eq!(CacheKey::new(&usd, Some(&[])).to_string(), "USD-all");
        assert_eq!(
            CacheKey::new(&usd, Some(&[code("GBP"), code("EUR"), code("GBP")])).to_string(),
            "USD-EUR,GBP"
        );
    }

    #[test]
    fn test_empty_symbols_share_the_all_key() {
        let usd = code("USD");
        assert_eq!(CacheKey::new(&usd, None), CacheKey::new(&usd, Some(&[])));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let mut cache = RateCache::new(Duration::from_secs(300));
        let key = CacheKey::new(&code("USD"), None);
        cache.insert(key.clone(), snapshot(0.9));

        tokio::time::advance(Duration::from_secs(299)).await;
        let entry = cache.get(&key).unwrap();
        assert_eq!(entry.snapshot, snapshot(0.9));
        assert!(entry.stored_at_epoch_ms > 0);

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_is_idempotent() {
        let mut cache = RateCache::new(Duration::from_secs(300));
        cache.insert(CacheKey::new(&code("USD"), None), snapshot(0.9));
        cache.insert(CacheKey::new(&code("EUR"), None), snapshot(1.1));
        assert_eq!(cache.len(), 2);

        cache.clear();
        cache.clear();
        assert_eq!(cache.len(), 0);
    }

    fn code_strategy() -> impl Strategy<Value = CurrencyCode> {
        "[A-Z]{3}".prop_map(|s| CurrencyCode::parse(&s).unwrap())
    }

    proptest! {
        #[test]
        fn prop_key_ignores_symbol_order(
            base in code_strategy(),
            symbols in prop::collection::vec(code_strategy(), 1..6),
        ) {
            let mut reversed = symbols.clone();
            reversed.reverse();
            let a = CacheKey::new(&base, Some(&symbols));
            let b = CacheKey::new(&base, Some(&reversed));
            prop_assert_eq!(a.to_string(), b.to_string());
            prop_assert_eq!(a, b);
        }
    }
}
