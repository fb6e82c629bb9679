//! Time-to-live cache for upstream API responses.
//!
//! The weather provider is rate limited, so every transformed response is
//! held for a fixed TTL and reused. Eviction is lazy: an expired entry is
//! removed by the read that discovers it, and `stats` sweeps the whole map
//! first so the reported size never counts stale entries. There is no
//! background sweeper and no capacity bound; each cache instance holds a
//! couple of well-known keys.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

/// A cached value together with the instant it stops being valid.
struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

/// Snapshot of a cache instance, as reported by [`TtlCache::stats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Number of live (non-expired) entries.
    pub size: usize,

    /// The TTL this cache applies to every entry, in minutes.
    pub ttl_minutes: u64,
}

/// Generic string-keyed cache with one fixed TTL for all entries.
///
/// An entry is visible while `now <= expires_at` and treated as absent
/// afterwards. All operations lock only around the map access, so callers
/// are free to perform slow upstream fetches between a miss and the
/// subsequent [`set`](TtlCache::set) without blocking other readers.
///
/// # Examples
///
/// ```
/// use kiosk_server::cache::TtlCache;
///
/// let cache: TtlCache<String> = TtlCache::new(15);
/// cache.set("current_weather", "cached".to_string());
///
/// assert_eq!(cache.get("current_weather").as_deref(), Some("cached"));
/// assert!(cache.has("current_weather"));
/// assert_eq!(cache.stats().size, 1);
/// ```
pub struct TtlCache<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
    ttl: Duration,
}

impl<T> TtlCache<T> {
    /// Create a cache whose entries live for `ttl_minutes`.
    pub fn new(ttl_minutes: u64) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: Duration::from_secs(ttl_minutes * 60),
        }
    }

    /// Get a value, if present and not expired.
    ///
    /// An expired entry is removed as a side effect.
    pub fn get(&self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if Instant::now() <= entry.expires_at => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a value under `key`, replacing any previous entry and
    /// restarting its TTL.
    pub fn set(&self, key: impl Into<String>, value: T) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.lock().insert(key.into(), entry);
    }

    /// Whether `key` holds a live entry.
    ///
    /// Like [`get`](TtlCache::get), removes the entry if it has expired.
    pub fn has(&self, key: &str) -> bool {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if Instant::now() <= entry.expires_at => true,
            Some(_) => {
                entries.remove(key);
                false
            }
            None => false,
        }
    }

    /// Remove `key`, returning whether an entry (live or expired) was there.
    pub fn delete(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Report the live entry count and the configured TTL.
    ///
    /// Sweeps every expired entry first, so `size` is exact at the moment
    /// of the call.
    pub fn stats(&self) -> CacheStats {
        let mut entries = self.lock();
        let now = Instant::now();
        entries.retain(|_, entry| now <= entry.expires_at);

        CacheStats {
            size: entries.len(),
            ttl_minutes: self.ttl.as_secs() / 60,
        }
    }

    /// Cache operations never fail: recover the map from a poisoned lock.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<T>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
