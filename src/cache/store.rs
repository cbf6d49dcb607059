//! TTL cache storage.
//!
//! Each namespace owns one [`TtlCache`]. Entries carry an absolute expiry
//! deadline; an expired entry is purged by the access that observes it,
//! never by a background sweep.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use metrics::counter;
use tracing::debug;

use crate::infra::telemetry::{
    METRIC_CACHE_EXPIRED, METRIC_CACHE_HIT, METRIC_CACHE_INVALIDATED, METRIC_CACHE_MISS,
};

use super::lock::{read_guard, write_guard};

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> Entry<V> {
    fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Keyed store with per-entry expiry and lazy purge.
///
/// Operations never fail for normal inputs: a missing or expired key is
/// absence, not an error. Caching is a best-effort side channel for the
/// request layer.
pub struct TtlCache<V> {
    namespace: &'static str,
    default_ttl: Duration,
    entries: RwLock<HashMap<String, Entry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    /// Create an empty cache labeled with `namespace` in logs and metrics.
    pub fn new(namespace: &'static str, default_ttl: Duration) -> Self {
        Self {
            namespace,
            default_ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Store `value` under `key` with the instance default lifetime,
    /// replacing any existing entry.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Store `value` under `key` with an explicit lifetime, replacing any
    /// existing entry.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };
        write_guard(&self.entries, self.namespace, "set").insert(key.into(), entry);
    }

    /// Returns the stored value if present and unexpired.
    ///
    /// An expired entry is deleted before returning `None`.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let mut entries = write_guard(&self.entries, self.namespace, "get");
        match entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                counter!(METRIC_CACHE_HIT, "namespace" => self.namespace).increment(1);
                Some(entry.value.clone())
            }
            Some(_) => {
                entries.remove(key);
                counter!(METRIC_CACHE_EXPIRED, "namespace" => self.namespace).increment(1);
                counter!(METRIC_CACHE_MISS, "namespace" => self.namespace).increment(1);
                debug!(namespace = self.namespace, key, outcome = "expired", "cache miss");
                None
            }
            None => {
                counter!(METRIC_CACHE_MISS, "namespace" => self.namespace).increment(1);
                None
            }
        }
    }

    /// Returns true iff [`get`](Self::get) would return a value.
    ///
    /// Runs the same expiry check-and-purge as `get`, without cloning the
    /// value, so `has` followed by `get` agrees within a single turn.
    pub fn has(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut entries = write_guard(&self.entries, self.namespace, "has");
        match entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => true,
            Some(_) => {
                entries.remove(key);
                counter!(METRIC_CACHE_EXPIRED, "namespace" => self.namespace).increment(1);
                false
            }
            None => false,
        }
    }

    /// Remove the entry if present, expired or not. Returns whether an
    /// entry was removed.
    pub fn remove(&self, key: &str) -> bool {
        write_guard(&self.entries, self.namespace, "remove")
            .remove(key)
            .is_some()
    }

    /// Remove all entries of this instance.
    pub fn clear(&self) {
        write_guard(&self.entries, self.namespace, "clear").clear();
    }

    /// Count of stored entries, including expired ones no access has
    /// purged yet. A cheap count, not a live count of valid entries.
    pub fn len(&self) -> usize {
        read_guard(&self.entries, self.namespace, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every key containing `pattern`. Returns how many entries
    /// were removed.
    ///
    /// Linear scan over the owned key set; instances stay small (tens to
    /// low hundreds of entries), so no index is kept.
    pub fn remove_matching(&self, pattern: &str) -> usize {
        let mut entries = write_guard(&self.entries, self.namespace, "remove_matching");
        let matched: Vec<String> = entries
            .keys()
            .filter(|key| key.contains(pattern))
            .cloned()
            .collect();
        for key in &matched {
            entries.remove(key);
        }

        let removed = matched.len();
        if removed > 0 {
            counter!(METRIC_CACHE_INVALIDATED, "namespace" => self.namespace)
                .increment(removed as u64);
            debug!(
                namespace = self.namespace,
                pattern, removed, "invalidated cache entries"
            );
        }
        removed
    }
}
