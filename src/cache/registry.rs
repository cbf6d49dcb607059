//! Namespace registry.
//!
//! Owns one cache instance per content namespace and provides the
//! cross-namespace operations the admin surface consumes.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::config::CacheConfig;
use super::keys::Namespace;
use super::store::TtlCache;

/// Owns the per-namespace cache instances.
///
/// Constructed once at startup and passed by handle to the request layer;
/// there is no process-global instance. Entries hold the JSON response
/// bodies the request layer replays on a hit.
pub struct CacheRegistry {
    news: TtlCache<Value>,
    events: TtlCache<Value>,
    stats: TtlCache<Value>,
    general: TtlCache<Value>,
}

impl CacheRegistry {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            news: TtlCache::new(
                Namespace::News.as_str(),
                config.default_ttl(Namespace::News),
            ),
            events: TtlCache::new(
                Namespace::Events.as_str(),
                config.default_ttl(Namespace::Events),
            ),
            stats: TtlCache::new(
                Namespace::Stats.as_str(),
                config.default_ttl(Namespace::Stats),
            ),
            general: TtlCache::new(
                Namespace::General.as_str(),
                config.default_ttl(Namespace::General),
            ),
        }
    }

    /// The cache instance backing a namespace.
    pub fn instance(&self, namespace: Namespace) -> &TtlCache<Value> {
        match namespace {
            Namespace::News => &self.news,
            Namespace::Events => &self.events,
            Namespace::Stats => &self.stats,
            Namespace::General => &self.general,
        }
    }

    /// Remove every key containing `pattern` from every namespace.
    /// Returns the total number of entries removed.
    pub fn invalidate(&self, pattern: &str) -> usize {
        let mut removed = 0;
        for namespace in Namespace::all() {
            removed += self.instance(*namespace).remove_matching(pattern);
        }
        if removed > 0 {
            info!(pattern, removed, "invalidated cache entries across namespaces");
        }
        removed
    }

    /// Clear every namespace.
    pub fn clear_all(&self) {
        for namespace in Namespace::all() {
            self.instance(*namespace).clear();
        }
    }

    /// Entry counts per namespace plus the total.
    ///
    /// Uses the same accounting as [`TtlCache::len`]: expired entries
    /// that no access has purged yet are still counted.
    pub fn stats(&self) -> RegistryStats {
        let news = self.news.len();
        let events = self.events.len();
        let stats = self.stats.len();
        let general = self.general.len();
        RegistryStats {
            news,
            events,
            stats,
            general,
            total: news + events + stats + general,
        }
    }
}

/// Per-namespace entry counts, replayable as JSON by an admin endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub news: usize,
    pub events: usize,
    pub stats: usize,
    pub general: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn registry() -> CacheRegistry {
        CacheRegistry::new(&CacheConfig::default())
    }

    #[test]
    fn namespaces_are_isolated() {
        let registry = registry();

        registry
            .instance(Namespace::News)
            .set("/api/news", json!({"title": "Season opener"}));

        assert!(registry.instance(Namespace::News).has("/api/news"));
        assert!(!registry.instance(Namespace::Events).has("/api/news"));
        assert!(!registry.instance(Namespace::General).has("/api/news"));
    }

    #[test]
    fn invalidate_removes_matching_keys_everywhere() {
        let registry = registry();

        registry
            .instance(Namespace::News)
            .set("/api/news?tag=trials", json!(1));
        registry
            .instance(Namespace::Stats)
            .set("/api/stats/trials", json!(2));
        registry
            .instance(Namespace::Events)
            .set("/api/events?page=1", json!(3));

        assert_eq!(registry.invalidate("trials"), 2);

        assert!(!registry.instance(Namespace::News).has("/api/news?tag=trials"));
        assert!(!registry.instance(Namespace::Stats).has("/api/stats/trials"));
        assert!(registry.instance(Namespace::Events).has("/api/events?page=1"));
    }

    #[test]
    fn clear_all_empties_every_namespace() {
        let registry = registry();

        for namespace in Namespace::all() {
            registry.instance(*namespace).set("key", json!("value"));
        }
        registry.clear_all();

        assert_eq!(registry.stats().total, 0);
    }

    #[test]
    fn stats_counts_per_namespace() {
        let registry = registry();

        registry.instance(Namespace::News).set("a", json!(1));
        registry.instance(Namespace::News).set("b", json!(2));
        registry.instance(Namespace::Stats).set("c", json!(3));

        let stats = registry.stats();
        assert_eq!(stats.news, 2);
        assert_eq!(stats.events, 0);
        assert_eq!(stats.stats, 1);
        assert_eq!(stats.general, 0);
        assert_eq!(stats.total, 3);
    }

    #[test]
    fn stats_serialize_as_json() {
        let registry = registry();
        registry.instance(Namespace::General).set("k", json!(null));

        let serialized = serde_json::to_value(registry.stats()).expect("stats serialize");
        assert_eq!(serialized["general"], json!(1));
        assert_eq!(serialized["total"], json!(1));
    }
}
