//! Cache configuration.
//!
//! Controls the per-namespace default lifetimes via `palestra.toml`.

use std::time::Duration;

use serde::Deserialize;

use super::keys::Namespace;

// Default values for cache configuration
const DEFAULT_NEWS_TTL_SECS: u64 = 300;
const DEFAULT_EVENTS_TTL_SECS: u64 = 600;
const DEFAULT_STATS_TTL_SECS: u64 = 900;
const DEFAULT_GENERAL_TTL_SECS: u64 = 300;

/// Cache configuration from `palestra.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Enable request-scoped read caching.
    pub enabled: bool,
    /// Default lifetime for news entries, in seconds.
    pub news_ttl_secs: u64,
    /// Default lifetime for event entries, in seconds.
    pub events_ttl_secs: u64,
    /// Default lifetime for statistics entries, in seconds.
    pub stats_ttl_secs: u64,
    /// Default lifetime for uncategorized entries, in seconds.
    pub general_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            news_ttl_secs: DEFAULT_NEWS_TTL_SECS,
            events_ttl_secs: DEFAULT_EVENTS_TTL_SECS,
            stats_ttl_secs: DEFAULT_STATS_TTL_SECS,
            general_ttl_secs: DEFAULT_GENERAL_TTL_SECS,
        }
    }
}

impl From<&crate::config::CacheSettings> for CacheConfig {
    fn from(settings: &crate::config::CacheSettings) -> Self {
        Self {
            enabled: settings.enabled,
            news_ttl_secs: settings.news_ttl_secs.get(),
            events_ttl_secs: settings.events_ttl_secs.get(),
            stats_ttl_secs: settings.stats_ttl_secs.get(),
            general_ttl_secs: settings.general_ttl_secs.get(),
        }
    }
}

impl CacheConfig {
    /// Returns true if read caching is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the default lifetime for a namespace, clamping a zero
    /// setting to one second.
    pub fn default_ttl(&self, namespace: Namespace) -> Duration {
        let secs = match namespace {
            Namespace::News => self.news_ttl_secs,
            Namespace::Events => self.events_ttl_secs,
            Namespace::Stats => self.stats_ttl_secs,
            Namespace::General => self.general_ttl_secs,
        };
        Duration::from_secs(secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = CacheConfig::default();
        assert!(config.enabled);
        assert_eq!(config.news_ttl_secs, 300);
        assert_eq!(config.events_ttl_secs, 600);
        assert_eq!(config.stats_ttl_secs, 900);
        assert_eq!(config.general_ttl_secs, 300);
    }

    #[test]
    fn ttl_resolves_per_namespace() {
        let config = CacheConfig {
            news_ttl_secs: 30,
            stats_ttl_secs: 7200,
            ..Default::default()
        };
        assert_eq!(
            config.default_ttl(Namespace::News),
            Duration::from_secs(30)
        );
        assert_eq!(
            config.default_ttl(Namespace::Stats),
            Duration::from_secs(7200)
        );
        assert_eq!(
            config.default_ttl(Namespace::Events),
            Duration::from_secs(600)
        );
    }

    #[test]
    fn zero_ttl_clamps_to_one_second() {
        let config = CacheConfig {
            general_ttl_secs: 0,
            ..Default::default()
        };
        assert_eq!(
            config.default_ttl(Namespace::General),
            Duration::from_secs(1)
        );
    }
}
