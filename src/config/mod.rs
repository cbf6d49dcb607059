//! Configuration layer: typed settings with layered precedence (file → env).

use std::num::NonZeroU64;
use std::path::Path;
use std::str::FromStr;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "palestra";
const DEFAULT_NEWS_TTL_SECS: u64 = 300;
const DEFAULT_EVENTS_TTL_SECS: u64 = 600;
const DEFAULT_STATS_TTL_SECS: u64 = 900;
const DEFAULT_GENERAL_TTL_SECS: u64 = 300;

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub cache: CacheSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub enabled: bool,
    pub news_ttl_secs: NonZeroU64,
    pub events_ttl_secs: NonZeroU64,
    pub stats_ttl_secs: NonZeroU64,
    pub general_ttl_secs: NonZeroU64,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment).
pub fn load() -> Result<Settings, LoadError> {
    load_from(None)
}

/// Load settings, optionally pinning an explicit configuration file.
pub fn load_from(config_file: Option<&Path>) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("PALESTRA").separator("__"));

    let raw: RawSettings = builder.build()?.try_deserialize()?;
    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    cache: RawCacheSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawCacheSettings {
    enabled: Option<bool>,
    news_ttl_secs: Option<u64>,
    events_ttl_secs: Option<u64>,
    stats_ttl_secs: Option<u64>,
    general_ttl_secs: Option<u64>,
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Settings, LoadError> {
        Ok(Settings {
            logging: build_logging_settings(raw.logging)?,
            cache: build_cache_settings(raw.cache)?,
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_cache_settings(cache: RawCacheSettings) -> Result<CacheSettings, LoadError> {
    Ok(CacheSettings {
        enabled: cache.enabled.unwrap_or(true),
        news_ttl_secs: non_zero_u64(
            cache.news_ttl_secs.unwrap_or(DEFAULT_NEWS_TTL_SECS),
            "cache.news_ttl_secs",
        )?,
        events_ttl_secs: non_zero_u64(
            cache.events_ttl_secs.unwrap_or(DEFAULT_EVENTS_TTL_SECS),
            "cache.events_ttl_secs",
        )?,
        stats_ttl_secs: non_zero_u64(
            cache.stats_ttl_secs.unwrap_or(DEFAULT_STATS_TTL_SECS),
            "cache.stats_ttl_secs",
        )?,
        general_ttl_secs: non_zero_u64(
            cache.general_ttl_secs.unwrap_or(DEFAULT_GENERAL_TTL_SECS),
            "cache.general_ttl_secs",
        )?,
    })
}

fn non_zero_u64(value: u64, key: &'static str) -> Result<NonZeroU64, LoadError> {
    NonZeroU64::new(value).ok_or_else(|| LoadError::invalid(key, "value must be greater than zero"))
}
