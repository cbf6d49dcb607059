use std::sync::Once;

use metrics::{Unit, describe_counter};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

/// Cache hit counter, labeled by namespace.
pub const METRIC_CACHE_HIT: &str = "palestra_cache_hit_total";
/// Cache miss counter, labeled by namespace.
pub const METRIC_CACHE_MISS: &str = "palestra_cache_miss_total";
/// Lazy expiry purge counter, labeled by namespace.
pub const METRIC_CACHE_EXPIRED: &str = "palestra_cache_expired_total";
/// Pattern invalidation counter, labeled by namespace.
pub const METRIC_CACHE_INVALIDATED: &str = "palestra_cache_invalidated_total";

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install a global tracing subscriber using the provided logging settings.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            METRIC_CACHE_HIT,
            Unit::Count,
            "Total number of cache hits."
        );
        describe_counter!(
            METRIC_CACHE_MISS,
            Unit::Count,
            "Total number of cache misses."
        );
        describe_counter!(
            METRIC_CACHE_EXPIRED,
            Unit::Count,
            "Total number of entries purged by lazy expiry."
        );
        describe_counter!(
            METRIC_CACHE_INVALIDATED,
            Unit::Count,
            "Total number of entries removed by pattern invalidation."
        );
    });
}
