//! Palestra cache system.
//!
//! Request-scoped read caching for the content API:
//!
//! - one [`TtlCache`] per content [`Namespace`] (news, events, stats,
//!   general), owned together by a [`CacheRegistry`]
//! - per-entry absolute expiry with lazy purge on access
//! - substring invalidation and aggregate statistics for the admin
//!   surface
//!
//! ## Configuration
//!
//! Cache behavior is controlled via `palestra.toml`:
//!
//! ```toml
//! [cache]
//! enabled = true
//! news_ttl_secs = 300
//! events_ttl_secs = 600
//! stats_ttl_secs = 900
//! general_ttl_secs = 300
//! ```

mod config;
mod keys;
mod lock;
mod registry;
mod store;

pub use config::CacheConfig;
pub use keys::{Namespace, request_key};
pub use registry::{CacheRegistry, RegistryStats};
pub use store::TtlCache;
