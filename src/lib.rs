//! Palestra: caching and access control for a sports federation content
//! platform.
//!
//! The public website and admin back-office (routing, persistence,
//! rendering) live in the host application; this crate carries the two
//! cross-cutting pieces with real invariants:
//!
//! - [`cache`]: per-namespace TTL read caching with lazy expiry, pattern
//!   invalidation, and aggregate statistics
//! - [`domain::access`]: the role → resource → action permission table
//!   and its fail-closed evaluator
//!
//! plus the configuration and telemetry layers the host wires at startup.

pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;

pub use cache::{CacheConfig, CacheRegistry, Namespace, RegistryStats, TtlCache, request_key};
pub use domain::access::{AccessPolicy, Action, Actor, PermissionSet, Resource, Role};
