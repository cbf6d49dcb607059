//! Cache namespaces and key construction.
//!
//! Keys are opaque strings to the stores; callers derive them from the
//! request shape with [`request_key`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Logical cache domains, one [`TtlCache`](super::TtlCache) each in the
/// [`CacheRegistry`](super::CacheRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    News,
    Events,
    Stats,
    General,
}

impl Namespace {
    /// Returns the slug used for serialization, logs, and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Events => "events",
            Self::Stats => "stats",
            Self::General => "general",
        }
    }

    /// Returns all namespace variants for iteration.
    pub fn all() -> &'static [Namespace] {
        &[Self::News, Self::Events, Self::Stats, Self::General]
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "news" => Ok(Self::News),
            "events" => Ok(Self::Events),
            "stats" => Ok(Self::Stats),
            "general" => Ok(Self::General),
            _ => Err(()),
        }
    }
}

/// Build the cache key for a list/detail read.
///
/// The key is `endpoint` followed by the query parameters sorted by name
/// (ties broken by value), so differently-ordered but semantically
/// identical parameter sets map to the same entry.
pub fn request_key(endpoint: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return endpoint.to_string();
    }

    let mut sorted: Vec<(&str, &str)> = params.to_vec();
    sorted.sort_unstable();

    let mut key = String::with_capacity(endpoint.len() + sorted.len() * 16);
    key.push_str(endpoint);
    for (index, (name, value)) in sorted.iter().enumerate() {
        key.push(if index == 0 { '?' } else { '&' });
        key.push_str(name);
        key.push('=');
        key.push_str(value);
    }
    key
}
