//! Cache configuration records.
//!
//! Typed form of the caching-policy records the admin screens edit. The API
//! delivers strategies as tagged JSON payloads; [`CacheConfig::from_api`]
//! normalizes a raw payload into the internal form, filling in the documented
//! defaults for fields older backends omit.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Model id carried by the root (instance-wide) configuration row.
pub const ROOT_ID: i64 = 0;

/// Default multiplier for the adaptive TTL strategy.
const DEFAULT_TTL_MULTIPLIER: u32 = 10;

/// Default minimum query duration (ms) before adaptive caching kicks in.
const DEFAULT_MIN_DURATION_MS: u64 = 60_000;

/// Errors from cache-config handling.
#[derive(Debug, Error)]
pub enum CacheError {
    /// A raw API payload did not parse into a config record.
    #[error("malformed cache config: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The config source failed to deliver.
    #[error("cache config source failed: {0}")]
    Source(String),
}

/// The kinds of entities a caching policy can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheableKind {
    Root,
    Database,
    Dashboard,
    Question,
}

impl CacheableKind {
    /// Display label for the kind.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Root => "Default policy",
            Self::Database => "Database",
            Self::Dashboard => "Dashboard",
            Self::Question => "Question",
        }
    }
}

/// A caching strategy, as configured per cacheable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CacheStrategy {
    /// Never cache results.
    #[serde(rename = "nocache")]
    Nothing,

    /// Adaptive TTL: cache for `multiplier` times the observed query
    /// duration, once queries take at least `min_duration_ms`.
    Ttl {
        #[serde(default = "default_multiplier")]
        multiplier: u32,
        #[serde(default = "default_min_duration_ms")]
        min_duration_ms: u64,
    },

    /// Cache for a fixed number of hours.
    Duration { duration_hours: u32 },

    /// Invalidate on a cron schedule.
    Schedule { schedule: String },
}

fn default_multiplier() -> u32 {
    DEFAULT_TTL_MULTIPLIER
}

fn default_min_duration_ms() -> u64 {
    DEFAULT_MIN_DURATION_MS
}

impl CacheStrategy {
    /// Short label for table cells.
    pub fn label(&self) -> String {
        match self {
            Self::Nothing => "Don't cache".to_string(),
            Self::Ttl { multiplier, .. } => format!("Adaptive ({multiplier}x)"),
            Self::Duration { duration_hours } => format!("Duration: {duration_hours}h"),
            Self::Schedule { schedule } => format!("Scheduled: {schedule}"),
        }
    }
}

/// One caching-policy record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// What kind of entity the policy attaches to.
    pub model: CacheableKind,
    /// Id of the entity; [`ROOT_ID`] for the instance-wide default.
    pub model_id: i64,
    /// The configured strategy.
    pub strategy: CacheStrategy,
}

impl CacheConfig {
    /// Normalize a raw API payload into the internal form.
    pub fn from_api(raw: serde_json::Value) -> Result<Self, CacheError> {
        Ok(serde_json::from_value(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_api_parses_ttl_payload() {
        let config = CacheConfig::from_api(json!({
            "model": "question",
            "model_id": 5,
            "strategy": {"type": "ttl", "multiplier": 4, "min_duration_ms": 1000}
        }))
        .unwrap();
        assert_eq!(config.model, CacheableKind::Question);
        assert_eq!(
            config.strategy,
            CacheStrategy::Ttl {
                multiplier: 4,
                min_duration_ms: 1000
            }
        );
    }

    #[test]
    fn test_from_api_fills_ttl_defaults() {
        let config = CacheConfig::from_api(json!({
            "model": "root",
            "model_id": 0,
            "strategy": {"type": "ttl"}
        }))
        .unwrap();
        assert_eq!(
            config.strategy,
            CacheStrategy::Ttl {
                multiplier: 10,
                min_duration_ms: 60_000
            }
        );
    }

    #[test]
    fn test_from_api_rejects_unknown_strategy() {
        let result = CacheConfig::from_api(json!({
            "model": "dashboard",
            "model_id": 2,
            "strategy": {"type": "telepathy"}
        }));
        assert!(matches!(result, Err(CacheError::Malformed(_))));
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(CacheStrategy::Nothing.label(), "Don't cache");
        assert_eq!(
            CacheStrategy::Duration { duration_hours: 24 }.label(),
            "Duration: 24h"
        );
    }
}
