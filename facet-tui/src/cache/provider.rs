//! Cache config source seam.

use async_trait::async_trait;

use super::models::{CacheConfig, CacheError, CacheableKind};

/// Source of caching-policy records.
///
/// The real implementation wraps the REST API layer; tests use in-memory
/// sources. Records arrive already deserialized; transport, retries, and
/// backoff live behind this seam.
#[async_trait]
pub trait CacheConfigSource: Send + Sync {
    /// List the configs for one cacheable kind.
    async fn list_configs(&self, kind: CacheableKind) -> Result<Vec<CacheConfig>, CacheError>;
}
