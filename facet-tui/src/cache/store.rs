//! Cache config aggregation.
//!
//! Collects caching-policy records across every configurable kind into one
//! resource. Refreshes are fenced: when a refresh is superseded by a newer
//! one, the stale completion is discarded rather than applied out of order.

use facet_ui::resource::{Resource, ResourceError, ResourceState};

use super::models::{CacheConfig, CacheableKind, ROOT_ID};
use super::provider::CacheConfigSource;

/// Aggregated caching-policy state for the admin screens.
///
/// Cheap to clone; clones share the underlying resource.
#[derive(Debug, Clone)]
pub struct CacheConfigStore {
    configurable: Vec<CacheableKind>,
    configs: Resource<Vec<CacheConfig>>,
}

impl CacheConfigStore {
    /// Create a store covering the given configurable kinds.
    pub fn new(configurable: Vec<CacheableKind>) -> Self {
        Self {
            configurable,
            configs: Resource::new(),
        }
    }

    /// Reload every kind's configs from the source.
    ///
    /// The store stays in the loading state until all kinds have been
    /// fetched and the combined result committed. The first kind to fail
    /// fails the whole refresh. Overlapping refreshes resolve to the newest
    /// call's result regardless of completion order.
    pub async fn refresh(&self, source: &dyn CacheConfigSource) {
        let token = self.configs.begin_load();

        let mut all = Vec::new();
        for kind in &self.configurable {
            match source.list_configs(*kind).await {
                Ok(mut configs) => all.append(&mut configs),
                Err(err) => {
                    self.configs
                        .complete(token, Err(ResourceError::new(err.to_string())));
                    return;
                }
            }
        }

        if !self.configs.complete(token, Ok(all)) {
            log::debug!("cache config refresh superseded; result dropped");
        }
    }

    /// True while a refresh is in flight or its result not yet committed.
    pub fn loading(&self) -> bool {
        self.configs.is_loading()
    }

    /// The loaded configs; empty until a refresh completes.
    pub fn configs(&self) -> Vec<CacheConfig> {
        match self.configs.get() {
            ResourceState::Ready(configs) => configs,
            _ => Vec::new(),
        }
    }

    /// The refresh error, if the last refresh failed.
    pub fn error(&self) -> Option<ResourceError> {
        self.configs.get().as_error().cloned()
    }

    /// True once any non-root policy overrides the instance default.
    pub fn root_strategy_overridden(&self) -> bool {
        self.configs().iter().any(|c| c.model_id != ROOT_ID)
    }

    /// Apply a locally edited config without waiting for a round-trip:
    /// replaces the record for the same (kind, id), or adds it.
    pub fn upsert(&self, config: CacheConfig) {
        let mut configs = self.configs();
        match configs
            .iter_mut()
            .find(|c| c.model == config.model && c.model_id == config.model_id)
        {
            Some(existing) => *existing = config,
            None => configs.push(config),
        }
        self.configs.set_ready(configs);
    }
}
