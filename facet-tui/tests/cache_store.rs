use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use facet_tui::cache::{
    CacheConfig, CacheConfigSource, CacheConfigStore, CacheError, CacheStrategy, CacheableKind,
    ROOT_ID,
};

fn config(model: CacheableKind, model_id: i64) -> CacheConfig {
    CacheConfig {
        model,
        model_id,
        strategy: CacheStrategy::Nothing,
    }
}

struct StaticSource(Vec<CacheConfig>);

#[async_trait]
impl CacheConfigSource for StaticSource {
    async fn list_configs(&self, kind: CacheableKind) -> Result<Vec<CacheConfig>, CacheError> {
        Ok(self.0.iter().filter(|c| c.model == kind).cloned().collect())
    }
}

struct FailingSource;

#[async_trait]
impl CacheConfigSource for FailingSource {
    async fn list_configs(&self, _kind: CacheableKind) -> Result<Vec<CacheConfig>, CacheError> {
        Err(CacheError::Source("backend unavailable".into()))
    }
}

/// First call answers slowly with stale data, later calls quickly with fresh
/// data. Models a superseded in-flight fetch resolving after its successor.
struct SlowThenFastSource {
    calls: AtomicUsize,
}

#[async_trait]
impl CacheConfigSource for SlowThenFastSource {
    async fn list_configs(&self, _kind: CacheableKind) -> Result<Vec<CacheConfig>, CacheError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == 0 {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok(vec![config(CacheableKind::Question, 1)])
        } else {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok(vec![config(CacheableKind::Question, 2)])
        }
    }
}

#[tokio::test]
async fn test_refresh_aggregates_every_kind() {
    let store = CacheConfigStore::new(vec![
        CacheableKind::Root,
        CacheableKind::Dashboard,
        CacheableKind::Question,
    ]);
    assert!(!store.loading());
    assert!(store.configs().is_empty());

    let source = StaticSource(vec![
        config(CacheableKind::Root, ROOT_ID),
        config(CacheableKind::Question, 7),
        config(CacheableKind::Database, 1), // kind not configured; ignored
    ]);
    store.refresh(&source).await;

    assert!(!store.loading());
    let configs = store.configs();
    assert_eq!(configs.len(), 2);
    assert!(store.root_strategy_overridden());
}

#[tokio::test]
async fn test_refresh_failure_surfaces_error() {
    let store = CacheConfigStore::new(vec![CacheableKind::Root]);
    store.refresh(&FailingSource).await;

    assert!(!store.loading());
    let error = store.error().expect("refresh should have failed");
    assert!(error.message.contains("backend unavailable"));
    assert!(store.configs().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_superseded_refresh_is_fenced_out() {
    let store = CacheConfigStore::new(vec![CacheableKind::Question]);
    let source = std::sync::Arc::new(SlowThenFastSource {
        calls: AtomicUsize::new(0),
    });

    // First refresh starts and parks on its slow fetch.
    let slow = {
        let store = store.clone();
        let source = std::sync::Arc::clone(&source);
        tokio::spawn(async move { store.refresh(source.as_ref()).await })
    };
    tokio::task::yield_now().await;

    // Second refresh supersedes it and completes first.
    let fast = {
        let store = store.clone();
        let source = std::sync::Arc::clone(&source);
        tokio::spawn(async move { store.refresh(source.as_ref()).await })
    };

    tokio::time::sleep(Duration::from_millis(600)).await;
    slow.await.unwrap();
    fast.await.unwrap();

    // The stale (slow) completion must not overwrite the fresh result.
    let configs = store.configs();
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].model_id, 2);
}

#[tokio::test]
async fn test_upsert_replaces_matching_record() {
    let store = CacheConfigStore::new(vec![CacheableKind::Question]);
    let source = StaticSource(vec![config(CacheableKind::Question, 7)]);
    store.refresh(&source).await;

    store.upsert(CacheConfig {
        model: CacheableKind::Question,
        model_id: 7,
        strategy: CacheStrategy::Duration { duration_hours: 12 },
    });
    let configs = store.configs();
    assert_eq!(configs.len(), 1);
    assert_eq!(
        configs[0].strategy,
        CacheStrategy::Duration { duration_hours: 12 }
    );

    store.upsert(config(CacheableKind::Question, 8));
    assert_eq!(store.configs().len(), 2);
}

#[tokio::test]
async fn test_root_only_config_is_not_an_override() {
    let store = CacheConfigStore::new(vec![CacheableKind::Root]);
    let source = StaticSource(vec![config(CacheableKind::Root, ROOT_ID)]);
    store.refresh(&source).await;
    assert!(!store.root_strategy_overridden());
}
