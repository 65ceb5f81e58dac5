use facet_ui::resource::{Resource, ResourceError, ResourceState};

#[test]
fn test_lifecycle_idle_loading_ready() {
    let resource: Resource<Vec<i64>> = Resource::new();
    assert!(resource.is_idle());

    let token = resource.begin_load();
    assert!(resource.is_loading());

    assert!(resource.complete(token, Ok(vec![1, 2])));
    assert!(resource.is_ready());
    assert_eq!(resource.get().as_ready(), Some(&vec![1, 2]));
}

#[test]
fn test_stale_completion_is_discarded() {
    let resource: Resource<&'static str> = Resource::new();
    let first = resource.begin_load();
    let second = resource.begin_load();

    // The superseded load resolves late; its result must not land.
    assert!(!resource.complete(first, Ok("stale")));
    assert!(resource.is_loading());

    assert!(resource.complete(second, Ok("fresh")));
    assert_eq!(resource.get().as_ready(), Some(&"fresh"));
}

#[test]
fn test_stale_error_does_not_clobber_fresh_result() {
    let resource: Resource<&'static str> = Resource::new();
    let first = resource.begin_load();
    let second = resource.begin_load();

    assert!(resource.complete(second, Ok("fresh")));
    assert!(!resource.complete(first, Err(ResourceError::new("timeout"))));
    assert_eq!(resource.get().as_ready(), Some(&"fresh"));
}

#[test]
fn test_error_state_carries_message() {
    let resource: Resource<()> = Resource::new();
    let token = resource.begin_load();
    resource.complete(token, Err("backend unavailable".into()));

    match resource.get() {
        ResourceState::Error(err) => assert_eq!(err.message, "backend unavailable"),
        other => panic!("expected error state, got {other:?}"),
    }
}

#[test]
fn test_is_current_tracks_latest_load() {
    let resource: Resource<()> = Resource::new();
    let first = resource.begin_load();
    assert!(resource.is_current(first));
    let second = resource.begin_load();
    assert!(!resource.is_current(first));
    assert!(resource.is_current(second));
}
