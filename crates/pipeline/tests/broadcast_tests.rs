use {
    com::ClassificationVector,
    pipeline::ResultBroadcaster,
    std::time::Duration,
    tokio::time::timeout,
};

fn scores(first: f32) -> ClassificationVector {
    ClassificationVector::new(vec![first, 0.2, 0.3, 0.4, 0.5, 0.6])
}

#[test]
fn test_publish_without_listeners_is_dropped() {
    let broadcaster = ResultBroadcaster::new();
    assert_eq!(broadcaster.publish(scores(0.1)), 0);
}

#[tokio::test]
async fn test_every_listener_receives() {
    let broadcaster = ResultBroadcaster::new();
    let mut a = broadcaster.subscribe();
    let mut b = broadcaster.subscribe();

    assert_eq!(broadcaster.publish(scores(0.1)), 2);

    assert_eq!(a.recv().await, Some(scores(0.1)));
    assert_eq!(b.recv().await, Some(scores(0.1)));
}

#[tokio::test]
async fn test_late_listener_misses_earlier_results() {
    let broadcaster = ResultBroadcaster::new();
    let _early = broadcaster.subscribe();
    broadcaster.publish(scores(0.1));

    let mut late = broadcaster.subscribe();
    assert!(late.try_recv().is_none());

    broadcaster.publish(scores(0.7));
    assert_eq!(late.recv().await, Some(scores(0.7)));
}

#[tokio::test]
async fn test_slow_listener_skips_to_latest() {
    let broadcaster = ResultBroadcaster::new();
    let mut listener = broadcaster.subscribe();

    broadcaster.publish(scores(0.1));
    broadcaster.publish(scores(0.2));
    broadcaster.publish(scores(0.3));

    assert_eq!(listener.recv().await, Some(scores(0.3)));
    assert!(listener.try_recv().is_none());
}

#[tokio::test]
async fn test_recv_ends_when_broadcaster_dropped() {
    let broadcaster = ResultBroadcaster::new();
    let mut listener = broadcaster.subscribe();
    drop(broadcaster);

    let result = timeout(Duration::from_secs(1), listener.recv()).await.unwrap();
    assert!(result.is_none());
}

#[test]
fn test_listener_count_follows_subscriptions() {
    let broadcaster = ResultBroadcaster::new();
    let listener = broadcaster.subscribe();
    assert_eq!(broadcaster.listener_count(), 1);
    drop(listener);
    assert_eq!(broadcaster.listener_count(), 0);
}
