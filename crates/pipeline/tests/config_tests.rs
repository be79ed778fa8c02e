use {
    pipeline::{DEFAULT_BACKEND_URL, PipelineConfig},
    std::time::Duration,
};

#[test]
fn test_defaults() {
    let config = PipelineConfig::default();
    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.batch_size, 10);
    assert_eq!(config.capture_interval, Duration::from_millis(200));
    assert_eq!(config.jpeg_quality, 92);
    assert_eq!(config.request_timeout, None);
}

#[test]
fn test_backend_url_from_environment() {
    let config = PipelineConfig::from_lookup(|name| {
        (name == "BACKEND_URL").then(|| "http://pose.local:8080/".to_string())
    });
    assert_eq!(config.backend_url, "http://pose.local:8080/");
}

#[test]
fn test_unset_or_blank_backend_url_falls_back() {
    assert_eq!(
        PipelineConfig::from_lookup(|_| None).backend_url,
        DEFAULT_BACKEND_URL
    );
    assert_eq!(
        PipelineConfig::from_lookup(|_| Some("  ".to_string())).backend_url,
        DEFAULT_BACKEND_URL
    );
}

#[test]
fn test_builder() {
    let config = PipelineConfig::default()
        .with_backend_url("http://10.0.0.2:5000")
        .with_batch_size(4)
        .with_capture_interval(Duration::from_millis(50))
        .with_jpeg_quality(70)
        .with_request_timeout(Duration::from_secs(3));

    assert_eq!(config.backend_url, "http://10.0.0.2:5000");
    assert_eq!(config.batch_size, 4);
    assert_eq!(config.capture_interval, Duration::from_millis(50));
    assert_eq!(config.jpeg_quality, 70);
    assert_eq!(config.request_timeout, Some(Duration::from_secs(3)));
}
