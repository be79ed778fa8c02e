use std::time::Duration;

/// Base URL used when `BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Environment variable holding the inference service base URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Base URL of the inference service; requests go to `{backend_url}/process_frame`.
    pub backend_url: String,
    /// Frames per inference request.
    pub batch_size: usize,
    /// Time between two capture ticks.
    pub capture_interval: Duration,
    pub jpeg_quality: u8,
    /// `None` waits for the service for as long as it takes.
    pub request_timeout: Option<Duration>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            batch_size: 10,
            capture_interval: Duration::from_millis(200),
            jpeg_quality: 92,
            request_timeout: None,
        }
    }
}

impl PipelineConfig {
    /// Defaults, with the backend URL taken from `BACKEND_URL` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let config = Self::default();
        match lookup(BACKEND_URL_VAR).filter(|url| !url.trim().is_empty()) {
            Some(url) => config.with_backend_url(url.trim()),
            None => config,
        }
    }

    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_capture_interval(mut self, interval: Duration) -> Self {
        self.capture_interval = interval;
        self
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}
