use {
    crate::{
        Batch, ComError,
        message::{ErrorBody, InferenceResponse, ProcessFrameRequest},
    },
    reqwest::Url,
    std::{future::Future, time::Duration},
};

/// Anything that can turn a batch into an inference answer.
///
/// Calls for different batches are independent and may complete in any order.
pub trait InferenceBackend: Send + Sync + 'static {
    fn infer(&self, batch: Batch) -> impl Future<Output = Result<InferenceResponse, ComError>> + Send;
}

/// HTTP/JSON client for the `/process_frame` endpoint.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl InferenceClient {
    pub fn new(base_url: &str) -> Result<Self, ComError> {
        Self::with_timeout(base_url, None)
    }

    /// Build a client whose requests give up after `timeout`. `None` waits
    /// for as long as the server takes.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ComError> {
        let endpoint = format!("{}/process_frame", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint).map_err(|e| ComError::Url(format!("{endpoint}: {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Post one batch and decode the answer.
    ///
    /// Any 2xx status is a success, including `202 Accepted` with only a
    /// `message`. Other statuses become `ComError::Status`, carrying the
    /// server's `error` field when the body has one.
    pub async fn send(&self, batch: &Batch) -> Result<InferenceResponse, ComError> {
        log::debug!(
            "posting batch of {} frames to {}",
            batch.len(),
            self.endpoint
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&ProcessFrameRequest::from(batch))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .map(|body| body.error);
            return Err(ComError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                detail,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

impl InferenceBackend for InferenceClient {
    fn infer(&self, batch: Batch) -> impl Future<Output = Result<InferenceResponse, ComError>> + Send {
        async move { self.send(&batch).await }
    }
}
