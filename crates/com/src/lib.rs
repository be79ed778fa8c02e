//! Talking to the remote inference service.
//!
//! One HTTP request per `Batch`: `POST {base}/process_frame` with
//! `{ "images": [...] }`, answered by an optional keypoint vector, optional
//! class scores and an optional status message.

pub mod batch;
pub mod client;
pub mod error;
pub mod message;

pub use batch::Batch;
pub use client::{InferenceBackend, InferenceClient};
pub use error::ComError;
pub use message::{ClassificationVector, InferenceResponse};
