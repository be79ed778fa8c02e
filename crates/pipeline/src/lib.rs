//! Capture, batch, infer, overlay.
//!
//! A `Pipeline` samples a `VideoSource` on a fixed tick, encodes each sample,
//! groups the samples into batches and posts every full batch to an
//! `InferenceBackend` without waiting for the answer. Answers are applied in
//! arrival order by a single task that owns the `KeypointTracker` and the
//! overlay renderer; classifications go out through a `ResultBroadcaster`.

mod batch;
pub use batch::*;

mod broadcast;
pub use broadcast::*;

mod config;
pub use config::*;

mod encoder;
pub use encoder::*;

mod error;
pub use error::*;

mod pipeline;
pub use pipeline::*;
