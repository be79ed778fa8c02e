//! Video capture for the overlay pipeline.
//!
//! A camera worker thread keeps a `VideoSurface` filled with the most recent
//! frame. Consumers never wait on the camera: they read whatever the surface
//! holds when they look, through the `VideoSource` trait.

mod error;
pub use error::*;

mod pattern;
pub use pattern::*;

mod surface;
pub use surface::*;

mod videoin;
pub use videoin::*;
