//! Still-image handling for the overlay pipeline.
//!
//! An `Image` is a raw raster in one of a few camera pixel formats. Frames
//! leave the capture side as `EncodedFrame`s: JPEG stills wrapped in a
//! `data:` URL so they can travel inside a JSON string.

mod dataurl;
pub use dataurl::*;

mod error;
pub use error::*;

mod frame;
pub use frame::*;

mod jpeg;
pub use jpeg::*;

mod pixelformat;
pub use pixelformat::*;

mod rgb;
pub use rgb::*;

mod framebuffer;
pub use framebuffer::*;
