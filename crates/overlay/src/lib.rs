//! Incremental keypoint overlay.
//!
//! `KeypointTracker` remembers where each point was last drawn and turns a
//! fresh keypoint vector into the smallest list of `DrawOp`s that brings the
//! overlay up to date. An `OverlayRenderer` executes those ops against a
//! persistent surface; it never keeps point state of its own.

mod canvas;
pub use canvas::*;

mod error;
pub use error::*;

mod renderer;
pub use renderer::*;

mod tracker;
pub use tracker::*;
