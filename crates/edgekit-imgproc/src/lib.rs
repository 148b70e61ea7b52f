#![deny(missing_docs)]
//! Edge-oriented batch image processing operations

/// line clipping against a rectangle.
pub mod clip;

/// color transformations module.
pub mod color;

/// utilities to draw on images.
pub mod draw;

/// Error types for the processing operations.
pub mod error;

/// image filtering module.
pub mod filter;

/// straight-line detection via the Hough transform.
pub mod hough;

/// edge map refinement module.
pub mod refine;

/// operations to threshold images.
pub mod threshold;

pub use crate::error::ImgprocError;
