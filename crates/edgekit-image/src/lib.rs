#![deny(missing_docs)]
//! Pixel buffer types for the edgekit image analysis crates

/// image representation for the fixed RGB / ARGB / Indexed8 layouts.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{grayscale_palette, Image, ImageSize, Palette, PixelFormat};
