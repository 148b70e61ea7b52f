use crate::image::PixelFormat;

/// An error type for image buffer construction and access.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the pixel data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidPixelBuffer(usize, usize),

    /// Error when a pixel coordinate is outside of the image bounds.
    #[error("Pixel index ({0}, {1}) out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a channel index is outside of the pixel layout.
    #[error("Channel index ({0}) out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when two images are expected to have the same size.
    #[error("Images have different sizes ({0}, {1}) != ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a palette is attached to a non-indexed image.
    #[error("Palette is only meaningful for Indexed8 images, got {0:?}")]
    PaletteNotSupported(PixelFormat),
}
