use edgekit_image::{ImageError, PixelFormat};

/// An error type for the processing operations.
#[derive(thiserror::Error, Debug)]
pub enum ImgprocError {
    /// Error coming from the image buffer layer.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error when the kernel length does not match its declared size.
    #[error("Kernel length ({0}) does not match size*size ({1})")]
    InvalidKernelLength(usize, usize),

    /// Error when the kernel size is even or not supported.
    #[error("Unsupported kernel size ({0}), expected one of 1, 3, 5, 7, 9")]
    InvalidKernelSize(usize),

    /// Error when an operation receives an image in the wrong layout.
    #[error("Expected a {expected:?} image, got {actual:?}")]
    UnexpectedPixelFormat {
        /// The layout the operation requires.
        expected: PixelFormat,
        /// The layout that was passed in.
        actual: PixelFormat,
    },

    /// Error when an image is too small for the requested kernel.
    #[error("Image ({0}x{1}) is smaller than the {2}x{2} kernel")]
    ImageTooSmall(usize, usize, usize),
}
