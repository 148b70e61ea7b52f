use crate::error::ImgprocError;

/// Kernel sizes with a defined 45 degree rotation group.
pub(crate) const SUPPORTED_SIZES: [usize; 5] = [1, 3, 5, 7, 9];

/// A convolution filter descriptor: an odd-sized square kernel and a
/// normalization divisor.
///
/// A `divisor` of `0.0` selects dynamic normalization, where the
/// convolution divides by the sum of the absolute kernel weights
/// instead of a fixed value.
///
/// # Examples
///
/// ```
/// use edgekit_imgproc::filter::Filter;
///
/// let filter = Filter::new(3, vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0], 1.0).unwrap();
/// assert_eq!(filter.size(), 3);
/// assert_eq!(filter.default_divisor(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub(crate) size: usize,
    pub(crate) kernel: Vec<f64>,
    pub(crate) divisor: f64,
}

impl Filter {
    /// Create a new filter from a row-major kernel.
    ///
    /// # Arguments
    ///
    /// * `size` - The kernel side length, one of 1, 3, 5, 7, 9.
    /// * `kernel` - The row-major kernel weights, `size * size` entries.
    /// * `divisor` - The normalization divisor; `0.0` selects dynamic
    ///   normalization.
    ///
    /// # Errors
    ///
    /// Fails fast on an unsupported size or a kernel whose length does
    /// not match `size * size`.
    pub fn new(size: usize, kernel: Vec<f64>, divisor: f64) -> Result<Self, ImgprocError> {
        if !SUPPORTED_SIZES.contains(&size) {
            return Err(ImgprocError::InvalidKernelSize(size));
        }
        if kernel.len() != size * size {
            return Err(ImgprocError::InvalidKernelLength(kernel.len(), size * size));
        }

        Ok(Self {
            size,
            kernel,
            divisor,
        })
    }

    /// The kernel side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The row-major kernel weights.
    pub fn kernel(&self) -> &[f64] {
        &self.kernel
    }

    /// The normalization divisor; `0.0` means dynamic normalization.
    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// The divisor a filter editor would derive from the kernel: the
    /// sum of the absolute weights, falling back to 1.0 when the kernel
    /// is all zeros.
    pub fn default_divisor(&self) -> f64 {
        let sum: f64 = self.kernel.iter().map(|k| k.abs()).sum();
        if sum == 0.0 {
            1.0
        } else {
            sum
        }
    }
}
