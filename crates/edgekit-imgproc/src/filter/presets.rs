//! Named filter presets.
//!
//! The set of kernels a fresh filter store starts with. Presets are
//! plain factories; the surrounding application owns naming and
//! persistence.

use super::descriptor::Filter;
use crate::error::ImgprocError;

/// The identity kernel of the given size: 1 at the center, 0 elsewhere.
///
/// # Errors
///
/// Fails on an unsupported kernel size.
pub fn identity(size: usize) -> Result<Filter, ImgprocError> {
    let mut filter = Filter::new(size, vec![0.0; size * size], 1.0)?;
    filter.kernel[size * size / 2] = 1.0;
    Ok(filter)
}

/// 3x3 Laplacian edge enhancement, divisor 6.
pub fn laplacian() -> Filter {
    #[rustfmt::skip]
    let kernel = vec![
         0.0, -1.0,  0.0,
        -1.0,  4.0, -1.0,
         0.0, -1.0,  0.0,
    ];
    Filter {
        size: 3,
        kernel,
        divisor: 6.0,
    }
}

/// 3x3 box blur, divisor 9.
pub fn box_blur() -> Filter {
    Filter {
        size: 3,
        kernel: vec![1.0; 9],
        divisor: 9.0,
    }
}

/// 3x3 Prewitt horizontal-edge kernel, divisor 3.
pub fn prewitt() -> Filter {
    #[rustfmt::skip]
    let kernel = vec![
         1.0,  1.0,  1.0,
         0.0,  0.0,  0.0,
        -1.0, -1.0, -1.0,
    ];
    Filter {
        size: 3,
        kernel,
        divisor: 3.0,
    }
}

/// 3x3 Sobel horizontal-edge kernel, divisor 4.
pub fn sobel() -> Filter {
    #[rustfmt::skip]
    let kernel = vec![
         1.0,  2.0,  1.0,
         0.0,  0.0,  0.0,
        -1.0, -2.0, -1.0,
    ];
    Filter {
        size: 3,
        kernel,
        divisor: 4.0,
    }
}

/// 3x3 Kirsch compass kernel, divisor 15.
pub fn kirsch() -> Filter {
    #[rustfmt::skip]
    let kernel = vec![
         5.0,  5.0,  5.0,
        -3.0,  0.0, -3.0,
        -3.0, -3.0, -3.0,
    ];
    Filter {
        size: 3,
        kernel,
        divisor: 15.0,
    }
}

/// 5x5 Gaussian blur approximation, divisor 159.
pub fn gaussian_blur() -> Filter {
    #[rustfmt::skip]
    let kernel = vec![
        2.0,  4.0,  5.0,  4.0, 2.0,
        4.0,  9.0, 12.0,  9.0, 4.0,
        5.0, 12.0, 15.0, 12.0, 5.0,
        4.0,  9.0, 12.0,  9.0, 4.0,
        2.0,  4.0,  5.0,  4.0, 2.0,
    ];
    Filter {
        size: 5,
        kernel,
        divisor: 159.0,
    }
}

/// Look up a default preset by its display name.
pub fn preset(name: &str) -> Option<Filter> {
    match name {
        "Laplacian" => Some(laplacian()),
        "Box Blur" => Some(box_blur()),
        "Prewitt" => Some(prewitt()),
        "Sobel" => Some(sobel()),
        "Kirsch" => Some(kirsch()),
        "Gaussian Blur" => Some(gaussian_blur()),
        _ => None,
    }
}
