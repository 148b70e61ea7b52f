use edgekit_image::{Image, ImageSize};

use super::border::SideHandle;
use super::descriptor::Filter;
use super::rotate::rotate;
use crate::error::ImgprocError;

/// Apply a convolution filter to an image.
///
/// With `multi == false` this runs a single convolution pass under the
/// given boundary policy. With `multi == true` it runs a compass edge
/// detection: the filter and its seven 45 degree rotations are each
/// applied, and the eight results are combined per byte via maximum.
///
/// For [`SideHandle::Crop`] the output shrinks to
/// `(width - (size - 1), height - (size - 1))`; every other policy pads
/// the working buffer by `size / 2` per side and keeps the input
/// dimensions.
///
/// The accumulated value for each output byte is divided by the filter
/// divisor (or by the sum of absolute kernel weights when the divisor
/// is 0) and then narrowed by a truncating cast that wraps modulo 256.
/// The narrowing deliberately does NOT saturate; overshooting kernels
/// wrap, matching the historical contract of this engine.
///
/// # Examples
///
/// ```
/// use edgekit_image::{Image, ImageSize, PixelFormat};
/// use edgekit_imgproc::filter::{apply_filter, presets, SideHandle};
///
/// let image = Image::from_size_val(
///     ImageSize {
///         width: 8,
///         height: 8,
///     },
///     PixelFormat::Indexed8,
///     128,
/// )
/// .unwrap();
///
/// let blurred = apply_filter(&image, &presets::box_blur(), SideHandle::Continuous, false).unwrap();
/// assert_eq!(blurred.size(), image.size());
/// ```
pub fn apply_filter(
    src: &Image,
    filter: &Filter,
    side: SideHandle,
    multi: bool,
) -> Result<Image, ImgprocError> {
    if multi {
        apply_compass(src, filter, side)
    } else {
        apply_single(src, filter, side)
    }
}

fn apply_compass(src: &Image, filter: &Filter, side: SideHandle) -> Result<Image, ImgprocError> {
    let mut combined = apply_single(src, filter, side)?;

    let mut rotated = rotate(filter);
    for _ in 1..8 {
        let pass = apply_single(src, &rotated, side)?;
        for (acc, &val) in combined.as_slice_mut().iter_mut().zip(pass.as_slice()) {
            if val > *acc {
                *acc = val;
            }
        }
        rotated = rotate(&rotated);
    }

    Ok(combined)
}

fn apply_single(src: &Image, filter: &Filter, side: SideHandle) -> Result<Image, ImgprocError> {
    let size = filter.size();
    let bpp = src.format().bytes_per_pixel();

    let (out_width, out_height, pad) = if side == SideHandle::Crop {
        if src.width() < size || src.height() < size {
            return Err(ImgprocError::ImageTooSmall(src.width(), src.height(), size));
        }
        (src.width() - (size - 1), src.height() - (size - 1), 0)
    } else {
        (src.width(), src.height(), size / 2)
    };

    let buffer = padded_buffer(src, pad, side);
    let buf_width = src.width() + 2 * pad;

    let kernel = filter.kernel();
    let mut out_data = vec![0u8; out_width * out_height * bpp];

    for j in 0..out_height {
        for i in 0..out_width {
            for k in 0..bpp {
                let mut acc = 0.0;
                let mut weight_sum = 0.0;
                for y in 0..size {
                    let row = ((j + y) * buf_width + i) * bpp + k;
                    for x in 0..size {
                        let weight = kernel[y * size + x];
                        acc += buffer[row + x * bpp] as f64 * weight;
                        weight_sum += weight.abs();
                    }
                }
                let divisor = if filter.divisor() == 0.0 {
                    // All-zero kernels would otherwise divide by zero.
                    if weight_sum == 0.0 {
                        1.0
                    } else {
                        weight_sum
                    }
                } else {
                    filter.divisor()
                };
                // Truncating, wrapping narrowing; see the fn docs.
                out_data[(j * out_width + i) * bpp + k] = (acc / divisor) as i64 as u8;
            }
        }
    }

    let mut out = Image::new(
        ImageSize {
            width: out_width,
            height: out_height,
        },
        src.format(),
        out_data,
    )?;
    if let Some(palette) = src.palette() {
        out.set_palette(*palette)?;
    }

    Ok(out)
}

/// Build the working buffer: the source image surrounded by `pad`
/// synthesized rows/columns per side according to the boundary policy.
fn padded_buffer(src: &Image, pad: usize, side: SideHandle) -> Vec<u8> {
    let bpp = src.format().bytes_per_pixel();
    let buf_width = src.width() + 2 * pad;
    let buf_height = src.height() + 2 * pad;

    let src_data = src.as_slice();
    let mut buffer = vec![0u8; buf_width * buf_height * bpp];

    for by in 0..buf_height {
        let sy = side.map_coord(by as isize - pad as isize, src.height());
        for bx in 0..buf_width {
            let sx = side.map_coord(bx as isize - pad as isize, src.width());
            let dst = (by * buf_width + bx) * bpp;
            match (sy, sx) {
                (Some(sy), Some(sx)) => {
                    let from = (sy * src.width() + sx) * bpp;
                    buffer[dst..dst + bpp].copy_from_slice(&src_data[from..from + bpp]);
                }
                _ => {
                    for k in 0..bpp {
                        buffer[dst + k] = side.fill_value(k, src.format());
                    }
                }
            }
        }
    }

    buffer
}
