//! Color space conversions.

use edgekit_image::{Image, PixelFormat};

use crate::error::ImgprocError;

const WEIGHT_R: f64 = 0.2125;
const WEIGHT_G: f64 = 0.7154;
const WEIGHT_B: f64 = 0.0721;

/// Luminance of an RGB triple, truncated to `[0, 255]`.
pub(crate) fn luminance(r: u8, g: u8, b: u8) -> u8 {
    (r as f64 * WEIGHT_R + g as f64 * WEIGHT_G + b as f64 * WEIGHT_B) as u8
}

/// Grayscale value of the pixel at flat index `p`, regardless of format.
pub(crate) fn gray_at(src: &Image, p: usize) -> u8 {
    let data = src.as_slice();
    match src.format() {
        PixelFormat::Rgb => luminance(data[p * 3], data[p * 3 + 1], data[p * 3 + 2]),
        PixelFormat::Argb => luminance(data[p * 4 + 1], data[p * 4 + 2], data[p * 4 + 3]),
        PixelFormat::Indexed8 => data[p],
    }
}

/// Convert an image to an [`PixelFormat::Indexed8`] grayscale image.
///
/// Uses the luminance weights `0.2125 R + 0.7154 G + 0.0721 B`, with the
/// weighted sum truncated to a byte. An `Indexed8` input passes through
/// unchanged, palette included.
///
/// # Examples
///
/// ```
/// use edgekit_image::{Image, ImageSize, PixelFormat};
/// use edgekit_imgproc::color::gray_from_image;
///
/// let rgb = Image::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     PixelFormat::Rgb,
///     vec![0, 255, 0],
/// )
/// .unwrap();
///
/// let gray = gray_from_image(&rgb).unwrap();
/// assert_eq!(gray.format(), PixelFormat::Indexed8);
/// assert_eq!(gray.as_slice(), &[182]);
/// ```
pub fn gray_from_image(src: &Image) -> Result<Image, ImgprocError> {
    if src.format() == PixelFormat::Indexed8 {
        return Ok(src.clone());
    }

    let data = (0..src.width() * src.height())
        .map(|p| gray_at(src, p))
        .collect();

    Ok(Image::new(src.size(), PixelFormat::Indexed8, data)?)
}
