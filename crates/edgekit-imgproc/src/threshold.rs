//! Binary and hysteresis thresholding.

use edgekit_image::{Image, PixelFormat};

use crate::color::gray_at;
use crate::error::ImgprocError;

// Intermediate markers used by the hysteresis passes. Candidates keep a
// distinct value from linked pixels so the linking pass only sees edges
// that were definite before it started.
const CANDIDATE: u8 = 150;
const LINKED: u8 = 200;

/// Threshold an image into an [`PixelFormat::Indexed8`] edge map.
///
/// Each pixel's grayscale value (luminance for RGB/ARGB, the raw byte
/// for Indexed8) is compared against the two levels: values `<= min`
/// become 0, values `> max` become 255. With `min == max` this is pure
/// binary thresholding. With `min < max` pixels in between are
/// candidates: a single linking pass keeps a candidate only if one of
/// its 8 in-bounds neighbors was already a definite 255, and drops the
/// rest to 0 (hysteresis).
///
/// The linking pass deliberately checks against the pre-link edge map,
/// so candidate chains do not propagate within one call.
///
/// # Examples
///
/// ```
/// use edgekit_image::{Image, ImageSize, PixelFormat};
/// use edgekit_imgproc::threshold::threshold;
///
/// let image = Image::new(
///     ImageSize {
///         width: 3,
///         height: 1,
///     },
///     PixelFormat::Indexed8,
///     vec![10, 128, 240],
/// )
/// .unwrap();
///
/// let edges = threshold(&image, 100, 100).unwrap();
/// assert_eq!(edges.as_slice(), &[0, 255, 255]);
/// ```
pub fn threshold(src: &Image, min: u8, max: u8) -> Result<Image, ImgprocError> {
    let (width, height) = (src.width(), src.height());
    let mut out = vec![0u8; width * height];

    for p in 0..width * height {
        let gray = gray_at(src, p);
        out[p] = if gray <= min {
            0
        } else if gray > max {
            255
        } else {
            CANDIDATE
        };
    }

    if min != max {
        for j in 0..height as isize {
            for i in 0..width as isize {
                if out[(j * width as isize + i) as usize] != CANDIDATE {
                    continue;
                }
                let mut found = false;
                'link: for x in -1..=1 {
                    for y in -1..=1 {
                        let (nx, ny) = (i + x, j + y);
                        if nx < 0 || nx >= width as isize || ny < 0 || ny >= height as isize {
                            continue;
                        }
                        if out[(ny * width as isize + nx) as usize] == 255 {
                            found = true;
                            break 'link;
                        }
                    }
                }
                out[(j * width as isize + i) as usize] = if found { LINKED } else { 0 };
            }
        }
        for value in out.iter_mut() {
            if *value == LINKED {
                *value = 255;
            }
        }
    }

    Ok(Image::new(src.size(), PixelFormat::Indexed8, out)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgekit_image::ImageSize;

    fn indexed(width: usize, height: usize, data: Vec<u8>) -> Result<Image, ImgprocError> {
        Ok(Image::new(
            ImageSize { width, height },
            PixelFormat::Indexed8,
            data,
        )?)
    }

    #[test]
    fn binary_threshold_is_two_valued() -> Result<(), ImgprocError> {
        let image = indexed(5, 1, vec![0, 100, 101, 200, 255])?;
        let edges = threshold(&image, 100, 100)?;
        assert_eq!(edges.as_slice(), &[0, 0, 255, 255, 255]);
        Ok(())
    }

    #[test]
    fn hysteresis_keeps_linked_candidates() -> Result<(), ImgprocError> {
        #[rustfmt::skip]
        let image = indexed(5, 1, vec![
            240, 150, 150, 150, 10,
        ])?;
        let edges = threshold(&image, 100, 200)?;
        // The first candidate touches the strong pixel; the later ones
        // only touch other candidates and are dropped.
        assert_eq!(edges.as_slice(), &[255, 255, 0, 0, 0]);
        Ok(())
    }

    #[test]
    fn hysteresis_uses_eight_neighbors() -> Result<(), ImgprocError> {
        #[rustfmt::skip]
        let image = indexed(3, 3, vec![
            240,  10,  10,
             10, 150,  10,
             10,  10,  10,
        ])?;
        let edges = threshold(&image, 100, 200)?;
        #[rustfmt::skip]
        let expected = [
            255,   0,   0,
              0, 255,   0,
              0,   0,   0,
        ];
        assert_eq!(edges.as_slice(), expected);
        Ok(())
    }

    #[test]
    fn isolated_candidates_are_dropped() -> Result<(), ImgprocError> {
        let image = indexed(3, 1, vec![10, 150, 10])?;
        let edges = threshold(&image, 100, 200)?;
        assert_eq!(edges.as_slice(), &[0, 0, 0]);
        Ok(())
    }

    #[test]
    fn rgb_input_is_thresholded_on_luminance() -> Result<(), ImgprocError> {
        let image = Image::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            PixelFormat::Rgb,
            // Luminance 182 and 18.
            vec![0, 255, 0, 0, 0, 255],
        )?;
        let edges = threshold(&image, 100, 100)?;
        assert_eq!(edges.format(), PixelFormat::Indexed8);
        assert_eq!(edges.as_slice(), &[255, 0]);
        Ok(())
    }
}
