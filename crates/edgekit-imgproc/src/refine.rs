//! Edge map refinement by local non-maximum suppression.

use edgekit_image::{Image, ImageError, PixelFormat};

use crate::error::ImgprocError;

/// Thin a thresholded edge map against a gradient-magnitude image.
///
/// Every foreground pixel of `thresholded` (any nonzero value) is kept
/// at 255 unless one of its 8 in-bounds neighbors is also foreground
/// and carries a strictly larger value in `gradient`; such pixels are
/// suppressed to 0. Background pixels stay 0. The result approximates
/// one-pixel-wide ridges along the gradient maxima.
///
/// Both inputs must be [`PixelFormat::Indexed8`] and share the same
/// dimensions.
pub fn refine(thresholded: &Image, gradient: &Image) -> Result<Image, ImgprocError> {
    for image in [thresholded, gradient] {
        if image.format() != PixelFormat::Indexed8 {
            return Err(ImgprocError::UnexpectedPixelFormat {
                expected: PixelFormat::Indexed8,
                actual: image.format(),
            });
        }
    }
    if thresholded.size() != gradient.size() {
        return Err(ImageError::InvalidImageSize(
            thresholded.width(),
            thresholded.height(),
            gradient.width(),
            gradient.height(),
        )
        .into());
    }

    let (width, height) = (thresholded.width() as isize, thresholded.height() as isize);
    let edges = thresholded.as_slice();
    let magnitude = gradient.as_slice();
    let mut out = vec![0u8; edges.len()];

    for j in 0..height {
        for i in 0..width {
            let p = (j * width + i) as usize;
            if edges[p] == 0 {
                continue;
            }
            let mut suppressed = false;
            'scan: for x in -1..=1 {
                for y in -1..=1 {
                    let (nx, ny) = (i + x, j + y);
                    if nx < 0 || nx >= width || ny < 0 || ny >= height {
                        continue;
                    }
                    let n = (ny * width + nx) as usize;
                    if edges[n] != 0 && magnitude[n] > magnitude[p] {
                        suppressed = true;
                        break 'scan;
                    }
                }
            }
            out[p] = if suppressed { 0 } else { 255 };
        }
    }

    Ok(Image::new(thresholded.size(), PixelFormat::Indexed8, out)?)
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
    fn thick_edge_thins_to_ridge() -> Result<(), ImgprocError> {
        // A 3-pixel-wide vertical edge band whose gradient peaks in the
        // middle column; only the peak column survives.
        #[rustfmt::skip]
        let edges = indexed(5, 3, vec![
            0, 255, 255, 255, 0,
            0, 255, 255, 255, 0,
            0, 255, 255, 255, 0,
        ])?;
        #[rustfmt::skip]
        let gradient = indexed(5, 3, vec![
            0, 40, 90, 40, 0,
            0, 40, 90, 40, 0,
            0, 40, 90, 40, 0,
        ])?;
        let refined = refine(&edges, &gradient)?;
        #[rustfmt::skip]
        let expected = [
            0, 0, 255, 0, 0,
            0, 0, 255, 0, 0,
            0, 0, 255, 0, 0,
        ];
        assert_eq!(refined.as_slice(), expected);
        Ok(())
    }

    #[test]
    fn gradient_plateau_keeps_ties() -> Result<(), ImgprocError> {
        let edges = indexed(3, 1, vec![255, 255, 255])?;
        let gradient = indexed(3, 1, vec![80, 80, 80])?;
        let refined = refine(&edges, &gradient)?;
        // Strictly-greater comparison; equal neighbors never suppress.
        assert_eq!(refined.as_slice(), &[255, 255, 255]);
        Ok(())
    }

    #[test]
    fn background_is_untouched() -> Result<(), ImgprocError> {
        let edges = indexed(3, 1, vec![0, 255, 0])?;
        let gradient = indexed(3, 1, vec![200, 10, 200])?;
        let refined = refine(&edges, &gradient)?;
        // Large gradients under background pixels are irrelevant.
        assert_eq!(refined.as_slice(), &[0, 255, 0]);
        Ok(())
    }

    #[test]
    fn format_and_size_contracts() -> Result<(), ImgprocError> {
        let edges = indexed(2, 2, vec![0; 4])?;
        let rgb = Image::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            PixelFormat::Rgb,
            vec![0; 12],
        )?;
        assert!(matches!(
            refine(&edges, &rgb),
            Err(ImgprocError::UnexpectedPixelFormat { .. })
        ));

        let wider = indexed(3, 2, vec![0; 6])?;
        assert!(matches!(
            refine(&edges, &wider),
            Err(ImgprocError::Image(ImageError::InvalidImageSize(2, 2, 3, 2)))
        ));
        Ok(())
    }
}
