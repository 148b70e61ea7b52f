//! Straight-line detection via the Hough transform.
//!
//! Edge pixels vote into an (angle, distance) accumulator; local vote
//! maxima above a threshold are reconstructed as lines, clipped to the
//! image rectangle with [`crate::clip`] and rasterized onto a copy of
//! the base image with [`crate::draw`].

use edgekit_image::{Image, ImageError, ImageSize, PixelFormat};

use crate::clip::clip_line;
use crate::draw::draw_line;
use crate::error::ImgprocError;

/// Tuning parameters for [`hough_lines`].
#[derive(Clone, Debug)]
pub struct HoughParams {
    /// Angle resolution: one accumulator column per whole degree in
    /// `[0, alpha_precision)`. Typically at most 360.
    pub alpha_precision: usize,
    /// Minimum votes for an accumulator cell to be considered a peak.
    pub vote_threshold: u32,
    /// Controls the local-suppression window around candidate peaks;
    /// clamped to `[1, 9]`, halved to get the window radius.
    pub max_lines: usize,
    /// Packed `0xRRGGBB` color for the overlay lines.
    pub line_color: u32,
}

/// Result of [`hough_lines`]: the annotated image and the raw votes.
#[derive(Clone, Debug)]
pub struct HoughLines {
    /// Copy of the base image with every accepted line drawn in.
    pub overlay: Image,
    /// Accumulator visualization: `alpha_precision x 2R` Indexed8,
    /// votes normalized to `[0, 255]` by the maximum count.
    pub accumulator: Image,
}

/// Detect straight lines in a thresholded edge map.
///
/// Every edge pixel (value 255) votes for all parameterizations
/// `rho = (x - cx) cos a + (y - cy) sin a` passing through it, with
/// distances measured from the image center and binned into
/// `[0, 2R)`, `R = ceil(sqrt(2) * max(width, height) / 2)`. Cells with
/// at least `vote_threshold` votes and no strictly larger vote count
/// inside the suppression window become lines; each is reconstructed
/// in image coordinates (sweeping x for angles in `[45, 135]` degrees,
/// y otherwise), clipped to the image rectangle and drawn onto a copy
/// of `base`.
///
/// `edges` must be [`PixelFormat::Indexed8`] and match the size of
/// `base`.
pub fn hough_lines(
    edges: &Image,
    base: &Image,
    params: &HoughParams,
) -> Result<HoughLines, ImgprocError> {
    if edges.format() != PixelFormat::Indexed8 {
        return Err(ImgprocError::UnexpectedPixelFormat {
            expected: PixelFormat::Indexed8,
            actual: edges.format(),
        });
    }
    if edges.size() != base.size() {
        return Err(ImageError::InvalidImageSize(
            edges.width(),
            edges.height(),
            base.width(),
            base.height(),
        )
        .into());
    }

    let (width, height) = (edges.width(), edges.height());
    let alpha_precision = params.alpha_precision;

    let radius = (2.0f64.sqrt() * width.max(height) as f64 / 2.0).ceil() as usize;
    let distance_bins = 2 * radius;
    let mut accu = vec![0u32; alpha_precision * distance_bins];

    // Distances are measured from the integer pixel center.
    let center_x = (width / 2) as f64;
    let center_y = (height / 2) as f64;

    let mut max_vote = 0u32;
    let data = edges.as_slice();
    for j in 0..height {
        for i in 0..width {
            if data[j * width + i] != 255 {
                continue;
            }
            for alpha in 0..alpha_precision {
                let alpha_rad = (alpha as f64).to_radians();
                let rho = (i as f64 - center_x) * alpha_rad.cos()
                    + (j as f64 - center_y) * alpha_rad.sin();
                let bin = (rho + radius as f64).round() as i64;
                // Rounding can land one past either end of the range.
                if bin < 0 || bin >= distance_bins as i64 {
                    continue;
                }
                let cell = &mut accu[bin as usize * alpha_precision + alpha];
                *cell += 1;
                max_vote = max_vote.max(*cell);
            }
        }
    }

    let mut overlay = base.clone();
    let window = params.max_lines.clamp(1, 9) as isize / 2;

    for rotation in 0..distance_bins {
        for alpha in 0..alpha_precision {
            let votes = accu[rotation * alpha_precision + alpha];
            if votes < params.vote_threshold {
                continue;
            }
            if !is_local_maximum(&accu, alpha_precision, distance_bins, rotation, alpha, window) {
                continue;
            }

            log::debug!("line peak at distance bin {rotation}, angle {alpha}, {votes} votes");
            draw_reconstructed_line(&mut overlay, rotation, alpha, radius, params.line_color);
        }
    }

    let accumulator = normalized_accumulator(&accu, alpha_precision, distance_bins, max_vote)?;

    Ok(HoughLines {
        overlay,
        accumulator,
    })
}

/// Whether no cell in the suppression window strictly outvotes the
/// candidate. Ties are accepted.
fn is_local_maximum(
    accu: &[u32],
    alpha_precision: usize,
    distance_bins: usize,
    rotation: usize,
    alpha: usize,
    window: isize,
) -> bool {
    let votes = accu[rotation * alpha_precision + alpha];
    for ly in -window..=window {
        for lx in -window..=window {
            let (r, a) = (rotation as isize + ly, alpha as isize + lx);
            if r < 0 || r >= distance_bins as isize || a < 0 || a >= alpha_precision as isize {
                continue;
            }
            if accu[r as usize * alpha_precision + a as usize] > votes {
                return false;
            }
        }
    }
    true
}

/// Recover the image-space line for an accumulator peak and draw it.
fn draw_reconstructed_line(
    overlay: &mut Image,
    rotation: usize,
    alpha: usize,
    radius: usize,
    color: u32,
) {
    let (width, height) = (overlay.width() as f64, overlay.height() as f64);
    let alpha_rad = (alpha as f64).to_radians();
    let rho = rotation as f64 - radius as f64;

    // Sweep the axis the line crosses most steeply so the solved
    // coordinate stays finite.
    let (sin, cos) = alpha_rad.sin_cos();
    let (p0, p1) = if (45..=135).contains(&alpha) {
        let y_at = |x: f64| (rho - (x - width / 2.0) * cos) / sin + height / 2.0;
        ((0.0, y_at(0.0)), (width, y_at(width)))
    } else {
        let x_at = |y: f64| (rho - (y - height / 2.0) * sin) / cos + width / 2.0;
        ((x_at(0.0), 0.0), (x_at(height), height))
    };

    // Endpoints truncate to whole pixels before clipping.
    let p0 = (p0.0 as i32 as f64, p0.1 as i32 as f64);
    let p1 = (p1.0 as i32 as f64, p1.1 as i32 as f64);

    if let Some((c0, c1)) = clip_line(p0, p1, 0.0, width, 0.0, height) {
        draw_line(
            overlay,
            (c0.0 as i32, c0.1 as i32),
            (c1.0 as i32, c1.1 as i32),
            color,
        );
    }
}

fn normalized_accumulator(
    accu: &[u32],
    alpha_precision: usize,
    distance_bins: usize,
    max_vote: u32,
) -> Result<Image, ImgprocError> {
    let data = if max_vote == 0 {
        // No edge pixels voted; an all-zero visualization, not a
        // division by zero.
        vec![0u8; accu.len()]
    } else {
        let multiplier = 255.0 / max_vote as f64;
        accu.iter()
            .map(|&count| (count as f64 * multiplier) as u8)
            .collect()
    };

    Ok(Image::new(
        ImageSize {
            width: alpha_precision,
            height: distance_bins,
        },
        PixelFormat::Indexed8,
        data,
    )?)
}
