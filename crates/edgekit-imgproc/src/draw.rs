//! In-place rasterization onto image buffers.

use edgekit_image::{Image, PixelFormat};

/// Paint a single pixel with a packed `0xRRGGBB` color.
///
/// Out-of-bounds coordinates are silently ignored. On ARGB images the
/// alpha byte is forced opaque; Indexed8 images take the low byte of
/// the color as the palette index.
pub fn set_pixel(image: &mut Image, x: i32, y: i32, color: u32) {
    if x < 0 || x >= image.width() as i32 || y < 0 || y >= image.height() as i32 {
        return;
    }
    let p = y as usize * image.width() + x as usize;
    let format = image.format();
    let data = image.as_slice_mut();
    match format {
        PixelFormat::Rgb => {
            data[p * 3] = (color >> 16) as u8;
            data[p * 3 + 1] = (color >> 8) as u8;
            data[p * 3 + 2] = color as u8;
        }
        PixelFormat::Argb => {
            data[p * 4] = 0xFF;
            data[p * 4 + 1] = (color >> 16) as u8;
            data[p * 4 + 2] = (color >> 8) as u8;
            data[p * 4 + 3] = color as u8;
        }
        PixelFormat::Indexed8 => {
            data[p] = color as u8;
        }
    }
}

/// Draw the segment `p0 -> p1` with Bresenham's algorithm.
///
/// Both endpoints are plotted. Every write is bounds-checked through
/// [`set_pixel`], so segments reaching outside the image are partially
/// drawn rather than rejected.
///
/// # Examples
///
/// ```
/// use edgekit_image::{Image, ImageSize, PixelFormat};
/// use edgekit_imgproc::draw::draw_line;
///
/// let mut image = Image::from_size_val(
///     ImageSize {
///         width: 8,
///         height: 8,
///     },
///     PixelFormat::Indexed8,
///     0,
/// )
/// .unwrap();
///
/// draw_line(&mut image, (0, 0), (7, 7), 0xFF);
/// assert_eq!(image.get_pixel(3, 3, 0).unwrap(), 0xFF);
/// ```
pub fn draw_line(image: &mut Image, p0: (i32, i32), p1: (i32, i32), color: u32) {
    let (mut x, mut y) = p0;
    let (x1, y1) = p1;

    let dx = x1 - x;
    let step_x = dx.signum();
    let dx = dx.abs() << 1;

    let dy = y1 - y;
    let step_y = dy.signum();
    let dy = dy.abs() << 1;

    set_pixel(image, x, y, color);

    if dx >= dy {
        let mut error = dy - (dx >> 1);
        while x != x1 {
            if error >= 0 && (error != 0 || step_x > 0) {
                error -= dx;
                y += step_y;
            }
            error += dy;
            x += step_x;
            set_pixel(image, x, y, color);
        }
    } else {
        let mut error = dx - (dy >> 1);
        while y != y1 {
            if error >= 0 && (error != 0 || step_y > 0) {
                error -= dy;
                x += step_x;
            }
            error += dx;
            y += step_y;
            set_pixel(image, x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgekit_image::{ImageError, ImageSize};

    fn canvas(width: usize, height: usize, format: PixelFormat) -> Image {
        Image::from_size_val(ImageSize { width, height }, format, 0).expect("valid test image")
    }

    #[test]
    fn horizontal_span_plots_every_pixel() -> Result<(), ImageError> {
        let mut image = canvas(8, 3, PixelFormat::Indexed8);
        draw_line(&mut image, (0, 0), (5, 0), 0xFF);

        for x in 0..6 {
            assert_eq!(image.get_pixel(x, 0, 0)?, 0xFF, "x = {x}");
        }
        assert_eq!(image.get_pixel(6, 0, 0)?, 0);
        assert_eq!(image.as_slice().iter().filter(|&&v| v != 0).count(), 6);
        Ok(())
    }

    #[test]
    fn endpoints_are_always_plotted() -> Result<(), ImageError> {
        let mut image = canvas(10, 10, PixelFormat::Indexed8);
        draw_line(&mut image, (9, 2), (1, 8), 0x7F);
        assert_eq!(image.get_pixel(9, 2, 0)?, 0x7F);
        assert_eq!(image.get_pixel(1, 8, 0)?, 0x7F);
        Ok(())
    }

    #[test]
    fn single_point_line() -> Result<(), ImageError> {
        let mut image = canvas(3, 3, PixelFormat::Indexed8);
        draw_line(&mut image, (1, 1), (1, 1), 0xAA);
        assert_eq!(image.get_pixel(1, 1, 0)?, 0xAA);
        assert_eq!(image.as_slice().iter().filter(|&&v| v != 0).count(), 1);
        Ok(())
    }

    #[test]
    fn steep_line_is_connected() -> Result<(), ImageError> {
        let mut image = canvas(4, 8, PixelFormat::Indexed8);
        draw_line(&mut image, (1, 0), (2, 7), 0xFF);
        // One pixel per row between the endpoints.
        for y in 0..8 {
            let row = &image.as_slice()[y * 4..(y + 1) * 4];
            assert_eq!(row.iter().filter(|&&v| v != 0).count(), 1, "y = {y}");
        }
        Ok(())
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() -> Result<(), ImageError> {
        let mut image = canvas(4, 4, PixelFormat::Indexed8);
        draw_line(&mut image, (-3, 2), (7, 2), 0xFF);
        for x in 0..4 {
            assert_eq!(image.get_pixel(x, 2, 0)?, 0xFF);
        }
        Ok(())
    }

    #[test]
    fn packed_color_unpacks_per_format() -> Result<(), ImageError> {
        let mut rgb = canvas(2, 1, PixelFormat::Rgb);
        set_pixel(&mut rgb, 0, 0, 0x112233);
        assert_eq!(&rgb.as_slice()[..3], &[0x11, 0x22, 0x33]);

        let mut argb = canvas(2, 1, PixelFormat::Argb);
        set_pixel(&mut argb, 1, 0, 0x112233);
        assert_eq!(&argb.as_slice()[4..], &[0xFF, 0x11, 0x22, 0x33]);

        let mut indexed = canvas(2, 1, PixelFormat::Indexed8);
        set_pixel(&mut indexed, 0, 0, 0x112233);
        assert_eq!(indexed.get_pixel(0, 0, 0)?, 0x33);
        Ok(())
    }
}
